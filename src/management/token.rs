use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

// Refresh this long before the stated expiry so in-flight requests never
// race a dying token.
const EXPIRY_MARGIN_SECS: u64 = 240;

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: u64,
}

/// Provider-keyed cache of upstream access tokens, shared across requests.
///
/// Read-mostly: every catalog call checks the cache first and only the
/// occasional refresh takes the write lock. Tokens are reused until they
/// come within the expiry margin of their stated lifetime.
#[derive(Debug, Default)]
pub struct TokenCache {
    inner: RwLock<HashMap<String, CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        TokenCache::default()
    }

    /// Returns the cached token for `provider` if it is still comfortably
    /// inside its lifetime.
    pub async fn get(&self, provider: &str) -> Option<String> {
        let now = Utc::now().timestamp() as u64;
        let tokens = self.inner.read().await;
        tokens
            .get(provider)
            .filter(|token| now + EXPIRY_MARGIN_SECS < token.expires_at)
            .map(|token| token.access_token.clone())
    }

    /// Stores a freshly obtained token with its stated lifetime in seconds.
    pub async fn store(&self, provider: &str, access_token: &str, expires_in: u64) {
        let expires_at = Utc::now().timestamp() as u64 + expires_in;
        self.inner.write().await.insert(
            provider.to_string(),
            CachedToken {
                access_token: access_token.to_string(),
                expires_at,
            },
        );
    }
}
