use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    server::AppState,
    types::{SessionUser, User},
};

const SESSION_TTL_HOURS: i64 = 24 * 7;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    name: Option<String>,
    email: String,
    image: Option<String>,
    exp: i64,
    iat: i64,
}

/// Issues and verifies signed session tokens carrying the session payload.
#[derive(Debug, Clone)]
pub struct SessionManager {
    secret: String,
}

impl SessionManager {
    pub fn new(secret: String) -> Self {
        SessionManager { secret }
    }

    /// Issues a session token for a signed-in user.
    pub fn issue(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            image: user.image.clone(),
            exp: (now + Duration::hours(SESSION_TTL_HOURS)).timestamp(),
            iat: now.timestamp(),
        };

        let key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &key).map_err(Error::from)
    }

    /// Verifies a session token and resolves the user it identifies.
    ///
    /// Any verification failure, including expiry, reads as not signed in
    /// rather than as an internal error.
    pub fn verify(&self, token: &str) -> Result<SessionUser> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        let data = decode::<Claims>(token, &key, &Validation::default())
            .map_err(|_| Error::Unauthenticated)?;

        let id = data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| Error::Unauthenticated)?;
        Ok(SessionUser {
            id,
            name: data.claims.name,
            email: data.claims.email,
            image: data.claims.image,
        })
    }
}

/// Extracts the authenticated identity from the `Authorization` header so
/// handlers receive it as an explicit argument.
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(Error::Unauthenticated)?;
        let token = header.strip_prefix("Bearer ").ok_or(Error::Unauthenticated)?;
        state.sessions.verify(token)
    }
}
