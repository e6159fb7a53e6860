//! # Catalog Module
//!
//! Clients for the external music catalogs that back playlist generation,
//! plus the shaping layer that maps their heterogeneous responses into the
//! internal [`Song`](crate::types::Song) record.
//!
//! Two independent integration modes exist, selected at build time:
//!
//! - [`saavn`] - one search request against a free catalog returning a flat
//!   list of song records (the default build);
//! - [`spotify`] - an authenticated catalog: a cached client-credentials
//!   access token, a playlist search bounded by a result-count limit, and
//!   one follow-up tracks request per playlist, aggregated.
//!
//! Both modes are always compiled; the `spotify-catalog` cargo feature only
//! switches which one [`search`] dispatches to and which key the playlist
//! endpoint uses in its response body.
//!
//! A fetch performs a single attempt per request with no retries. Failures
//! of individual sub-requests or song records are carried in
//! [`FetchOutcome::failures`] so callers can decide whether partial results
//! are acceptable.

pub mod saavn;
pub mod shape;
pub mod spotify;

use reqwest::Client;

use crate::{error::Result, management::TokenCache, types::Song};

/// JSON key carrying the songs in the playlist endpoint response.
pub const RESPONSE_KEY: &str = if cfg!(feature = "spotify-catalog") {
    "playlist"
} else {
    "tracks"
};

/// Result of one catalog fetch: the songs that shaped cleanly and the
/// sub-requests or records that were dropped along the way.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub songs: Vec<Song>,
    pub failures: Vec<FetchFailure>,
}

/// One dropped sub-request or song record inside an otherwise successful
/// fetch.
#[derive(Debug, Clone)]
pub struct FetchFailure {
    pub source: String,
    pub reason: String,
}

/// Searches the catalog selected at build time for songs matching `query`.
#[cfg(not(feature = "spotify-catalog"))]
pub async fn search(http: &Client, _tokens: &TokenCache, query: &str) -> Result<FetchOutcome> {
    saavn::search(http, query).await
}

/// Searches the catalog selected at build time for songs matching `query`.
#[cfg(feature = "spotify-catalog")]
pub async fn search(http: &Client, tokens: &TokenCache, query: &str) -> Result<FetchOutcome> {
    spotify::search(http, tokens, query).await
}
