//! Configuration management for the Moodify playlist service.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including OAuth credentials, catalog API
//! endpoints, the session signing secret and server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `moodify/.env` in the platform-specific local
/// data directory. When no file exists there, a `.env` in the working
/// directory is used instead so development setups keep working.
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodify/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    } else {
        dotenv::dotenv().ok();
    }
    Ok(())
}

/// Returns the address the HTTP server binds to.
///
/// Read from `SERVER_ADDRESS`, defaulting to `127.0.0.1:3000`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string())
}

/// Returns the connection URL of the relational store.
///
/// Read from `DATABASE_URL`, defaulting to a `moodify.db` SQLite file in the
/// working directory.
pub fn database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://moodify.db".to_string())
}

/// Returns the secret used to sign session tokens.
///
/// # Panics
///
/// Panics if the `SESSION_SECRET` environment variable is not set.
pub fn session_secret() -> String {
    env::var("SESSION_SECRET").expect("SESSION_SECRET must be set")
}

/// Returns the base URL clients were redirected from during OAuth sign-in.
///
/// Callback URLs are built as `{base}/api/auth/{provider}/callback` and must
/// match the redirect URI registered with each identity provider. Read from
/// `OAUTH_REDIRECT_BASE`, defaulting to `http://127.0.0.1:3000`.
pub fn oauth_redirect_base() -> String {
    env::var("OAUTH_REDIRECT_BASE").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string())
}

/// Returns the base URL of the free catalog search API.
///
/// Read from `SAAVN_API_URL`, defaulting to the public instance.
pub fn saavn_api_url() -> String {
    env::var("SAAVN_API_URL").unwrap_or_else(|_| "https://saavn.dev".to_string())
}

/// Returns the Spotify Web API base URL.
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_auth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify API client ID.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the Google OAuth authorization URL.
pub fn google_auth_url() -> String {
    env::var("GOOGLE_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/v2/auth".to_string())
}

/// Returns the Google OAuth token exchange URL.
pub fn google_token_url() -> String {
    env::var("GOOGLE_TOKEN_URL").unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
}

/// Returns the Google userinfo endpoint URL.
pub fn google_userinfo_url() -> String {
    env::var("GOOGLE_USERINFO_URL")
        .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string())
}

/// Returns the Google OAuth client ID.
///
/// # Panics
///
/// Panics if the `GOOGLE_CLIENT_ID` environment variable is not set.
pub fn google_client_id() -> String {
    env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set")
}

/// Returns the Google OAuth client secret.
///
/// # Panics
///
/// Panics if the `GOOGLE_CLIENT_SECRET` environment variable is not set.
pub fn google_client_secret() -> String {
    env::var("GOOGLE_CLIENT_SECRET").expect("GOOGLE_CLIENT_SECRET must be set")
}

/// Returns the number of catalog playlists aggregated per search in the
/// authenticated catalog mode.
///
/// Read from `MOODIFY_PLAYLIST_LIMIT`, defaulting to 3. Each playlist costs
/// one follow-up request, so total latency scales with this limit.
pub fn playlist_search_limit() -> u32 {
    env::var("MOODIFY_PLAYLIST_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3)
}
