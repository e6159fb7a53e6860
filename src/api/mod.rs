//! # API Module
//!
//! HTTP endpoints served by the application:
//!
//! - [`get_playlist`] - `POST /api/getPlaylist`, the mood-to-playlist flow:
//!   validate the mood, search the catalog, shuffle, answer with a bounded
//!   page of songs.
//! - [`auth::login`] / [`auth::callback`] - OAuth sign-in against the
//!   configured identity providers, creating the user record on first
//!   sign-in and answering with a session token.
//! - [`create_playlist`] / [`list_playlists`] - authenticated saved-playlist
//!   operations, scoped to the session user.
//! - [`health`] - status and version for monitoring.
//!
//! Handlers return `Result<Json<..>>`; the error type maps the taxonomy to
//! HTTP statuses centrally.

pub mod auth;
mod health;
mod playlist;
mod saved;

pub use health::health;
pub use playlist::get_playlist;
pub use saved::create_playlist;
pub use saved::list_playlists;
