use axum::{Json, extract::State};
use log::debug;

use crate::{
    error::Result,
    server::AppState,
    types::{CreatePlaylistRequest, SavedPlaylist, SessionUser},
};

/// `POST /api/playlists`
///
/// Create-or-reuse a named playlist for the session user. A duplicate name
/// returns the existing record instead of erroring.
pub async fn create_playlist(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreatePlaylistRequest>,
) -> Result<Json<SavedPlaylist>> {
    debug!("create playlist '{}' for user {}", request.name, user.id);
    let playlist = state.store.create_playlist(&request.name, user.id).await?;
    Ok(Json(playlist))
}

/// `GET /api/playlists`
///
/// All playlists saved by the session user, each with its songs.
pub async fn list_playlists(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<Vec<SavedPlaylist>>> {
    let playlists = state.store.list_saved_playlists(user.id).await?;
    Ok(Json(playlists))
}
