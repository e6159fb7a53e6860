use axum::{Json, extract::State};
use log::{debug, info};
use serde_json::{Map, Value};

use crate::{
    catalog::{self, RESPONSE_KEY},
    error::Result,
    mood::MoodQuery,
    selector::{self, DEFAULT_TAKE},
    server::AppState,
    types::PlaylistRequest,
};

/// `POST /api/getPlaylist`
///
/// Generates a shuffled playlist for the submitted mood. An empty mood is
/// rejected before any upstream call; upstream failures answer with the
/// static error body while the detail is logged.
pub async fn get_playlist(
    State(state): State<AppState>,
    Json(request): Json<PlaylistRequest>,
) -> Result<Json<Value>> {
    let query = MoodQuery::parse(&request.mood)?;
    debug!("fetching playlist for mood '{query}'");

    let outcome = catalog::search(&state.http, &state.tokens, query.as_str()).await?;
    if !outcome.failures.is_empty() {
        info!(
            "{} catalog records dropped while fetching mood '{query}'",
            outcome.failures.len()
        );
    }

    let mut songs = outcome.songs;
    selector::shuffle(&mut songs);
    songs.truncate(DEFAULT_TAKE);

    let mut body = Map::new();
    body.insert(RESPONSE_KEY.to_string(), serde_json::to_value(&songs)?);
    Ok(Json(Value::Object(body)))
}
