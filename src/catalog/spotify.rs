use log::{debug, warn};
use reqwest::Client;

use crate::{
    catalog::{FetchFailure, FetchOutcome, shape},
    config,
    error::{Error, Result},
    management::TokenCache,
    types::{CatalogTrack, ClientCredentialsResponse, PlaylistSearchResponse, PlaylistTracksResponse},
};

/// Cache key for the catalog's client-credentials token.
const TOKEN_PROVIDER: &str = "spotify";

/// Tracks requested per aggregated playlist.
const TRACKS_PER_PLAYLIST: u32 = 50;

/// Returns a valid catalog access token, reusing the cached one until it
/// nears expiry and requesting a fresh client-credentials grant otherwise.
pub async fn access_token(http: &Client, tokens: &TokenCache) -> Result<String> {
    if let Some(token) = tokens.get(TOKEN_PROVIDER).await {
        return Ok(token);
    }

    debug!("requesting new client-credentials token for the catalog");
    let response = http
        .post(config::spotify_token_url())
        .basic_auth(config::spotify_client_id(), Some(config::spotify_client_secret()))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    let grant: ClientCredentialsResponse = response.json().await?;
    tokens
        .store(TOKEN_PROVIDER, &grant.access_token, grant.expires_in)
        .await;
    Ok(grant.access_token)
}

/// Searches the authenticated catalog for songs matching `query`.
///
/// Runs a playlist search bounded by the configured result-count limit,
/// then fetches each playlist's tracks with one follow-up request per
/// playlist, sequentially. A failed follow-up only drops that playlist's
/// tracks; the failure is recorded in the outcome.
pub async fn search(http: &Client, tokens: &TokenCache, query: &str) -> Result<FetchOutcome> {
    let token = access_token(http, tokens).await?;
    let limit = config::playlist_search_limit().to_string();

    let api_url = format!("{uri}/search", uri = config::spotify_api_url());
    let response = http
        .get(&api_url)
        .bearer_auth(&token)
        .query(&[
            ("q", query),
            ("type", "playlist"),
            ("limit", limit.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body: PlaylistSearchResponse = response.json().await?;
    let page = body.playlists.ok_or_else(|| {
        Error::UpstreamShapeMismatch("search response missing playlists".to_string())
    })?;

    let mut outcome = FetchOutcome::default();
    for playlist in page.items.into_iter().flatten() {
        let label = playlist.name.clone().unwrap_or_else(|| playlist.id.clone());
        match playlist_tracks(http, &token, &playlist.id).await {
            Ok(tracks) => {
                for raw in &tracks {
                    match shape::catalog_track(raw) {
                        Ok(song) => outcome.songs.push(song),
                        Err(e) => {
                            warn!("dropping unshapeable track from playlist {label}: {e}");
                            outcome.failures.push(FetchFailure {
                                source: label.clone(),
                                reason: e.to_string(),
                            });
                        }
                    }
                }
            }
            Err(e) => {
                // Partial-result tolerance: this playlist's tracks are
                // omitted, the call as a whole still succeeds.
                warn!("skipping playlist {label}: {e}");
                outcome.failures.push(FetchFailure {
                    source: label,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(outcome)
}

async fn playlist_tracks(http: &Client, token: &str, playlist_id: &str) -> Result<Vec<CatalogTrack>> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = config::spotify_api_url(),
        id = playlist_id
    );

    let limit = TRACKS_PER_PLAYLIST.to_string();
    let response = http
        .get(&api_url)
        .bearer_auth(token)
        .query(&[("limit", limit.as_str())])
        .send()
        .await?
        .error_for_status()?;

    let body: PlaylistTracksResponse = response.json().await?;
    Ok(body.items.into_iter().filter_map(|item| item.track).collect())
}
