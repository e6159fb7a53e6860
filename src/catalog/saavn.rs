use log::warn;
use reqwest::Client;

use crate::{
    catalog::{FetchFailure, FetchOutcome, shape},
    config,
    error::{Error, Result},
    types::SaavnSearchResponse,
};

/// Searches the free catalog for songs matching `query`.
///
/// One GET against the search endpoint; a single attempt, no retries.
/// Records that fail to shape are dropped into the outcome's failure list,
/// but a structurally valid response whose records all fail is treated as a
/// shape mismatch.
pub async fn search(http: &Client, query: &str) -> Result<FetchOutcome> {
    let api_url = format!("{uri}/api/search", uri = config::saavn_api_url());

    let response = http
        .get(&api_url)
        .query(&[("query", query)])
        .send()
        .await?
        .error_for_status()?;

    let body: SaavnSearchResponse = response.json().await?;

    if !body.success {
        return Err(Error::UpstreamShapeMismatch(
            "search response success flag not set".to_string(),
        ));
    }
    let results = body
        .data
        .and_then(|data| data.songs)
        .map(|songs| songs.results)
        .ok_or_else(|| {
            Error::UpstreamShapeMismatch("search response missing songs.results".to_string())
        })?;

    let total = results.len();
    let mut outcome = FetchOutcome::default();
    for raw in &results {
        match shape::saavn_song(raw) {
            Ok(song) => outcome.songs.push(song),
            Err(e) => {
                warn!("dropping unshapeable song record: {e}");
                outcome.failures.push(FetchFailure {
                    source: raw.id.clone().unwrap_or_else(|| "<no id>".to_string()),
                    reason: e.to_string(),
                });
            }
        }
    }

    if total > 0 && outcome.songs.is_empty() {
        return Err(Error::UpstreamShapeMismatch(
            "no song record in the search response could be shaped".to_string(),
        ));
    }

    Ok(outcome)
}
