use crate::{
    catalog, error, info,
    management::TokenCache,
    mood::MoodQuery,
    selector::{self, PAGE_SIZE, Pager},
    success, warning,
};

pub async fn mood(query: String, pages: u32) {
    let query = match MoodQuery::parse(&query) {
        Ok(query) => query,
        Err(e) => error!("{}", e),
    };

    let http = reqwest::Client::new();
    let tokens = TokenCache::new();

    info!("Searching the catalog for '{}'", query);
    let outcome = match catalog::search(&http, &tokens, query.as_str()).await {
        Ok(outcome) => outcome,
        Err(e) => error!("Failed to retrieve playlists: {}", e),
    };

    for failure in &outcome.failures {
        warning!("Skipped {}: {}", failure.source, failure.reason);
    }
    if outcome.songs.is_empty() {
        warning!("No songs matched mood '{}'", query);
        return;
    }

    let mut songs = outcome.songs;
    selector::shuffle(&mut songs);

    let total = songs.len();
    let mut pager = Pager::new(songs, PAGE_SIZE);
    for _ in 0..pages.max(1) {
        let Some(page) = pager.next_page() else {
            break;
        };
        for song in page {
            info!(
                "{} - {}",
                song.title,
                song.artists.as_deref().unwrap_or("unknown artist")
            );
        }
    }

    success!("Showed {} of {} songs", pager.offset(), total);
}
