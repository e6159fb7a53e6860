use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use crate::types::Song;

/// Songs delivered in a one-shot playlist response.
pub const DEFAULT_TAKE: usize = 10;

/// Songs revealed per "load more" step.
pub const PAGE_SIZE: usize = 5;

/// Uniform in-place shuffle, swapping from the end down to index 1.
pub fn shuffle(songs: &mut [Song]) {
    let mut rng = rand::rng();
    for i in (1..songs.len()).rev() {
        let j = rng.random_range(0..=i);
        songs.swap(i, j);
    }
}

/// Reveals an already-shuffled result set one fixed-size page at a time.
///
/// Pagination state lives with one fetch: a new fetch builds a new pager
/// with the offset back at zero. The offset advances by the page size and
/// never runs past the end of the set.
#[derive(Debug)]
pub struct Pager {
    songs: Vec<Song>,
    offset: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(songs: Vec<Song>, page_size: usize) -> Self {
        Pager {
            songs,
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    /// Returns the next page and advances the offset, or `None` once the
    /// set is exhausted.
    pub fn next_page(&mut self) -> Option<&[Song]> {
        if self.offset >= self.songs.len() {
            return None;
        }
        let end = (self.offset + self.page_size).min(self.songs.len());
        let page = &self.songs[self.offset..end];
        self.offset = end;
        Some(page)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total(&self) -> usize {
        self.songs.len()
    }

    pub fn remaining(&self) -> usize {
        self.songs.len() - self.offset
    }
}

/// Generation counter guarding against superseded fetches.
///
/// Each new fetch calls [`RequestSequence::begin`] and tags its eventual
/// response with the returned generation; a response whose generation is no
/// longer current must be dropped instead of overwriting newer state.
#[derive(Debug, Default)]
pub struct RequestSequence(AtomicU64);

impl RequestSequence {
    pub fn new() -> Self {
        RequestSequence(AtomicU64::new(0))
    }

    /// Starts a new request generation, superseding all earlier ones.
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }
}
