//! Common helpers for catalog integration tests
#![allow(dead_code)]

use setlist_catalog::{CatalogParser, Corpus, Heuristics};
use setlist_core::song::Song;

/// Markers used by the hand-written corpora in these tests
pub const TEST_MARKERS: [&str; 2] = ["#", "*"];

/// Parse a small corpus with the built-in heuristics
pub fn parse_text(text: &str) -> Vec<Song> {
    CatalogParser::new(Corpus::new(text, TEST_MARKERS), Heuristics::default()).parse()
}

/// Find a song by id, panicking with the available ids when missing
pub fn find<'a>(songs: &'a [Song], id: &str) -> &'a Song {
    songs.iter().find(|s| s.id == id).unwrap_or_else(|| {
        let ids: Vec<&str> = songs.iter().map(|s| s.id.as_str()).collect();
        panic!("song {id} not found in {ids:?}")
    })
}
