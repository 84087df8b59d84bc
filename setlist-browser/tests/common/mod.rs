//! Common test utilities for browser integration tests
#![allow(dead_code)]

use setlist_browser::{PreferenceStore, ScrollAnchor, Viewport};
use setlist_core::error::{Result, SetlistError};
use setlist_core::song::{Era, Song, Tempo};
use setlist_core::test_utils::{create_test_song, create_test_song_with_tags, with_popularity};
use std::cell::Cell;

/// A small catalog touching several sections, in catalog order.
pub fn fixture_songs() -> Vec<Song> {
    vec![
        with_popularity(create_test_song("Uptown Funk", "Bruno Mars"), 5),
        create_test_song("Crazy in Love", "Beyoncé"),
        create_test_song("Juice", "Lizzo"),
        create_test_song_with_tags(
            "Sweet Child O' Mine",
            "Guns N' Roses",
            &["Rock"],
            &["Party"],
            Some(Era::Eighties),
            Some(Tempo::High),
        ),
        create_test_song_with_tags(
            "Respect",
            "Aretha Franklin",
            &["Motown", "Oldies", "Soul"],
            &["Party", "Dinner"],
            Some(Era::Sixties),
            Some(Tempo::Mid),
        ),
        create_test_song_with_tags(
            "Bailando",
            "Enrique Iglesias",
            &["Latin", "Pop Latino"],
            &["Party"],
            None,
            Some(Tempo::High),
        ),
        create_test_song_with_tags(
            "Cupid Shuffle",
            "Cupid",
            &["Participation"],
            &["Party"],
            None,
            None,
        ),
    ]
}

/// Store whose every operation fails.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub writes_attempted: usize,
}

impl PreferenceStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Err(SetlistError::Preferences(format!("storage unavailable reading {key}")))
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<()> {
        self.writes_attempted += 1;
        Err(SetlistError::Preferences(format!("storage unavailable writing {key}")))
    }
}

/// Anchor whose position the test moves by hand between phases.
pub struct FakeAnchor {
    pub top: Cell<Option<f64>>,
}

impl FakeAnchor {
    pub fn at(top: f64) -> Self {
        Self {
            top: Cell::new(Some(top)),
        }
    }
}

impl ScrollAnchor for FakeAnchor {
    fn top(&self) -> Option<f64> {
        self.top.get()
    }
}

#[derive(Debug, Default)]
pub struct RecordingViewport {
    pub offset: f64,
}

impl Viewport for RecordingViewport {
    fn scroll_by(&mut self, dy: f64) {
        self.offset += dy;
    }
}

pub fn ids<'a>(songs: &[&'a Song]) -> Vec<&'a str> {
    songs.iter().map(|s| s.id.as_str()).collect()
}
