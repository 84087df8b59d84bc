//! Shared test utilities for the setlist workspace
//!
//! Song fixtures used across the parser and browser test suites. Only
//! available when the "test-utils" feature is enabled.

use crate::song::{DEFAULT_POPULARITY, Era, Song, Tempo};

/// Create a test song with the id derived the same way the parser does for
/// simple ASCII titles
///
/// # Examples
///
/// ```
/// # use setlist_core::test_utils::create_test_song;
/// let song = create_test_song("Uptown Funk", "Bruno Mars");
/// assert_eq!(song.id, "uptown-funk");
/// assert_eq!(song.genres, vec!["Pop".to_string()]);
/// ```
pub fn create_test_song(title: &str, artist: &str) -> Song {
    Song {
        id: simple_slug(title),
        title: title.to_string(),
        artist: artist.to_string(),
        era: None,
        genres: vec!["Pop".to_string()],
        moments: vec!["Party".to_string()],
        tempo: None,
        language: None,
        popularity: DEFAULT_POPULARITY,
    }
}

/// Create a test song with custom tags
///
/// # Examples
///
/// ```
/// # use setlist_core::test_utils::create_test_song_with_tags;
/// # use setlist_core::song::Tempo;
/// let song = create_test_song_with_tags(
///     "Respect",
///     "Aretha Franklin",
///     &["Motown", "Oldies", "Soul"],
///     &["Party", "Dinner"],
///     None,
///     Some(Tempo::Mid),
/// );
/// assert_eq!(song.genres.len(), 3);
/// assert_eq!(song.tempo, Some(Tempo::Mid));
/// ```
pub fn create_test_song_with_tags(
    title: &str,
    artist: &str,
    genres: &[&str],
    moments: &[&str],
    era: Option<Era>,
    tempo: Option<Tempo>,
) -> Song {
    Song {
        genres: genres.iter().map(|g| g.to_string()).collect(),
        moments: moments.iter().map(|m| m.to_string()).collect(),
        era,
        tempo,
        ..create_test_song(title, artist)
    }
}

/// Same song with a different popularity
pub fn with_popularity(song: Song, popularity: u8) -> Song {
    Song { popularity, ..song }
}

fn simple_slug(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
