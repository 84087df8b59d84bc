//! Browser filter and view settings.
//!
//! Only `search` and `sort` take part in filtering today; the era, genre,
//! moment and tempo fields are carried so that stored filter states keep
//! their shape once those filters are wired up.
use crate::song::{Era, Song, Tempo};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    #[serde(default)]
    pub eras: Vec<Era>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub moments: Vec<String>,
    #[serde(default)]
    pub tempo: Option<Tempo>,
    #[serde(default)]
    pub sort: SortMode,
}

impl FilterState {
    /// Trimmed, lowercased search term, or `None` when the search box is blank.
    pub fn search_term(&self) -> Option<String> {
        let term = self.search.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        }
    }

    pub fn is_search_active(&self) -> bool {
        !self.search.trim().is_empty()
    }

    pub fn matches(&self, song: &Song) -> bool {
        match self.search_term() {
            None => true,
            Some(term) => matches_term(song, &term),
        }
    }
}

/// Case-insensitive substring match of an already-lowercased term against
/// title or artist.
pub fn matches_term(song: &Song, term: &str) -> bool {
    song.title.to_lowercase().contains(term) || song.artist.to_lowercase().contains(term)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Popularity,
    Alphabetical,
    Decade,
    Newest,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Popularity,
        SortMode::Alphabetical,
        SortMode::Decade,
        SortMode::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Popularity => "popularity",
            SortMode::Alphabetical => "alphabetical",
            SortMode::Decade => "decade",
            SortMode::Newest => "newest",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown sort mode: {s}"))
    }
}

/// Grouped list or flat grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Grid => "grid",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(ViewMode::List),
            "grid" => Ok(ViewMode::Grid),
            _ => Err(format!("unknown view mode: {s}")),
        }
    }
}
