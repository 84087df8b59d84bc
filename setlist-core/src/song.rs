use serde::{Deserialize, Serialize};
use std::fmt;

/// Popularity assigned to every song that is not on the iconic list.
pub const DEFAULT_POPULARITY: u8 = 3;

/// Popularity assigned to iconic titles.
pub const ICONIC_POPULARITY: u8 = 5;

/// A single catalog entry. Identity is `id`, a slug derived from the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<Era>,
    pub genres: Vec<String>,
    pub moments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<Tempo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default = "default_popularity")]
    pub popularity: u8,
}

impl Song {
    /// `"{title} - {artist}"`, the form used for clipboard exports and inquiries.
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.title, self.artist)
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

const fn default_popularity() -> u8 {
    DEFAULT_POPULARITY
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    #[serde(rename = "50s")]
    Fifties,
    #[serde(rename = "60s")]
    Sixties,
    #[serde(rename = "70s")]
    Seventies,
    #[serde(rename = "80s")]
    Eighties,
    #[serde(rename = "90s")]
    Nineties,
    #[serde(rename = "2000s")]
    TwoThousands,
    #[serde(rename = "2010s")]
    TwentyTens,
    #[serde(rename = "2020s")]
    TwentyTwenties,
}

impl Era {
    pub const ALL: [Era; 8] = [
        Era::Fifties,
        Era::Sixties,
        Era::Seventies,
        Era::Eighties,
        Era::Nineties,
        Era::TwoThousands,
        Era::TwentyTens,
        Era::TwentyTwenties,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Era::Fifties => "50s",
            Era::Sixties => "60s",
            Era::Seventies => "70s",
            Era::Eighties => "80s",
            Era::Nineties => "90s",
            Era::TwoThousands => "2000s",
            Era::TwentyTens => "2010s",
            Era::TwentyTwenties => "2020s",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|era| era.as_str() == label)
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tempo {
    Chill,
    Mid,
    High,
}

impl Tempo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tempo::Chill => "Chill",
            Tempo::Mid => "Mid",
            Tempo::High => "High",
        }
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    Bilingual,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Bilingual => "Bilingual",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
