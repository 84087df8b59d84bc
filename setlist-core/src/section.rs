//! The nine fixed catalog sections.
//!
//! Sections drive two things: the defaults the parser assigns to every song
//! listed under a section header, and the display buckets the browser groups
//! songs into. The parser never stores the section on a song; the browser
//! re-derives it from the song's genres through [`Section::genres`], so the
//! two tables must stay consistent.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "Party Music / Top 40")]
    PartyTop40,
    #[serde(rename = "80's / 90's / Rock")]
    EightiesNinetiesRock,
    #[serde(rename = "50's / 60's / Motown")]
    FiftiesSixtiesMotown,
    #[serde(rename = "Standards")]
    Standards,
    #[serde(rename = "Latin")]
    Latin,
    #[serde(rename = "Ballads")]
    Ballads,
    #[serde(rename = "Instrumentals / Jazz")]
    InstrumentalsJazz,
    #[serde(rename = "Country / Blues")]
    CountryBlues,
    #[serde(rename = "Special Dances")]
    SpecialDances,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::PartyTop40,
        Section::EightiesNinetiesRock,
        Section::FiftiesSixtiesMotown,
        Section::Standards,
        Section::Latin,
        Section::Ballads,
        Section::InstrumentalsJazz,
        Section::CountryBlues,
        Section::SpecialDances,
    ];

    /// Bucket for songs whose genres match no section.
    pub const FALLBACK: Section = Section::PartyTop40;

    pub fn name(&self) -> &'static str {
        match self {
            Section::PartyTop40 => "Party Music / Top 40",
            Section::EightiesNinetiesRock => "80's / 90's / Rock",
            Section::FiftiesSixtiesMotown => "50's / 60's / Motown",
            Section::Standards => "Standards",
            Section::Latin => "Latin",
            Section::Ballads => "Ballads",
            Section::InstrumentalsJazz => "Instrumentals / Jazz",
            Section::CountryBlues => "Country / Blues",
            Section::SpecialDances => "Special Dances",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.name() == name)
    }

    /// Genre tags accepted into this section's display bucket.
    pub fn genres(&self) -> &'static [&'static str] {
        match self {
            Section::PartyTop40 => &["Pop", "Top 40"],
            Section::EightiesNinetiesRock => &["Rock"],
            Section::FiftiesSixtiesMotown => &["Motown", "Soul", "Oldies"],
            Section::Standards => &["Jazz Standards"],
            Section::Latin => &["Latin", "Salsa", "Merengue", "Reggaeton", "Pop Latino"],
            Section::Ballads => &["Ballad"],
            Section::InstrumentalsJazz => &["Instrumental", "Jazz"],
            Section::CountryBlues => &["Country", "Blues"],
            Section::SpecialDances => &["Participation"],
        }
    }

    /// First section in canonical order whose genre list intersects `genres`.
    pub fn for_genres<S: AsRef<str>>(genres: &[S]) -> Section {
        Self::ALL
            .into_iter()
            .find(|section| {
                let accepted = section.genres();
                genres.iter().any(|g| accepted.contains(&g.as_ref()))
            })
            .unwrap_or(Self::FALLBACK)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_name(section.name()), Some(section));
        }
        assert_eq!(Section::from_name("Polka"), None);
    }

    #[test]
    fn test_first_matching_section_wins() {
        // Ballads carry "Pop" as a secondary genre and Party Music is checked first
        assert_eq!(Section::for_genres(&["Ballad", "Pop"]), Section::PartyTop40);
        assert_eq!(Section::for_genres(&["Jazz", "Instrumental"]), Section::InstrumentalsJazz);
        assert_eq!(Section::for_genres(&["Motown", "Oldies", "Soul"]), Section::FiftiesSixtiesMotown);
    }

    #[test]
    fn test_unknown_genres_fall_back() {
        assert_eq!(Section::for_genres(&["Polka"]), Section::PartyTop40);
        assert_eq!(Section::for_genres::<&str>(&[]), Section::PartyTop40);
    }
}
