//! Turns a setlist corpus into tagged songs.
//!
//! A song line is `Title - Artist`, where the dash (`-`, `–` or `—`) has
//! whitespace on both sides. Hyphens inside words never split, so
//! "Semi-Charmed Life - Third Eye Blind" keeps its full title; the site's
//! old parser split that line at the first hyphen.
use crate::corpus::{Block, Corpus};
use crate::heuristics::Heuristics;
use crate::slug::create_slug;
use setlist_core::section::Section;
use setlist_core::song::{Language, Song, Tempo};
use std::collections::HashSet;
use tracing::{debug, info};

/// Metadata every song listed under a section header inherits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDefaults {
    pub section: Option<Section>,
    pub genres: &'static [&'static str],
    pub moments: &'static [&'static str],
    pub tempo: Option<Tempo>,
    pub language: Option<Language>,
}

/// Used when a header matches none of [`SECTION_HEADERS`].
pub const FALLBACK_DEFAULTS: SectionDefaults = SectionDefaults {
    section: None,
    genres: &["Pop"],
    moments: &["Party"],
    tempo: None,
    language: None,
};

/// Header phrase → defaults, checked top to bottom; the first phrase
/// contained in the header wins.
pub const SECTION_HEADERS: &[(&str, SectionDefaults)] = &[
    (
        "Party Music / Top 40",
        SectionDefaults {
            section: Some(Section::PartyTop40),
            genres: &["Pop", "Top 40"],
            moments: &["Party"],
            tempo: Some(Tempo::High),
            language: None,
        },
    ),
    (
        "80's / 90's / Rock",
        SectionDefaults {
            section: Some(Section::EightiesNinetiesRock),
            genres: &["Rock"],
            moments: &["Party"],
            tempo: Some(Tempo::High),
            language: None,
        },
    ),
    (
        "50's / 60's / Motown",
        SectionDefaults {
            section: Some(Section::FiftiesSixtiesMotown),
            genres: &["Motown", "Oldies", "Soul"],
            moments: &["Party", "Dinner"],
            tempo: Some(Tempo::Mid),
            language: None,
        },
    ),
    (
        "Standards",
        SectionDefaults {
            section: Some(Section::Standards),
            genres: &["Jazz Standards"],
            moments: &["Ceremony", "Cocktail Hour", "Dinner"],
            tempo: Some(Tempo::Chill),
            language: None,
        },
    ),
    (
        "Latin",
        SectionDefaults {
            section: Some(Section::Latin),
            genres: &["Latin"],
            moments: &["Party", "Dinner"],
            tempo: Some(Tempo::High),
            language: Some(Language::Spanish),
        },
    ),
    (
        "Ballads",
        SectionDefaults {
            section: Some(Section::Ballads),
            genres: &["Ballad", "Pop"],
            moments: &["First Dance", "Parent Dance", "Dinner"],
            tempo: Some(Tempo::Chill),
            language: None,
        },
    ),
    (
        "Instrumentals / Jazz",
        SectionDefaults {
            section: Some(Section::InstrumentalsJazz),
            genres: &["Jazz", "Instrumental"],
            moments: &["Cocktail Hour", "Dinner"],
            tempo: Some(Tempo::Chill),
            language: None,
        },
    ),
    (
        "Country / Blues",
        SectionDefaults {
            section: Some(Section::CountryBlues),
            genres: &["Country", "Blues"],
            moments: &["Party", "Dinner"],
            tempo: Some(Tempo::Mid),
            language: None,
        },
    ),
    (
        "Special Dances",
        SectionDefaults {
            section: Some(Section::SpecialDances),
            genres: &["Participation"],
            moments: &["Party"],
            tempo: Some(Tempo::High),
            language: None,
        },
    ),
];

pub fn defaults_for_header(header: &str) -> &'static SectionDefaults {
    SECTION_HEADERS
        .iter()
        .find(|(phrase, _)| header.contains(phrase))
        .map(|(_, defaults)| defaults)
        .unwrap_or(&FALLBACK_DEFAULTS)
}

/// Split a song line at its first separator: a hyphen, en dash or em dash
/// with whitespace on both sides.
///
/// Returns `None` when the line has no separator or either side is empty.
/// Hyphens inside words ("Semi-Charmed Life", "A-ha") are not separators.
pub fn split_song_line(line: &str) -> Option<(&str, &str)> {
    let mut prev: Option<char> = None;

    for (idx, ch) in line.char_indices() {
        if matches!(ch, '-' | '–' | '—') && prev.is_some_and(char::is_whitespace) {
            let rest = &line[idx + ch.len_utf8()..];
            if rest.starts_with(char::is_whitespace) {
                let title = line[..idx].trim();
                let artist = rest.trim();
                if title.is_empty() || artist.is_empty() {
                    return None;
                }
                return Some((title, artist));
            }
        }
        prev = Some(ch);
    }

    None
}

/// Parsed songs plus what the parser threw away on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub songs: Vec<Song>,
    pub blocks: usize,
    pub empty_blocks: usize,
    pub skipped_lines: usize,
    pub duplicates: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogParser {
    corpus: Corpus,
    heuristics: Heuristics,
}

impl CatalogParser {
    pub fn new(corpus: Corpus, heuristics: Heuristics) -> Self {
        Self { corpus, heuristics }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn parse(&self) -> Vec<Song> {
        self.parse_with_report().songs
    }

    pub fn parse_with_report(&self) -> ParseReport {
        let mut report = ParseReport::default();
        let mut seen: HashSet<String> = HashSet::new();

        for block in self.corpus.blocks() {
            report.blocks += 1;
            let parsed = self.parse_block(&block, &mut report.skipped_lines);
            if parsed.is_empty() {
                report.empty_blocks += 1;
                continue;
            }

            for song in parsed {
                if seen.contains(&song.id) {
                    debug!("Dropping duplicate song id {} ({})", song.id, song.display_line());
                    report.duplicates += 1;
                    continue;
                }
                seen.insert(song.id.clone());
                report.songs.push(song);
            }
        }

        info!(
            "Parsed {} songs from {} blocks ({} lines skipped, {} duplicates dropped)",
            report.songs.len(),
            report.blocks,
            report.skipped_lines,
            report.duplicates
        );
        report
    }

    fn parse_block(&self, block: &Block<'_>, skipped: &mut usize) -> Vec<Song> {
        let defaults = defaults_for_header(block.header);
        let mut songs = Vec::with_capacity(block.lines.len());

        for line in &block.lines {
            match split_song_line(line) {
                Some((title, artist)) => songs.push(self.build_song(title, artist, defaults)),
                None => {
                    debug!("Skipping line without title/artist separator: {:?}", line);
                    *skipped += 1;
                }
            }
        }

        songs
    }

    fn build_song(&self, title: &str, artist: &str, defaults: &SectionDefaults) -> Song {
        Song {
            id: create_slug(title),
            title: title.to_owned(),
            artist: artist.to_owned(),
            era: self.heuristics.eras.infer(title),
            genres: to_owned_tags(defaults.genres, FALLBACK_DEFAULTS.genres),
            moments: to_owned_tags(defaults.moments, FALLBACK_DEFAULTS.moments),
            tempo: defaults.tempo,
            language: defaults.language,
            popularity: self.heuristics.popularity.infer(title),
        }
    }
}

fn to_owned_tags(tags: &[&str], fallback: &[&str]) -> Vec<String> {
    let tags = if tags.is_empty() { fallback } else { tags };
    tags.iter().map(|t| (*t).to_owned()).collect()
}

/// Parse the embedded setlist with the built-in heuristics.
pub fn parse_setlist() -> Vec<Song> {
    CatalogParser::default().parse()
}
