//! Derived views over the catalog: filtering, section grouping and sorting.
//!
//! Nothing here is stored. The browser recomputes these from its songs and
//! filter state whenever it is asked.
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use setlist_core::filter::{FilterState, SortMode, matches_term};
use setlist_core::section::Section;
use setlist_core::song::Song;
use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

/// Songs of one display section, already sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup<'a> {
    pub section: Section,
    pub songs: Vec<&'a Song>,
}

/// Locale-aware title comparison.
///
/// Falls back to a lowercase comparison when collation data cannot be
/// loaded.
pub struct TitleCollator {
    collator: Option<CollatorBorrowed<'static>>,
}

impl TitleCollator {
    pub fn new() -> Self {
        let collator = match Collator::try_new(Default::default(), CollatorOptions::default()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!("Collation data unavailable, sorting titles by lowercase: {}", e);
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
        }
    }
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TitleCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleCollator")
            .field("locale_aware", &self.collator.is_some())
            .finish()
    }
}

pub fn filter_songs<'a>(songs: &'a [Song], filters: &FilterState) -> Vec<&'a Song> {
    match filters.search_term() {
        None => songs.iter().collect(),
        Some(term) => songs.iter().filter(|song| matches_term(song, &term)).collect(),
    }
}

/// Bucket songs by section, sort each bucket and drop the empty ones.
/// Buckets come back in canonical section order whatever the sort mode.
pub fn group_songs<'a>(
    songs: &[&'a Song],
    sort: SortMode,
    collator: &TitleCollator,
) -> Vec<SectionGroup<'a>> {
    let mut buckets: Vec<Vec<&'a Song>> = vec![Vec::new(); Section::ALL.len()];

    for &song in songs {
        let section = Section::for_genres(&song.genres);
        buckets[section as usize].push(song);
    }

    Section::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, songs)| !songs.is_empty())
        .map(|(section, mut songs)| {
            sort_songs(&mut songs, sort, collator);
            SectionGroup { section, songs }
        })
        .collect()
}

/// Stable sort, so ties keep catalog order.
pub fn sort_songs(songs: &mut [&Song], sort: SortMode, collator: &TitleCollator) {
    match sort {
        SortMode::Alphabetical => songs.sort_by(|a, b| collator.compare(&a.title, &b.title)),
        SortMode::Decade => songs.sort_by(|a, b| match (a.era, b.era) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => x.as_str().cmp(y.as_str()),
        }),
        // id as a recency proxy; there is no release date on a song
        SortMode::Newest => songs.sort_by(|a, b| b.id.cmp(&a.id)),
        SortMode::Popularity => songs.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
    }
}

pub fn flatten<'a>(groups: &[SectionGroup<'a>]) -> Vec<&'a Song> {
    groups.iter().flat_map(|g| g.songs.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use setlist_core::song::Era;
    use setlist_core::test_utils::{create_test_song, create_test_song_with_tags, with_popularity};

    fn ids<'a>(songs: &[&'a Song]) -> Vec<&'a str> {
        songs.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_decade_puts_missing_eras_last() {
        let a = create_test_song_with_tags("A", "x", &["Pop"], &["Party"], None, None);
        let b = create_test_song_with_tags("B", "x", &["Pop"], &["Party"], Some(Era::Eighties), None);
        let c = create_test_song_with_tags("C", "x", &["Pop"], &["Party"], None, None);
        let d = create_test_song_with_tags("D", "x", &["Pop"], &["Party"], Some(Era::TwoThousands), None);
        let mut songs = vec![&a, &b, &c, &d];

        sort_songs(&mut songs, SortMode::Decade, &TitleCollator::new());
        // labels compare as strings: "2000s" < "80s"
        assert_eq!(ids(&songs), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_newest_is_id_descending() {
        let a = create_test_song("Africa", "Toto");
        let z = create_test_song("Zombie", "Cranberries");
        let m = create_test_song("Mony Mony", "Billy Idol");
        let mut songs = vec![&a, &z, &m];

        sort_songs(&mut songs, SortMode::Newest, &TitleCollator::new());
        assert_eq!(ids(&songs), vec!["zombie", "mony-mony", "africa"]);
    }

    #[test]
    fn test_popularity_is_stable() {
        let a = create_test_song("First", "x");
        let b = with_popularity(create_test_song("Second", "x"), 5);
        let c = create_test_song("Third", "x");
        let mut songs = vec![&a, &b, &c];

        sort_songs(&mut songs, SortMode::Popularity, &TitleCollator::new());
        assert_eq!(ids(&songs), vec!["second", "first", "third"]);
    }

    #[test]
    fn test_alphabetical_ignores_case() {
        let a = create_test_song("beat it", "MJ");
        let b = create_test_song("Africa", "Toto");
        let c = create_test_song("Creep", "Radiohead");
        let mut songs = vec![&a, &b, &c];

        sort_songs(&mut songs, SortMode::Alphabetical, &TitleCollator::new());
        assert_eq!(ids(&songs), vec!["africa", "beat-it", "creep"]);
    }

    #[test]
    fn test_groups_follow_canonical_order() {
        let dance = create_test_song_with_tags("Conga", "MSM", &["Participation"], &["Party"], None, None);
        let rock = create_test_song_with_tags("Jump", "Van Halen", &["Rock"], &["Party"], None, None);
        let pop = create_test_song("Juice", "Lizzo");
        let songs = vec![&dance, &rock, &pop];

        let groups = group_songs(&songs, SortMode::Popularity, &TitleCollator::new());
        let sections: Vec<Section> = groups.iter().map(|g| g.section).collect();
        assert_eq!(
            sections,
            vec![Section::PartyTop40, Section::EightiesNinetiesRock, Section::SpecialDances]
        );
        assert_eq!(ids(&flatten(&groups)), vec!["juice", "jump", "conga"]);
    }

    #[test]
    fn test_unmapped_genre_goes_to_party() {
        let odd = create_test_song_with_tags("Beer Barrel Polka", "x", &["Polka"], &["Party"], None, None);
        let groups = group_songs(&[&odd], SortMode::Popularity, &TitleCollator::new());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].section, Section::PartyTop40);
    }
}
