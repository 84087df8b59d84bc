//! Title-keyed lookup tables used to infer era and popularity.
//!
//! Both tables match on the exact lowercased title. Nothing is guessed from
//! the artist or from partial matches; a miss leaves the era unset and the
//! popularity at the default.
use setlist_core::song::{DEFAULT_POPULARITY, Era, ICONIC_POPULARITY};
use std::collections::{HashMap, HashSet};

const ERA_ENTRIES: &[(&str, Era)] = &[
    ("jailhouse rock", Era::Fifties),
    ("pretty woman", Era::Fifties),
    ("yesterday", Era::Sixties),
    ("satisfaction", Era::Sixties),
    ("respect", Era::Sixties),
    ("come together", Era::Sixties),
    ("hard day's night", Era::Sixties),
    ("i wanna hold your hand", Era::Sixties),
    ("something", Era::Sixties),
    ("while my guitar gently weeps", Era::Sixties),
    ("sweet caroline", Era::Sixties),
    ("your song", Era::Seventies),
    ("fire and rain", Era::Seventies),
    ("lean on me", Era::Seventies),
    ("wild world", Era::Seventies),
    ("dancing in the streets", Era::Seventies),
    ("billie jean", Era::Eighties),
    ("beat it", Era::Eighties),
    ("material girl", Era::Eighties),
    ("like a prayer", Era::Eighties),
    ("girls just wanna have fun", Era::Eighties),
    ("footloose", Era::Eighties),
    ("jump", Era::Eighties),
    ("purple rain", Era::Eighties),
    ("take on me", Era::Eighties),
    ("sweet dreams", Era::Eighties),
    ("tainted love", Era::Eighties),
    ("hungry like the wolf", Era::Eighties),
    ("faith", Era::Eighties),
    ("let's dance", Era::Eighties),
    ("walking on sunshine", Era::Eighties),
    ("smells like teen spirit", Era::Nineties),
    ("creep", Era::Nineties),
    ("don't speak", Era::Nineties),
    ("wonderwall", Era::Nineties),
    ("semi-charmed life", Era::Nineties),
    ("basketcase", Era::Nineties),
    ("my own worst enemy", Era::Nineties),
    ("bittersweet symphony", Era::Nineties),
    ("hey ya", Era::TwoThousands),
    ("crazy in love", Era::TwoThousands),
    ("single ladies", Era::TwoThousands),
    ("hips don't lie", Era::TwoThousands),
    ("toxic", Era::TwoThousands),
    ("since u been gone", Era::TwoThousands),
    ("mr. brightside", Era::TwoThousands),
    ("uptown funk", Era::TwentyTens),
    ("shape of you", Era::TwentyTens),
    ("rolling in the deep", Era::TwentyTens),
    ("happy", Era::TwentyTens),
    ("can't stop the feeling", Era::TwentyTens),
    ("shake it off", Era::TwentyTens),
    ("thinking out loud", Era::TwentyTens),
    ("blinding lights", Era::TwentyTwenties),
    ("watermelon sugar", Era::TwentyTwenties),
    ("levitating", Era::TwentyTwenties),
    ("good 4 u", Era::TwentyTwenties),
    ("as it was", Era::TwentyTwenties),
    ("flowers", Era::TwentyTwenties),
    ("about damn time", Era::TwentyTwenties),
];

const ICONIC_TITLES: &[&str] = &[
    "billie jean",
    "beat it",
    "uptown funk",
    "happy",
    "shape of you",
    "rolling in the deep",
    "hey ya",
    "crazy in love",
    "single ladies",
    "don't stop believin'",
    "sweet caroline",
    "respect",
    "satisfaction",
    "yesterday",
    "something",
    "purple rain",
    "smells like teen spirit",
    "wonderwall",
    "mr. brightside",
    "blinding lights",
    "watermelon sugar",
];

/// Exact lowercase title → era.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EraTable {
    entries: HashMap<String, Era>,
}

impl EraTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Era)>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(title, era)| (title.as_ref().to_lowercase(), era))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(ERA_ENTRIES.iter().copied())
    }

    pub fn infer(&self, title: &str) -> Option<Era> {
        self.entries.get(&title.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Allow-list of iconic titles, stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopularityTable {
    iconic: HashSet<String>,
}

impl PopularityTable {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            iconic: titles.into_iter().map(|t| t.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(ICONIC_TITLES.iter().copied())
    }

    pub fn infer(&self, title: &str) -> u8 {
        if self.iconic.contains(&title.to_lowercase()) {
            ICONIC_POPULARITY
        } else {
            DEFAULT_POPULARITY
        }
    }

    pub fn len(&self) -> usize {
        self.iconic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iconic.is_empty()
    }
}

/// The inference tables handed to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heuristics {
    pub eras: EraTable,
    pub popularity: PopularityTable,
}

impl Heuristics {
    /// Tables that infer nothing: every era unset, every popularity default.
    pub fn empty() -> Self {
        Self {
            eras: EraTable::default(),
            popularity: PopularityTable::default(),
        }
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            eras: EraTable::builtin(),
            popularity: PopularityTable::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_lookup_is_exact_and_case_insensitive() {
        let eras = EraTable::builtin();
        assert_eq!(eras.infer("Billie Jean"), Some(Era::Eighties));
        assert_eq!(eras.infer("BLINDING LIGHTS"), Some(Era::TwentyTwenties));
        assert_eq!(eras.infer("Billie Jean (Live)"), None);
        assert_eq!(eras.infer("Jean"), None);
    }

    #[test]
    fn test_popularity_defaults_to_three() {
        let popularity = PopularityTable::builtin();
        assert_eq!(popularity.infer("Uptown Funk"), 5);
        assert_eq!(popularity.infer("Don't Stop Believin'"), 5);
        assert_eq!(popularity.infer("Uptown"), 3);
    }

    #[test]
    fn test_custom_tables() {
        let heuristics = Heuristics {
            eras: EraTable::new([("Conga", Era::Eighties)]),
            popularity: PopularityTable::new(["Conga"]),
        };
        assert_eq!(heuristics.eras.infer("conga"), Some(Era::Eighties));
        assert_eq!(heuristics.popularity.infer("CONGA"), 5);
        assert_eq!(heuristics.eras.len(), 1);
    }

    #[test]
    fn test_builtin_table_sizes() {
        assert_eq!(EraTable::builtin().len(), ERA_ENTRIES.len());
        assert_eq!(PopularityTable::builtin().len(), 21);
        assert!(Heuristics::empty().eras.is_empty());
    }
}
