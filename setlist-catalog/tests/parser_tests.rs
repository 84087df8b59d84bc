use setlist_catalog::{CatalogParser, Corpus, EraTable, Heuristics, PopularityTable};
use setlist_core::song::{Era, Language, Tempo};

mod common;
use common::{TEST_MARKERS, find, parse_text};

#[test]
fn test_section_defaults_are_applied() {
    let songs = parse_text(
        "# Latin\nDespacito - Luis Fonsi\n# Standards\nFly Me to the Moon - Sinatra\n",
    );

    let despacito = find(&songs, "despacito");
    assert_eq!(despacito.genres, vec!["Latin"]);
    assert_eq!(despacito.moments, vec!["Party", "Dinner"]);
    assert_eq!(despacito.tempo, Some(Tempo::High));
    assert_eq!(despacito.language, Some(Language::Spanish));

    let fly = find(&songs, "fly-me-to-the-moon");
    assert_eq!(fly.genres, vec!["Jazz Standards"]);
    assert_eq!(fly.moments, vec!["Ceremony", "Cocktail Hour", "Dinner"]);
    assert_eq!(fly.tempo, Some(Tempo::Chill));
    assert_eq!(fly.language, None);
}

#[test]
fn test_unknown_header_falls_back_to_pop() {
    let songs = parse_text("# Polka Party\nBeer Barrel Polka - Andrews Sisters\n");
    assert_eq!(songs[0].genres, vec!["Pop"]);
    assert_eq!(songs[0].moments, vec!["Party"]);
    assert_eq!(songs[0].tempo, None);
}

#[test]
fn test_lines_without_separator_are_skipped() {
    let corpus = Corpus::new("# Special Dances\nHora Traditional\nCupid Shuffle - Cupid\n", TEST_MARKERS);
    let report = CatalogParser::new(corpus, Heuristics::default()).parse_with_report();

    assert_eq!(report.songs.len(), 1);
    assert_eq!(report.songs[0].title, "Cupid Shuffle");
    assert_eq!(report.skipped_lines, 1);
}

#[test]
fn test_artist_keeps_later_separators() {
    let songs = parse_text("# Party Music / Top 40\nThe Middle - Zedd - Feat. - Maren Morris\n");
    assert_eq!(songs[0].title, "The Middle");
    assert_eq!(songs[0].artist, "Zedd - Feat. - Maren Morris");
}

#[test]
fn test_duplicates_keep_first_occurrence() {
    let corpus = Corpus::new(
        "# 80's / 90's / Rock\nCrazy - Aerosmith\n* Country / Blues\nCrazy – Patsy Cline\nJolene - Dolly Parton\n",
        TEST_MARKERS,
    );
    let report = CatalogParser::new(corpus, Heuristics::default()).parse_with_report();

    assert_eq!(report.duplicates, 1);
    let ids: Vec<&str> = report.songs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["crazy", "jolene"]);
    assert_eq!(report.songs[0].artist, "Aerosmith");
    assert_eq!(report.songs[0].genres, vec!["Rock"]);
}

#[test]
fn test_empty_blocks_are_skipped() {
    let corpus = Corpus::new("# Ballads\n# Latin\nOye Como Va - Santana\n# Standards\n", TEST_MARKERS);
    let report = CatalogParser::new(corpus, Heuristics::default()).parse_with_report();

    assert_eq!(report.blocks, 3);
    assert_eq!(report.empty_blocks, 2);
    assert_eq!(report.songs.len(), 1);
}

#[test]
fn test_heuristics_are_injected() {
    let heuristics = Heuristics {
        eras: EraTable::new([("Jolene", Era::Seventies)]),
        popularity: PopularityTable::new(["jolene"]),
    };
    let corpus = Corpus::new("# Country / Blues\nJolene - Dolly Parton\nBillie Jean - MJ\n", TEST_MARKERS);
    let songs = CatalogParser::new(corpus, heuristics).parse();

    assert_eq!(songs[0].era, Some(Era::Seventies));
    assert_eq!(songs[0].popularity, 5);
    // not in the custom tables, even though the built-in ones know it
    assert_eq!(songs[1].era, None);
    assert_eq!(songs[1].popularity, 3);
}

#[test]
fn test_empty_heuristics_infer_nothing() {
    let corpus = Corpus::new("# Party Music / Top 40\nUptown Funk - Bruno Mars\n", TEST_MARKERS);
    let songs = CatalogParser::new(corpus, Heuristics::empty()).parse();
    assert_eq!(songs[0].era, None);
    assert_eq!(songs[0].popularity, 3);
}

#[test]
fn test_titles_and_artists_are_trimmed() {
    let songs = parse_text("#  Latin \n   Suavemente   -   Elvis Crespo   \n");
    assert_eq!(songs[0].title, "Suavemente");
    assert_eq!(songs[0].artist, "Elvis Crespo");
    assert_eq!(songs[0].id, "suavemente");
}
