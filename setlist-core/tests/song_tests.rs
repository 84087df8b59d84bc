use setlist_core::section::Section;
use setlist_core::song::{Era, Language, Song, Tempo};
use setlist_core::test_utils::{create_test_song, create_test_song_with_tags, with_popularity};

#[test]
fn test_display_line() {
    let song = create_test_song("Valerie", "Amy Winehouse");
    assert_eq!(song.display_line(), "Valerie - Amy Winehouse");
}

#[test]
fn test_has_genre_is_exact() {
    let song = create_test_song_with_tags("Africa", "Toto", &["Rock"], &["Party"], Some(Era::Eighties), Some(Tempo::High));
    assert!(song.has_genre("Rock"));
    assert!(!song.has_genre("rock"));
    assert!(!song.has_genre("Rock "));
}

#[test]
fn test_section_for_parsed_tags() {
    let latin = create_test_song_with_tags("Vivir Mi Vida", "Marc Anthony", &["Latin"], &["Party", "Dinner"], None, Some(Tempo::High));
    assert_eq!(Section::for_genres(&latin.genres), Section::Latin);

    let dance = create_test_song_with_tags("Cupid Shuffle", "Cupid", &["Participation"], &["Party"], None, Some(Tempo::High));
    assert_eq!(Section::for_genres(&dance.genres), Section::SpecialDances);
}

#[test]
fn test_with_popularity() {
    let song = with_popularity(create_test_song("Happy", "Pharrell Williams"), 5);
    assert_eq!(song.popularity, 5);
    assert_eq!(song.id, "happy");
}

#[test]
fn test_optional_fields_default_when_missing() {
    let toml_src = r#"
id = "hey-ya"
title = "Hey Ya"
artist = "Outkast"
genres = ["Pop", "Top 40"]
moments = ["Party"]
"#;
    let song: Song = toml::from_str(toml_src).unwrap();
    assert_eq!(song.popularity, 3);
    assert_eq!(song.era, None);
    assert_eq!(song.tempo, None);
    assert_eq!(song.language, None);
}

#[test]
fn test_language_and_tempo_labels() {
    assert_eq!(Language::Spanish.to_string(), "Spanish");
    assert_eq!(Tempo::Chill.to_string(), "Chill");
    assert_eq!(Era::TwentyTwenties.to_string(), "2020s");
}
