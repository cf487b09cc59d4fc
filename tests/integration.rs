// SPDX-License-Identifier: MPL-2.0
use movie_title_translator::config::{self, Config};
use movie_title_translator::domain::card::{cards_from_page, Overview, PosterSource};
use movie_title_translator::domain::language::Language;
use movie_title_translator::domain::movie::SearchPage;
use movie_title_translator::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("card-see-translation"), "See Translation");

    let mut portuguese_config = Config::default();
    portuguese_config.general.language = Some("pt-BR".to_string());
    config::save_to_path(&portuguese_config, &temp_config_file_path)
        .expect("Failed to write portuguese config file");

    let loaded_portuguese_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load portuguese config from path");
    let i18n_pt = I18n::new(None, &loaded_portuguese_config);
    assert_eq!(i18n_pt.current_locale().to_string(), "pt-BR");
    assert_eq!(
        i18n_pt.tr("warning-same-languages"),
        "Os idiomas devem ser diferentes"
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_custom_language_table_from_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[search]
default_source = "es-ES"
default_destination = "en-US"

[[search.languages]]
code = "en-US"
label = "English"

[[search.languages]]
code = "es-ES"
label = "Spanish"
"#,
    )
    .expect("Failed to write config file");

    let cfg = config::load_from_path(&path).expect("Failed to load config");
    let (table, warning) = cfg.language_table();
    assert!(warning.is_none());
    assert_eq!(table.entries().len(), 2);

    let pair = table.default_pair(
        cfg.search.default_source.as_deref(),
        cfg.search.default_destination.as_deref(),
    );
    assert_eq!(pair.source, Language::new("es-ES", "Spanish"));
    assert_eq!(pair.destination, Language::new("en-US", "English"));
}

#[test]
fn test_duplicate_language_codes_fall_back_to_defaults() {
    let mut cfg = Config::default();
    cfg.search.languages = vec![
        Language::new("en-US", "English"),
        Language::new("en-US", "English (again)"),
    ];

    let (table, warning) = cfg.language_table();
    assert_eq!(
        warning.as_deref(),
        Some("notification-config-languages-invalid")
    );
    assert!(table.get("pt-BR").is_some());
}

#[test]
fn test_search_fixture_maps_to_cards() {
    let body = include_str!("fixtures/search_the_godfather.json");
    let page: SearchPage = serde_json::from_str(body).expect("fixture parses");

    let cards = cards_from_page(&page, 170);
    assert_eq!(cards.len(), page.results.len());

    let first = &cards[0];
    assert_eq!(first.title, "The Godfather");
    assert!(matches!(first.poster, PosterSource::Remote(_)));
    match &first.overview {
        Overview::Text(text) => {
            assert!(text.ends_with("..."));
            assert!(text.chars().count() <= 173);
        }
        Overview::Missing => panic!("overview expected"),
    }

    let without_images = cards
        .iter()
        .find(|card| card.id == 1_000_001)
        .expect("card without images");
    assert_eq!(without_images.poster, PosterSource::Placeholder);
    assert_eq!(without_images.overview, Overview::Missing);
}
