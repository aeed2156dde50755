//! Tests for layered configuration loading.

use std::io::Write;
use std::sync::Mutex;

use reviewlens_core::config::{
    defaults, CliOverrides, LexicalReduction, ReviewLensConfig, SpellingProvider,
};
use reviewlens_core::errors::ConfigError;

/// Serializes tests that touch process environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_KEYS: &[&str] = &[
    "PORT",
    "REVIEWLENS_PORT",
    "REVIEWLENS_HOST",
    "REVIEWLENS_EMBEDDINGS_PATH",
    "REVIEWLENS_CLASSIFIER_PATH",
    "REVIEWLENS_MAX_REVIEWS",
    "REVIEWLENS_MAX_REVIEW_CHARS",
    "REVIEWLENS_SPELLING_PROVIDER",
    "REVIEWLENS_DICTIONARY_PATH",
    "REVIEWLENS_LOG_LEVEL",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

#[test]
fn empty_toml_yields_defaults() {
    let config = ReviewLensConfig::from_toml("").unwrap();
    assert_eq!(config.text.max_review_chars, defaults::DEFAULT_MAX_REVIEW_CHARS);
    assert_eq!(config.model.dimensions, 100);
    assert_eq!(config.model.window, 5);
    assert_eq!(config.model.min_count, 1);
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.max_reviews, 200);
    assert_eq!(config.scraper.review_selector, ".review");
    assert_eq!(config.text.spelling_provider, SpellingProvider::Norvig);
    assert_eq!(config.text.lexical_reduction, LexicalReduction::Stem);
}

#[test]
fn partial_toml_overrides_only_named_keys() {
    let config = ReviewLensConfig::from_toml(
        r#"
        [server]
        port = 8080

        [text]
        spelling_provider = "none"
        lexical_reduction = "lemma"
        "#,
    )
    .unwrap();
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, defaults::DEFAULT_HOST);
    assert_eq!(config.text.spelling_provider, SpellingProvider::None);
    assert_eq!(config.text.lexical_reduction, LexicalReduction::Lemma);
    assert_eq!(config.model.dimensions, defaults::DEFAULT_EMBEDDING_DIMENSIONS);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = ReviewLensConfig::from_toml("[server\nport = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validation_rejects_zero_values() {
    let mut config = ReviewLensConfig::default();
    config.model.dimensions = 0;
    let err = ReviewLensConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "model.dimensions"));

    let mut config = ReviewLensConfig::default();
    config.server.max_reviews = 0;
    assert!(ReviewLensConfig::validate(&config).is_err());

    let mut config = ReviewLensConfig::default();
    config.text.max_review_chars = 0;
    assert!(ReviewLensConfig::validate(&config).is_err());

    let mut config = ReviewLensConfig::default();
    config.model.svm_lambda = f64::NAN;
    assert!(ReviewLensConfig::validate(&config).is_err());

    let mut config = ReviewLensConfig::default();
    config.scraper.rating_selector = "  ".to_string();
    assert!(ReviewLensConfig::validate(&config).is_err());
}

#[test]
fn defaults_validate() {
    assert!(ReviewLensConfig::validate(&ReviewLensConfig::default()).is_ok());
}

#[test]
fn load_from_explicit_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[model]\nembeddings_path = \"/srv/w2v.txt\"").unwrap();

    let config = ReviewLensConfig::load(Some(file.path()), None).unwrap();
    assert_eq!(config.model.embeddings_path, "/srv/w2v.txt");
    assert_eq!(config.model.classifier_path, defaults::DEFAULT_CLASSIFIER_PATH);
}

#[test]
fn load_missing_explicit_file_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    let dir = tempfile::tempdir().unwrap();
    let err = ReviewLensConfig::load(Some(&dir.path().join("absent.toml")), None).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn env_overrides_file_and_cli_overrides_env() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nport = 7000\nmax_reviews = 10").unwrap();

    std::env::set_var("PORT", "7100");
    std::env::set_var("REVIEWLENS_MAX_REVIEWS", "25");
    std::env::set_var("REVIEWLENS_SPELLING_PROVIDER", "NONE");
    let config = ReviewLensConfig::load(Some(file.path()), None).unwrap();
    assert_eq!(config.server.port, 7100);
    assert_eq!(config.server.max_reviews, 25);
    assert_eq!(config.text.spelling_provider, SpellingProvider::None);

    std::env::set_var("REVIEWLENS_PORT", "7200");
    let config = ReviewLensConfig::load(Some(file.path()), None).unwrap();
    assert_eq!(config.server.port, 7200);

    let cli = CliOverrides {
        port: Some(9000),
        host: Some("127.0.0.1".to_string()),
        ..Default::default()
    };
    let config = ReviewLensConfig::load(Some(file.path()), Some(&cli)).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.bind_address(), "127.0.0.1:9000");

    clear_env();
}

#[test]
fn unparseable_env_values_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    std::env::set_var("PORT", "not-a-port");
    std::env::set_var("REVIEWLENS_SPELLING_PROVIDER", "hunspell");
    let config = ReviewLensConfig::load(None, None).unwrap();
    assert_eq!(config.server.port, defaults::DEFAULT_PORT);
    assert_eq!(config.text.spelling_provider, SpellingProvider::Norvig);

    clear_env();
}

#[test]
fn toml_round_trip_preserves_values() {
    let mut config = ReviewLensConfig::default();
    config.server.port = 6123;
    config.text.dictionary_path = Some("words.txt".to_string());
    let text = config.to_toml().unwrap();
    let back = ReviewLensConfig::from_toml(&text).unwrap();
    assert_eq!(back.server.port, 6123);
    assert_eq!(back.text.dictionary_path.as_deref(), Some("words.txt"));
}
