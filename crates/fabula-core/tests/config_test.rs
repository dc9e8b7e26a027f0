//! Tests for the Fabula configuration system.

use std::sync::Mutex;

use fabula_core::config::{CallerOverrides, FabulaConfig};
use fabula_core::errors::ConfigError;
use fabula_core::types::Language;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all FABULA_ env vars to prevent cross-test contamination.
fn clear_fabula_env_vars() {
    for key in [
        "FABULA_KWIC_CONTEXT_WIDTH",
        "FABULA_KWIC_MAX_RESULTS",
        "FABULA_COOCCURRENCE_WINDOW_SIZE",
        "FABULA_COOCCURRENCE_TOP_PAIRS",
        "FABULA_COMBINATORICS_DISPLAY_LIMIT",
        "FABULA_FREQUENCY_TOP_TERMS",
        "FABULA_COLLOCATIONS_NGRAM_SIZE",
        "FABULA_COLLOCATIONS_TOP",
        "FABULA_LANGUAGE",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fabula_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("fabula.toml"),
        r#"
[kwic]
context_width = 3
max_results = 50

[cooccurrence]
window_size = 4
"#,
    )
    .unwrap();

    std::env::set_var("FABULA_KWIC_CONTEXT_WIDTH", "7");

    let overrides = CallerOverrides {
        window_size: Some(6),
        ..Default::default()
    };
    let config = FabulaConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Env beats project file
    assert_eq!(config.kwic.effective_context_width(), 7);
    // Project file beats defaults
    assert_eq!(config.kwic.effective_max_results(), 50);
    // Caller beats project file
    assert_eq!(config.cooccurrence.effective_window_size(), 6);

    clear_fabula_env_vars();
}

#[test]
fn test_load_without_files_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fabula_env_vars();

    let dir = tempdir();
    let config = FabulaConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.kwic.effective_context_width(), 5);
    assert_eq!(config.kwic.effective_max_results(), 200);
    assert_eq!(config.cooccurrence.effective_window_size(), 3);
    assert_eq!(config.cooccurrence.effective_top_pairs(), 15);
    assert!(config.cooccurrence.effective_remove_stopwords());
    assert_eq!(config.combinatorics.effective_permutation_warning_threshold(), 8);
    assert_eq!(config.combinatorics.effective_display_limit(), 200);
    assert_eq!(config.readability.effective_max_sentences_listed(), 300);
    assert_eq!(config.readability.effective_language().unwrap(), Language::Italian);
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fabula_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("fabula.toml"), "[kwic\ncontext_width = ").unwrap();

    let err = FabulaConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_window_size_out_of_range_rejected() {
    let err = FabulaConfig::from_toml("[cooccurrence]\nwindow_size = 1\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "cooccurrence.window_size");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(FabulaConfig::from_toml("[cooccurrence]\nwindow_size = 11\n").is_err());
}

#[test]
fn test_context_width_out_of_range_rejected() {
    assert!(FabulaConfig::from_toml("[kwic]\ncontext_width = 0\n").is_err());
    assert!(FabulaConfig::from_toml("[kwic]\ncontext_width = 21\n").is_err());
    assert!(FabulaConfig::from_toml("[kwic]\ncontext_width = 20\n").is_ok());
}

#[test]
fn test_unsupported_language_rejected() {
    let err = FabulaConfig::from_toml("[readability]\nlanguage = \"klingon\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_env_language_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fabula_env_vars();

    std::env::set_var("FABULA_LANGUAGE", "english");
    let dir = tempdir();
    let config = FabulaConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.readability.effective_language().unwrap(), Language::English);

    clear_fabula_env_vars();
}

#[test]
fn test_unknown_keys_ignored() {
    let config = FabulaConfig::from_toml(
        r#"
[kwic]
context_width = 2
colour = "blue"

[unknown_section]
x = 1
"#,
    )
    .unwrap();
    assert_eq!(config.kwic.effective_context_width(), 2);
}

#[test]
fn test_toml_round_trip_preserves_values() {
    let config = FabulaConfig::from_toml(
        r#"
[cooccurrence]
extra_stopwords = ["castello", "re"]
remove_stopwords = false
"#,
    )
    .unwrap();
    let serialized = config.to_toml().unwrap();
    let reparsed = FabulaConfig::from_toml(&serialized).unwrap();
    assert_eq!(reparsed.cooccurrence.extra_stopwords, vec!["castello", "re"]);
    assert!(!reparsed.cooccurrence.effective_remove_stopwords());
}

#[test]
fn test_invalid_user_toml_keeps_parser_diagnostic() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fabula_env_vars();

    let home = tempdir();
    std::fs::create_dir_all(home.path().join(".fabula")).unwrap();
    let user_config = home.path().join(".fabula").join("config.toml");
    std::fs::write(&user_config, "[kwic]\ncontext_width = \"wide\"\n").unwrap();

    let previous_home = std::env::var_os("HOME");
    std::env::set_var("HOME", home.path());
    let project = tempdir();
    let result = FabulaConfig::load(project.path(), None);
    match previous_home {
        Some(value) => std::env::set_var("HOME", value),
        None => std::env::remove_var("HOME"),
    }

    match result.unwrap_err() {
        ConfigError::ParseError { path, message } => {
            assert_eq!(path, user_config.display().to_string());
            assert!(message.contains("context_width"), "got: {message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_text_engine_sections_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fabula_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("fabula.toml"),
        r#"
[frequency]
top_terms = 5
remove_stopwords = false

[collocations]
ngram_size = 3
top_collocations = 4

[indicators]
extra_hedging_terms = ["a quanto pare"]
"#,
    )
    .unwrap();
    std::env::set_var("FABULA_COLLOCATIONS_NGRAM_SIZE", "4");

    let overrides = CallerOverrides {
        top_terms: Some(8),
        ..Default::default()
    };
    let config = FabulaConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(config.frequency.effective_top_terms(), 8);
    assert!(!config.frequency.effective_remove_stopwords());
    assert_eq!(config.collocations.effective_ngram_size(), 4);
    assert_eq!(config.collocations.effective_top_collocations(), 4);
    assert!(config.collocations.effective_remove_stopwords());
    assert_eq!(config.indicators.extra_hedging_terms, vec!["a quanto pare"]);

    clear_fabula_env_vars();
}

#[test]
fn test_text_engine_defaults() {
    let config = FabulaConfig::default();
    assert_eq!(config.frequency.effective_top_terms(), 20);
    assert_eq!(config.collocations.effective_ngram_size(), 2);
    assert_eq!(config.collocations.effective_top_collocations(), 10);
    assert!(config.indicators.extra_hedging_terms.is_empty());
}

#[test]
fn test_ngram_size_out_of_range_rejected() {
    for bad in ["[collocations]\nngram_size = 1\n", "[collocations]\nngram_size = 6\n"] {
        match FabulaConfig::from_toml(bad) {
            Err(ConfigError::ValidationFailed { field, .. }) => {
                assert_eq!(field, "collocations.ngram_size");
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
    assert!(FabulaConfig::from_toml("[frequency]\ntop_terms = 0\n").is_err());
    assert!(FabulaConfig::from_toml("[collocations]\ntop_collocations = 0\n").is_err());
}
