//! Top-level Fabula configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CollocationConfig, CombinatoricsConfig, CooccurrenceConfig, FrequencyConfig,
    IndicatorsConfig, KwicConfig, ReadabilityConfig,
};
use crate::constants;
use crate::errors::ConfigError;
use crate::types::Language;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Caller overrides (applied via `apply_caller_overrides`)
/// 2. Environment variables (`FABULA_*`)
/// 3. Project config (`fabula.toml` in the given root)
/// 4. User config (`~/.fabula/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FabulaConfig {
    pub combinatorics: CombinatoricsConfig,
    pub kwic: KwicConfig,
    pub cooccurrence: CooccurrenceConfig,
    pub frequency: FrequencyConfig,
    pub collocations: CollocationConfig,
    pub readability: ReadabilityConfig,
    pub indicators: IndicatorsConfig,
}

/// Values a presentation layer collected from the user for one session.
#[derive(Debug, Clone, Default)]
pub struct CallerOverrides {
    pub kwic_context_width: Option<usize>,
    pub kwic_max_results: Option<usize>,
    pub window_size: Option<usize>,
    pub top_pairs: Option<usize>,
    pub top_terms: Option<usize>,
    pub ngram_size: Option<usize>,
    pub top_collocations: Option<usize>,
    pub language: Option<String>,
}

impl FabulaConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&CallerOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join("fabula.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_caller_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        ::tracing::debug!(root = %root.display(), "configuration resolved");

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &FabulaConfig) -> Result<(), ConfigError> {
        if let Some(width) = config.kwic.context_width {
            if !(1..=constants::MAX_KWIC_CONTEXT_WIDTH).contains(&width) {
                return Err(ConfigError::ValidationFailed {
                    field: "kwic.context_width".to_string(),
                    message: format!(
                        "must be between 1 and {}",
                        constants::MAX_KWIC_CONTEXT_WIDTH
                    ),
                });
            }
        }
        if config.kwic.max_results == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "kwic.max_results".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(size) = config.cooccurrence.window_size {
            if !(constants::MIN_WINDOW_SIZE..=constants::MAX_WINDOW_SIZE).contains(&size) {
                return Err(ConfigError::ValidationFailed {
                    field: "cooccurrence.window_size".to_string(),
                    message: format!(
                        "must be between {} and {}",
                        constants::MIN_WINDOW_SIZE,
                        constants::MAX_WINDOW_SIZE
                    ),
                });
            }
        }
        if config.cooccurrence.top_pairs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "cooccurrence.top_pairs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.frequency.top_terms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "frequency.top_terms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(size) = config.collocations.ngram_size {
            if !(constants::MIN_NGRAM_SIZE..=constants::MAX_NGRAM_SIZE).contains(&size) {
                return Err(ConfigError::ValidationFailed {
                    field: "collocations.ngram_size".to_string(),
                    message: format!(
                        "must be between {} and {}",
                        constants::MIN_NGRAM_SIZE,
                        constants::MAX_NGRAM_SIZE
                    ),
                });
            }
        }
        if config.collocations.top_collocations == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "collocations.top_collocations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.combinatorics.display_limit == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "combinatorics.display_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref tag) = config.readability.language {
            if let Err(e) = tag.parse::<Language>() {
                return Err(ConfigError::ValidationFailed {
                    field: "readability.language".to_string(),
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.fabula/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut FabulaConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: FabulaConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut FabulaConfig, other: &FabulaConfig) {
        // Combinatorics
        if other.combinatorics.permutation_warning_threshold.is_some() {
            base.combinatorics.permutation_warning_threshold =
                other.combinatorics.permutation_warning_threshold;
        }
        if other.combinatorics.combination_warning_count.is_some() {
            base.combinatorics.combination_warning_count =
                other.combinatorics.combination_warning_count;
        }
        if other.combinatorics.display_limit.is_some() {
            base.combinatorics.display_limit = other.combinatorics.display_limit;
        }

        // KWIC
        if other.kwic.context_width.is_some() {
            base.kwic.context_width = other.kwic.context_width;
        }
        if other.kwic.max_results.is_some() {
            base.kwic.max_results = other.kwic.max_results;
        }

        // Co-occurrence
        if other.cooccurrence.window_size.is_some() {
            base.cooccurrence.window_size = other.cooccurrence.window_size;
        }
        if other.cooccurrence.top_pairs.is_some() {
            base.cooccurrence.top_pairs = other.cooccurrence.top_pairs;
        }
        if other.cooccurrence.remove_stopwords.is_some() {
            base.cooccurrence.remove_stopwords = other.cooccurrence.remove_stopwords;
        }
        if !other.cooccurrence.extra_stopwords.is_empty() {
            base.cooccurrence.extra_stopwords = other.cooccurrence.extra_stopwords.clone();
        }

        // Term frequency
        if other.frequency.top_terms.is_some() {
            base.frequency.top_terms = other.frequency.top_terms;
        }
        if other.frequency.remove_stopwords.is_some() {
            base.frequency.remove_stopwords = other.frequency.remove_stopwords;
        }

        // Collocations
        if other.collocations.ngram_size.is_some() {
            base.collocations.ngram_size = other.collocations.ngram_size;
        }
        if other.collocations.top_collocations.is_some() {
            base.collocations.top_collocations = other.collocations.top_collocations;
        }
        if other.collocations.remove_stopwords.is_some() {
            base.collocations.remove_stopwords = other.collocations.remove_stopwords;
        }

        // Indicators
        if !other.indicators.extra_hedging_terms.is_empty() {
            base.indicators.extra_hedging_terms = other.indicators.extra_hedging_terms.clone();
        }

        // Readability
        if other.readability.max_sentences_listed.is_some() {
            base.readability.max_sentences_listed = other.readability.max_sentences_listed;
        }
        if other.readability.language.is_some() {
            base.readability.language = other.readability.language.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `FABULA_KWIC_CONTEXT_WIDTH`, `FABULA_COOCCURRENCE_WINDOW_SIZE`, etc.
    fn apply_env_overrides(config: &mut FabulaConfig) {
        if let Some(v) = env_usize("FABULA_KWIC_CONTEXT_WIDTH") {
            config.kwic.context_width = Some(v);
        }
        if let Some(v) = env_usize("FABULA_KWIC_MAX_RESULTS") {
            config.kwic.max_results = Some(v);
        }
        if let Some(v) = env_usize("FABULA_COOCCURRENCE_WINDOW_SIZE") {
            config.cooccurrence.window_size = Some(v);
        }
        if let Some(v) = env_usize("FABULA_COOCCURRENCE_TOP_PAIRS") {
            config.cooccurrence.top_pairs = Some(v);
        }
        if let Some(v) = env_usize("FABULA_FREQUENCY_TOP_TERMS") {
            config.frequency.top_terms = Some(v);
        }
        if let Some(v) = env_usize("FABULA_COLLOCATIONS_NGRAM_SIZE") {
            config.collocations.ngram_size = Some(v);
        }
        if let Some(v) = env_usize("FABULA_COLLOCATIONS_TOP") {
            config.collocations.top_collocations = Some(v);
        }
        if let Some(v) = env_usize("FABULA_COMBINATORICS_DISPLAY_LIMIT") {
            config.combinatorics.display_limit = Some(v);
        }
        if let Ok(val) = std::env::var("FABULA_LANGUAGE") {
            config.readability.language = Some(val);
        }
    }

    /// Apply caller overrides (highest priority).
    fn apply_caller_overrides(config: &mut FabulaConfig, overrides: &CallerOverrides) {
        if let Some(v) = overrides.kwic_context_width {
            config.kwic.context_width = Some(v);
        }
        if let Some(v) = overrides.kwic_max_results {
            config.kwic.max_results = Some(v);
        }
        if let Some(v) = overrides.window_size {
            config.cooccurrence.window_size = Some(v);
        }
        if let Some(v) = overrides.top_pairs {
            config.cooccurrence.top_pairs = Some(v);
        }
        if let Some(v) = overrides.top_terms {
            config.frequency.top_terms = Some(v);
        }
        if let Some(v) = overrides.ngram_size {
            config.collocations.ngram_size = Some(v);
        }
        if let Some(v) = overrides.top_collocations {
            config.collocations.top_collocations = Some(v);
        }
        if let Some(ref v) = overrides.language {
            config.readability.language = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok().and_then(|v| v.parse::<usize>().ok())
}

/// Returns the user-level config directory: `~/.fabula/`.
fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".fabula"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
