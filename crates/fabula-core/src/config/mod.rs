//! Configuration system for Fabula.
//! TOML-based, layered resolution: caller > env > project > user > defaults.

pub mod collocation_config;
pub mod combinatorics_config;
pub mod cooccurrence_config;
pub mod fabula_config;
pub mod frequency_config;
pub mod indicators_config;
pub mod kwic_config;
pub mod readability_config;

pub use collocation_config::CollocationConfig;
pub use combinatorics_config::CombinatoricsConfig;
pub use cooccurrence_config::CooccurrenceConfig;
pub use fabula_config::{CallerOverrides, FabulaConfig};
pub use frequency_config::FrequencyConfig;
pub use indicators_config::IndicatorsConfig;
pub use kwic_config::KwicConfig;
pub use readability_config::ReadabilityConfig;
