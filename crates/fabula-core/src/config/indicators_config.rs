//! Conversational indicator configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the surface conversational indicators.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IndicatorsConfig {
    /// Hedging terms added to the built-in list of the configured language.
    /// Multi-word entries match consecutive tokens.
    #[serde(default)]
    pub extra_hedging_terms: Vec<String>,
}
