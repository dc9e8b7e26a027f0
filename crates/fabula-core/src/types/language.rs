//! Language tag passed to the tokenizer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LanguageError;

/// The languages distinguished upstream. Any other tag is rejected
/// before it reaches an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Italian,
    English,
}

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Italian => "italian",
            Self::English => "english",
        }
    }

    /// The readability formula is calibrated for Italian only.
    pub fn matches_readability_calibration(&self) -> bool {
        *self == Self::Italian
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "italian" | "it" => Ok(Self::Italian),
            "english" | "en" => Ok(Self::English),
            _ => Err(LanguageError::Unsupported {
                tag: tag.to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
