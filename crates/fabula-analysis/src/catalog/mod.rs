//! Symbol catalog: case-insensitive codes mapped to descriptions.
//!
//! The catalog is a plain value owned by the caller and passed into every
//! combinatorics call. The 31-entry default lives in [`defaults`].

pub mod defaults;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use fabula_core::errors::CatalogError;
use fabula_core::types::FxHashMap;
use serde::{Deserialize, Serialize};

use self::defaults::DEFAULT_FUNCTIONS;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub code: String,
    pub description: String,
}

/// Ordered code → description mapping with unique canonical codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
    index: FxHashMap<String, usize>,
}

/// Canonical form of a code: trimmed and upper-cased.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

impl SymbolCatalog {
    /// Build a catalog from `(code, description)` pairs, in order.
    ///
    /// Codes are canonicalized; an empty code or a code that collides with
    /// an earlier one after canonicalization is rejected.
    pub fn from_pairs<I, C, D>(pairs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (C, D)>,
        C: AsRef<str>,
        D: Into<String>,
    {
        let mut catalog = Self {
            symbols: Vec::new(),
            index: FxHashMap::default(),
        };
        for (code, description) in pairs {
            let code = normalize_code(code.as_ref());
            if code.is_empty() {
                return Err(CatalogError::EmptyCode);
            }
            if catalog.index.contains_key(&code) {
                return Err(CatalogError::DuplicateCode { code });
            }
            catalog.index.insert(code.clone(), catalog.symbols.len());
            catalog.symbols.push(Symbol {
                code,
                description: description.into(),
            });
        }
        Ok(catalog)
    }

    /// The default catalog, built once and shared.
    pub fn shared_default() -> &'static SymbolCatalog {
        static DEFAULT: OnceLock<SymbolCatalog> = OnceLock::new();
        DEFAULT.get_or_init(SymbolCatalog::default)
    }

    /// Parse a user catalog from JSON.
    ///
    /// Accepts either an array of `{"code", "description"}` objects or a
    /// flat object of `code: description`. Both keep their document order.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse {
                message: e.to_string(),
            })?;
        match value {
            serde_json::Value::Array(items) => {
                let symbols: Vec<Symbol> = serde_json::from_value(serde_json::Value::Array(items))
                    .map_err(|e| CatalogError::Parse {
                        message: e.to_string(),
                    })?;
                Self::try_from(symbols)
            }
            serde_json::Value::Object(map) => {
                let mut pairs = Vec::with_capacity(map.len());
                for (code, description) in map {
                    match description {
                        serde_json::Value::String(text) => pairs.push((code, text)),
                        other => {
                            return Err(CatalogError::Parse {
                                message: format!("description of {code} must be a string, got {other}"),
                            })
                        }
                    }
                }
                Self::from_pairs(pairs)
            }
            _ => Err(CatalogError::Parse {
                message: "expected a JSON array or object".to_string(),
            }),
        }
    }

    /// Serialize as a JSON array of symbols, preserving order.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(&self.symbols).map_err(|e| CatalogError::Parse {
            message: e.to_string(),
        })
    }

    /// Plain mapping for persistence collaborators.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.symbols
            .iter()
            .map(|s| (s.code.clone(), s.description.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Case-insensitive lookup.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.index
            .get(&normalize_code(code))
            .map(|&i| self.symbols[i].description.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(&normalize_code(code))
    }

    /// Resolve every code to its description, in input order.
    ///
    /// Fails with every unknown code (canonical form, input order) rather
    /// than stopping at the first.
    pub fn resolve<S: AsRef<str>>(&self, codes: &[S]) -> Result<Vec<&str>, CatalogError> {
        let mut descriptions = Vec::with_capacity(codes.len());
        let mut missing = Vec::new();
        for code in codes {
            match self.get(code.as_ref()) {
                Some(description) => descriptions.push(description),
                None => missing.push(normalize_code(code.as_ref())),
            }
        }
        if missing.is_empty() {
            Ok(descriptions)
        } else {
            Err(CatalogError::InvalidCodes { codes: missing })
        }
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        let mut catalog = Self {
            symbols: Vec::with_capacity(DEFAULT_FUNCTIONS.len()),
            index: FxHashMap::default(),
        };
        for (i, (code, description)) in DEFAULT_FUNCTIONS.iter().enumerate() {
            catalog.index.insert((*code).to_string(), i);
            catalog.symbols.push(Symbol {
                code: (*code).to_string(),
                description: (*description).to_string(),
            });
        }
        catalog
    }
}

impl TryFrom<Vec<Symbol>> for SymbolCatalog {
    type Error = CatalogError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        Self::from_pairs(symbols.into_iter().map(|s| (s.code, s.description)))
    }
}

impl From<SymbolCatalog> for Vec<Symbol> {
    fn from(catalog: SymbolCatalog) -> Self {
        catalog.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_31_entries() {
        let catalog = SymbolCatalog::default();
        assert_eq!(catalog.len(), 31);
        assert_eq!(catalog.iter().next().unwrap().code, "F1");
        assert_eq!(catalog.iter().last().unwrap().code, "F31");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = SymbolCatalog::default();
        assert_eq!(catalog.get("f11"), catalog.get("F11"));
        assert!(catalog.contains(" f31 "));
        assert!(!catalog.contains("F32"));
    }

    #[test]
    fn test_resolve_reports_all_missing_codes() {
        let catalog = SymbolCatalog::default();
        let err = catalog.resolve(&["F1", "f99", "F2", "x"]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidCodes {
                codes: vec!["F99".to_string(), "X".to_string()]
            }
        );
    }

    #[test]
    fn test_duplicate_codes_rejected_after_normalization() {
        let err = SymbolCatalog::from_pairs([("a1", "one"), ("A1", "two")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCode { code: "A1".into() });
    }

    #[test]
    fn test_empty_code_rejected() {
        let err = SymbolCatalog::from_pairs([("  ", "blank")]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyCode);
    }

    #[test]
    fn test_json_array_keeps_order() {
        let catalog = SymbolCatalog::from_json(
            r#"[{"code": "z", "description": "Last"}, {"code": "a", "description": "First"}]"#,
        )
        .unwrap();
        let codes: Vec<&str> = catalog.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["Z", "A"]);
    }

    #[test]
    fn test_json_object_accepted() {
        let catalog = SymbolCatalog::from_json(r#"{"h1": "Hero leaves", "h2": "Hero returns"}"#)
            .unwrap();
        assert_eq!(catalog.get("H2"), Some("Hero returns"));
    }

    #[test]
    fn test_json_object_keeps_document_order() {
        let catalog = SymbolCatalog::from_json(
            r#"{"F1": "One", "F2": "Two", "F10": "Ten", "F3": "Three"}"#,
        )
        .unwrap();
        let codes: Vec<&str> = catalog.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["F1", "F2", "F10", "F3"]);
    }

    #[test]
    fn test_json_rejects_non_string_description() {
        let err = SymbolCatalog::from_json(r#"{"h1": 3}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_serde_round_trip_through_vec() {
        let catalog = SymbolCatalog::default();
        let json = catalog.to_json().unwrap();
        let back = SymbolCatalog::from_json(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
