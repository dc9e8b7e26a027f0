//! Data types shared by the engines.
//! Fx-hashed collections, tokens, and the language tag.

pub mod collections;
pub mod language;
pub mod token;

pub use collections::{FxHashMap, FxHashSet};
pub use language::Language;
pub use token::{Token, TokenKind};
