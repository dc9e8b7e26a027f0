//! Fabula text engines.
//!
//! Narrative-function combinatorics over a symbol catalog, sliding-window
//! co-occurrence, term frequencies and n-gram collocations, keyword-in-context
//! extraction, readability scoring and surface conversational indicators,
//! plus the workbench facade that a presentation layer drives.

pub mod catalog;
pub mod collocations;
pub mod combinatorics;
pub mod cooccurrence;
pub mod frequency;
pub mod kwic;
pub mod pragmatics;
pub mod readability;
pub mod tokenize;
pub mod workbench;

pub use catalog::{Symbol, SymbolCatalog};
pub use workbench::Workbench;
