//! Shared constants for the Fabula text engines.

/// Fabula version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Combinatorics ----

/// Separator between descriptions in a rendered permutation.
pub const PERMUTATION_SEPARATOR: &str = " -> ";

/// Separator between descriptions in a rendered combination.
pub const COMBINATION_SEPARATOR: &str = ", ";

/// Above this many input codes, permutation runs carry a capacity warning (8! = 40,320).
pub const DEFAULT_PERMUTATION_WARNING_THRESHOLD: usize = 8;

/// Above this many expected subsets, combination runs carry a capacity warning.
pub const DEFAULT_COMBINATION_WARNING_COUNT: u128 = 1_000_000;

/// Default number of generated items shown in a listing.
pub const DEFAULT_DISPLAY_LIMIT: usize = 200;

// ---- KWIC ----

/// Default number of context tokens on each side of a match.
pub const DEFAULT_KWIC_CONTEXT_WIDTH: usize = 5;

/// Largest accepted context width.
pub const MAX_KWIC_CONTEXT_WIDTH: usize = 20;

/// Default cap on collected KWIC matches.
pub const DEFAULT_KWIC_MAX_RESULTS: usize = 200;

// ---- Co-occurrence ----

/// Default sliding window size.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Smallest window that can hold a pair.
pub const MIN_WINDOW_SIZE: usize = 2;

/// Largest window accepted from configuration.
pub const MAX_WINDOW_SIZE: usize = 10;

/// Default number of ranked pairs shown.
pub const DEFAULT_TOP_PAIRS: usize = 15;

// ---- Term frequency ----

/// Default number of ranked terms shown.
pub const DEFAULT_TOP_TERMS: usize = 20;

// ---- Collocations ----

/// Default n-gram length.
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Shortest n-gram counted as a collocation.
pub const MIN_NGRAM_SIZE: usize = 2;

/// Longest n-gram accepted.
pub const MAX_NGRAM_SIZE: usize = 5;

/// Default number of ranked collocations shown.
pub const DEFAULT_TOP_COLLOCATIONS: usize = 10;

/// Separator between the words of a rendered n-gram.
pub const NGRAM_SEPARATOR: &str = " ";

// ---- Conversational indicators ----

/// A sentence longer than this multiple of the average length is flagged as long.
pub const LONG_SENTENCE_FACTOR: f64 = 1.5;

/// A sentence shorter than this multiple of the average length is flagged as short.
pub const SHORT_SENTENCE_FACTOR: f64 = 0.5;

/// Long sentences must also exceed this many words.
pub const LONG_SENTENCE_MIN_WORDS: usize = 15;

/// Short sentences must also have fewer than this many words.
pub const SHORT_SENTENCE_MAX_WORDS: usize = 4;

// ---- Readability ----

/// Constant term of the readability formula.
pub const READABILITY_BASE: f64 = 89.0;

/// Sentence weight of the readability formula.
pub const READABILITY_SENTENCE_WEIGHT: f64 = 300.0;

/// Letter weight of the readability formula.
pub const READABILITY_LETTER_WEIGHT: f64 = 10.0;

/// Default cap on sentences listed in a per-sentence report.
pub const DEFAULT_MAX_SENTENCES_LISTED: usize = 300;

/// Language the readability formula is calibrated for.
pub const DEFAULT_LANGUAGE: &str = "italian";
