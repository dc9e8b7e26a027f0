//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec sized for the distinct values of one co-occurrence window (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
