//! Narrative combinatorics: permutations and combinations of catalog codes.
//!
//! Two-phase contract: `estimate_*` is a pure size query that carries a
//! [`CapacityWarning`] past the configured threshold; `permute`/`combine`
//! run the enumeration. The caller decides in between.

pub mod engine;
pub mod enumerate;
pub mod estimate;

pub use engine::{CombinatoricsEngine, RenderedCombinations, RenderedPermutations};
pub use estimate::{CapacityWarning, CombinatoricOperation, SizeEstimate};
