//! Output events delivered to the presentation layer.
//! `OutputSink` trait with no-op defaults, synchronous dispatcher.

pub mod dispatcher;
pub mod sink;
pub mod types;

pub use dispatcher::OutputDispatcher;
pub use sink::OutputSink;
pub use types::{AdvisoryOutput, ListingOutput, ScoreOutput, TextOutput};
