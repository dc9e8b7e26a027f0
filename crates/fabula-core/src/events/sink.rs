//! OutputSink trait, all methods with no-op defaults.

use super::types::*;

/// Receiver for completed operation output.
///
/// Sinks override only the outputs they care about. `Send + Sync` so a
/// presentation layer can share one sink across threads.
pub trait OutputSink: Send + Sync {
    fn on_text(&self, _output: &TextOutput) {}
    fn on_listing(&self, _output: &ListingOutput) {}
    fn on_score(&self, _output: &ScoreOutput) {}
    fn on_advisory(&self, _output: &AdvisoryOutput) {}
}
