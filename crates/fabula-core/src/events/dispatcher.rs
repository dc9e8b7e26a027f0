//! OutputDispatcher: synchronous fan-out to registered sinks.

use std::sync::Arc;

use super::sink::OutputSink;
use super::types::*;

/// Synchronous dispatcher wrapping a list of sinks.
#[derive(Default)]
pub struct OutputDispatcher {
    sinks: Vec<Arc<dyn OutputSink>>,
}

impl OutputDispatcher {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn register(&mut self, sink: Arc<dyn OutputSink>) {
        self.sinks.push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Deliver to every sink. A sink that panics is logged and skipped;
    /// later sinks still receive the output.
    fn emit<F: Fn(&dyn OutputSink)>(&self, f: F) {
        for (index, sink) in self.sinks.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(sink.as_ref());
            }));
            if result.is_err() {
                ::tracing::error!(sink = index, "output sink panicked");
            }
        }
    }

    pub fn emit_text(&self, output: &TextOutput) {
        self.emit(|s| s.on_text(output));
    }

    pub fn emit_listing(&self, output: &ListingOutput) {
        self.emit(|s| s.on_listing(output));
    }

    pub fn emit_score(&self, output: &ScoreOutput) {
        self.emit(|s| s.on_score(output));
    }

    pub fn emit_advisory(&self, output: &AdvisoryOutput) {
        ::tracing::warn!(title = %output.title, "{}", output.message);
        self.emit(|s| s.on_advisory(output));
    }
}
