//! Event sinks.
//!
//! The runner pushes every `MatchEvent` into a sink as it happens. Sinks are
//! optional; a match run without one produces no events at all.

use crate::rules::MatchEvent;

/// Receiver for match events.
pub trait EventSink {
    /// Called once before the first event of each match.
    fn begin_match(&mut self, _seed: u64) {}

    /// Record one event.
    fn record(&mut self, event: MatchEvent);
}

impl EventSink for Vec<MatchEvent> {
    fn record(&mut self, event: MatchEvent) {
        self.push(event);
    }
}

/// Sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: MatchEvent) {}
}
