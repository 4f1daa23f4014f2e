//! Event sinks - where round notifications go
//!
//! A round pushes [`RoundEvent`]s into an injected sink. The sink is
//! fire-and-forget: it cannot veto or alter anything, and a round with the
//! default [`NullSink`] plays exactly like one with a listener attached.

use crate::types::RoundEvent;

/// Receiver for round notifications (sound, logging, recording)
pub trait EventSink {
    fn notify(&mut self, event: RoundEvent);
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: RoundEvent) {}
}

/// Records events in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<RoundEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Drain recorded events
    pub fn take(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: RoundEvent) {
        self.events.push(event);
    }
}

impl<F: FnMut(RoundEvent)> EventSink for F {
    fn notify(&mut self, event: RoundEvent) {
        self(event)
    }
}
