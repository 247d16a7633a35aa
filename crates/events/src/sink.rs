//! Event dispatch abstraction (mechanics only).
//!
//! The sink is a fire-and-report port: `send` returns whether the event was
//! accepted. There is no retry and no delivery guarantee beyond that flag;
//! callers decide what a rejected dispatch means for their operation.

use std::sync::{Arc, Mutex};

use serde_json::Value as JsonValue;

/// Destination for domain events.
pub trait EventSink: Send + Sync {
    /// Dispatch `payload` under `event_name`.
    ///
    /// Returns `false` when the event could not be dispatched.
    fn send(&self, event_name: &str, payload: &JsonValue) -> bool;
}

impl<S> EventSink for Arc<S>
where
    S: EventSink + ?Sized,
{
    fn send(&self, event_name: &str, payload: &JsonValue) -> bool {
        (**self).send(event_name, payload)
    }
}

impl<S> EventSink for &S
where
    S: EventSink + ?Sized,
{
    fn send(&self, event_name: &str, payload: &JsonValue) -> bool {
        (**self).send(event_name, payload)
    }
}

/// An event accepted by an [`InMemoryEventSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct SentEvent {
    pub name: String,
    pub payload: JsonValue,
}

/// In-memory event sink for tests/dev.
///
/// - No IO
/// - Records every accepted event in dispatch order
/// - Can be built to reject every dispatch
#[derive(Debug, Default)]
pub struct InMemoryEventSink {
    sent: Mutex<Vec<SentEvent>>,
    reject: bool,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose `send` always reports failure.
    pub fn rejecting() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    /// Events accepted so far.
    pub fn sent(&self) -> Vec<SentEvent> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(_) => vec![],
        }
    }
}

impl EventSink for InMemoryEventSink {
    fn send(&self, event_name: &str, payload: &JsonValue) -> bool {
        if self.reject {
            tracing::debug!(event_name, "in-memory sink rejecting event");
            return false;
        }

        let Ok(mut sent) = self.sent.lock() else {
            return false;
        };
        sent.push(SentEvent {
            name: event_name.to_string(),
            payload: payload.clone(),
        });
        true
    }
}
