//! Domain events and the sink they are dispatched to.

pub mod event;
pub mod sink;

pub use event::Event;
pub use sink::{EventSink, InMemoryEventSink, SentEvent};
