use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// A domain event: an immutable, versioned fact.
///
/// The serialized form of the event is the payload handed to an
/// [`EventSink`](crate::EventSink).
pub trait Event: Serialize + Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name, `<module>.<aggregate>.<fact>` (e.g. "categories.category.created").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;

    /// JSON payload for dispatch.
    fn payload(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }
}
