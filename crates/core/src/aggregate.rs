//! Aggregate root trait for in-memory domain models.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// An aggregate root is the only entry point for mutating the entities it owns.
/// Child entities (e.g. subcategories) are reachable only through the root, and
/// every invariant spanning the children is enforced by the root's methods.
pub trait AggregateRoot: Entity {
    /// Whether the aggregate is still in use.
    ///
    /// Aggregates are never physically deleted; deactivation is the only
    /// removal semantic.
    fn is_active(&self) -> bool;
}
