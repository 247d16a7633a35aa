//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same record when their ids match, whatever their
/// other attributes say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// `true` when `other` refers to the same record as `self`.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
