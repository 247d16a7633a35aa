//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute
/// values are equal. They are immutable; "changing" one means replacing it.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum AssistanceType { Sale, Paid, Subsidized }
///
/// impl ValueObject for AssistanceType {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
