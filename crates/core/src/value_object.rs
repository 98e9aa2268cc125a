//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are the same value. Contrast with entities,
/// which are identified by an id regardless of attribute values. `Price` and
/// `Quantity` are value objects; a cart line is an entity keyed by product id.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
