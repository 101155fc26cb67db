//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two value
/// objects with the same attribute values are equal; identity does not
/// exist for them. `Money` is the canonical example here: `Money::from_cents(100)`
/// equals any other `Money::from_cents(100)`.
///
/// "Modifying" a value object means constructing a new one. The trait only
/// requires what that usage pattern needs:
/// - **Clone**: values are cheap to copy around
/// - **PartialEq**: values compare by their attributes
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
