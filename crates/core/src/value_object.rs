//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared entirely by their attribute
/// values: `Money { 3999, USD }` equals any other `Money { 3999, USD }`.
/// To "modify" one, build a new one. The bounds keep implementors cheap to
/// copy, comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
