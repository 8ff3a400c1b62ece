//! Value object trait: equality by value, not identity.

/// Marker trait for immutable values compared field-by-field.
///
/// Used for derived data (totals, price breakdowns, order drafts) where two
/// instances with equal fields are interchangeable. Implementors derive
/// `Clone + PartialEq + Debug` and expose no mutating methods; "modification"
/// means constructing a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
