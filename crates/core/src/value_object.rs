//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Search criteria
/// are the typical example: two criteria with the same bounds, region and
/// subsidy flag select the same products, so they are interchangeable.
///
/// To "modify" a value object, build a new one (builder-style `with_*`
/// methods returning `Self` are the convention in this workspace).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
