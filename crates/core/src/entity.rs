//! Identity of catalog records.

/// A record whose identity is its id, not its attribute values.
///
/// A catalog may carry two products with identical names, prices and regions;
/// they are still different products when their ids differ, and a catalog
/// never holds two records sharing one id.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
