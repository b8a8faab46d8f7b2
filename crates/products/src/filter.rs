//! Filter engine: select the catalog products admitted by a set of criteria.
//!
//! Pure and synchronous. The catalog is only borrowed, results preserve
//! catalog order, and nothing is retained between calls.

use crate::criteria::FilterCriteria;
use crate::product::Product;

/// Return the products of `catalog` admitted by `criteria`, in catalog order.
///
/// Never fails: an empty catalog or an inverted price range simply yields an
/// empty vector.
pub fn filter(catalog: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    filter_refs(catalog, criteria).into_iter().cloned().collect()
}

/// Borrowing variant of [`filter`]: same selection, no clones.
pub fn filter_refs<'a>(catalog: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let matched: Vec<&Product> = catalog.iter().filter(|p| criteria.admits(p)).collect();

    tracing::debug!(
        catalog_size = catalog.len(),
        matched = matched.len(),
        min_price = criteria.min_price,
        max_price = criteria.max_price,
        region = %criteria.region,
        subsidy_only = criteria.subsidy_only,
        "filtered catalog"
    );

    matched
}
