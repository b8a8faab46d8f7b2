//! Caller-owned search state for a presentation layer.
//!
//! The filter engine keeps nothing between calls. A screen, however, must
//! tell "no search run yet" apart from "searched, nothing matched"; that
//! distinction lives here.

use crate::catalog::Catalog;
use crate::criteria::FilterCriteria;
use crate::product::Product;

/// What a result view should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState<'a> {
    NotSearched,
    NoMatches,
    Matches(&'a [Product]),
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    catalog: Catalog,
    criteria: FilterCriteria,
    last_results: Option<Vec<Product>>,
}

impl SearchSession {
    /// New session with the default criteria and no search run yet.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_criteria(catalog, FilterCriteria::default())
    }

    pub fn with_criteria(catalog: Catalog, criteria: FilterCriteria) -> Self {
        Self {
            catalog,
            criteria,
            last_results: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Edit criteria in place. Previous results stay visible until the next
    /// [`SearchSession::search`].
    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Run the engine with the current criteria and keep the outcome.
    pub fn search(&mut self) -> &[Product] {
        let results = self.catalog.search(&self.criteria);
        tracing::info!(
            catalog_size = self.catalog.len(),
            matched = results.len(),
            "search completed"
        );
        self.last_results.insert(results)
    }

    pub fn state(&self) -> SearchState<'_> {
        match self.last_results.as_deref() {
            None => SearchState::NotSearched,
            Some([]) => SearchState::NoMatches,
            Some(products) => SearchState::Matches(products),
        }
    }

    /// Number of results of the last search, `None` before the first one.
    pub fn result_count(&self) -> Option<usize> {
        self.last_results.as_ref().map(Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, StaticCatalog};
    use crate::region::Prefecture;

    fn session() -> SearchSession {
        SearchSession::new(StaticCatalog.load().unwrap())
    }

    #[test]
    fn starts_not_searched_with_default_criteria() {
        let session = session();
        assert_eq!(session.state(), SearchState::NotSearched);
        assert_eq!(session.result_count(), None);
        assert_eq!(*session.criteria(), FilterCriteria::default());
    }

    #[test]
    fn no_matches_is_distinct_from_not_searched() {
        let mut session = session();
        session.set_criteria(FilterCriteria::default().with_region(Prefecture::Okinawa));

        assert!(session.search().is_empty());
        assert_eq!(session.state(), SearchState::NoMatches);
        assert_eq!(session.result_count(), Some(0));
    }

    #[test]
    fn matches_expose_results() {
        let mut session = session();
        session.criteria_mut().subsidy_only = true;
        session.search();

        match session.state() {
            SearchState::Matches(products) => {
                let names: Vec<&str> = products.iter().map(|p| p.name()).collect();
                assert_eq!(names, vec!["あきたこまち", "ななつぼし"]);
            }
            other => panic!("Expected Matches, got {other:?}"),
        }
    }

    #[test]
    fn editing_criteria_keeps_previous_results_until_next_search() {
        let mut session = session();
        session.search();
        assert_eq!(session.result_count(), Some(5));

        session.criteria_mut().max_price = 300;
        assert_eq!(session.result_count(), Some(5));

        session.search();
        assert_eq!(session.state(), SearchState::NoMatches);
    }

    #[test]
    fn search_leaves_catalog_untouched() {
        let mut session = session();
        let before: Vec<Product> = session.catalog().as_slice().to_vec();
        session.criteria_mut().subsidy_only = true;
        session.search();
        assert_eq!(session.catalog().as_slice(), before.as_slice());
    }
}
