//! Search criteria and the price-range sanitization helpers around them.

use serde::{Deserialize, Serialize};

use ricefinder_core::ValueObject;

use crate::product::Product;
use crate::region::{Prefecture, RegionFilter};

/// Lower end of the price slider (yen per kg).
pub const DEFAULT_MIN_PRICE: i64 = 200;
/// Upper end of the price slider (yen per kg).
pub const DEFAULT_MAX_PRICE: i64 = 1000;

/// User-selected constraints for one search.
///
/// The bounds are plain integers and are *not* required to be ordered: an
/// inverted range (`min_price > max_price`) is a valid value that admits no
/// product at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub min_price: i64,
    pub max_price: i64,
    pub region: RegionFilter,
    pub subsidy_only: bool,
}

impl ValueObject for FilterCriteria {}

impl Default for FilterCriteria {
    /// The initial state of the search screen: 200–1000 yen/kg, every region,
    /// no subsidy restriction.
    fn default() -> Self {
        Self {
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            region: RegionFilter::All,
            subsidy_only: false,
        }
    }
}

impl FilterCriteria {
    /// Criteria that admit every product.
    pub fn unbounded() -> Self {
        Self {
            min_price: i64::MIN,
            max_price: i64::MAX,
            region: RegionFilter::All,
            subsidy_only: false,
        }
    }

    pub fn with_price_range(self, min_price: i64, max_price: i64) -> Self {
        Self {
            min_price,
            max_price,
            ..self
        }
    }

    pub fn with_region(self, region: impl Into<RegionFilter>) -> Self {
        Self {
            region: region.into(),
            ..self
        }
    }

    pub fn with_subsidy_only(self, subsidy_only: bool) -> Self {
        Self {
            subsidy_only,
            ..self
        }
    }

    /// `false` when the bounds are inverted and nothing can match.
    pub fn has_satisfiable_price_range(&self) -> bool {
        self.min_price <= self.max_price
    }

    /// Inclusive on both ends.
    pub fn admits_price(&self, price_per_unit: u32) -> bool {
        let price = i64::from(price_per_unit);
        price >= self.min_price && price <= self.max_price
    }

    pub fn admits_region(&self, region: Prefecture) -> bool {
        self.region.admits(region)
    }

    pub fn admits_subsidy(&self, subsidy_eligible: bool) -> bool {
        !self.subsidy_only || subsidy_eligible
    }

    /// The full selection predicate: price AND region AND subsidy.
    pub fn admits(&self, product: &Product) -> bool {
        self.admits_price(product.price_per_unit())
            && self.admits_region(product.region())
            && self.admits_subsidy(product.is_subsidy_eligible())
    }
}

/// Range a presentation layer allows the price inputs to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceBounds {
    min: i64,
    max: i64,
}

impl PriceBounds {
    /// Bounds of the search screen's price slider.
    pub const SLIDER: PriceBounds = PriceBounds {
        min: DEFAULT_MIN_PRICE,
        max: DEFAULT_MAX_PRICE,
    };

    /// Fit the price range of `criteria` into `self`.
    ///
    /// An overlapping range is intersected with the bounds. A range lying
    /// wholly outside them, or an inverted one, is returned unchanged and so
    /// never admits an edge price the caller excluded.
    pub fn clamp(&self, criteria: FilterCriteria) -> FilterCriteria {
        if !criteria.has_satisfiable_price_range()
            || criteria.max_price < self.min
            || criteria.min_price > self.max
        {
            return criteria;
        }

        FilterCriteria {
            min_price: criteria.min_price.max(self.min),
            max_price: criteria.max_price.min(self.max),
            ..criteria
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductRecord;

    fn product(price: u32, region: &str, subsidy: bool) -> Product {
        Product::try_from(ProductRecord {
            id: "p".to_string(),
            name: "test".to_string(),
            price_per_unit: price,
            package_volume: "5kg".to_string(),
            region: region.to_string(),
            is_subsidy_eligible: subsidy,
        })
        .unwrap()
    }

    #[test]
    fn default_matches_initial_screen_state() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.min_price, 200);
        assert_eq!(criteria.max_price, 1000);
        assert_eq!(criteria.region, RegionFilter::All);
        assert!(!criteria.subsidy_only);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let criteria = FilterCriteria::default().with_price_range(380, 450);
        assert!(criteria.admits_price(380));
        assert!(criteria.admits_price(450));
        assert!(!criteria.admits_price(379));
        assert!(!criteria.admits_price(451));
    }

    #[test]
    fn equal_bounds_admit_exactly_one_price() {
        let criteria = FilterCriteria::default().with_price_range(420, 420);
        assert!(criteria.has_satisfiable_price_range());
        assert!(criteria.admits_price(420));
        assert!(!criteria.admits_price(421));
    }

    #[test]
    fn inverted_bounds_admit_nothing() {
        let criteria = FilterCriteria::default().with_price_range(500, 400);
        assert!(!criteria.has_satisfiable_price_range());
        for price in [1, 400, 450, 500, u32::MAX] {
            assert!(!criteria.admits_price(price));
        }
    }

    #[test]
    fn unbounded_admits_extreme_prices() {
        let criteria = FilterCriteria::unbounded();
        assert!(criteria.admits_price(1));
        assert!(criteria.admits_price(u32::MAX));
    }

    #[test]
    fn subsidy_only_requires_eligibility() {
        let any = FilterCriteria::default();
        let only = any.with_subsidy_only(true);

        assert!(any.admits_subsidy(false));
        assert!(any.admits_subsidy(true));
        assert!(!only.admits_subsidy(false));
        assert!(only.admits_subsidy(true));
    }

    #[test]
    fn admits_requires_all_three_predicates() {
        let criteria = FilterCriteria::default()
            .with_price_range(300, 400)
            .with_region(Prefecture::Akita)
            .with_subsidy_only(true);

        assert!(criteria.admits(&product(380, "秋田県", true)));
        assert!(!criteria.admits(&product(450, "秋田県", true)));
        assert!(!criteria.admits(&product(380, "北海道", true)));
        assert!(!criteria.admits(&product(380, "秋田県", false)));
    }

    #[test]
    fn builders_do_not_touch_other_fields() {
        let criteria = FilterCriteria::default()
            .with_region(Prefecture::Niigata)
            .with_subsidy_only(true)
            .with_price_range(1, 2);

        assert_eq!(criteria.region, RegionFilter::Only(Prefecture::Niigata));
        assert!(criteria.subsidy_only);
        assert_eq!((criteria.min_price, criteria.max_price), (1, 2));
    }

    #[test]
    fn slider_clamps_each_bound() {
        let clamped = PriceBounds::SLIDER.clamp(FilterCriteria::default().with_price_range(-50, 5000));
        assert_eq!((clamped.min_price, clamped.max_price), (200, 1000));

        let inside = FilterCriteria::default().with_price_range(300, 400);
        assert_eq!(PriceBounds::SLIDER.clamp(inside), inside);
    }

    #[test]
    fn clamping_keeps_inverted_ranges_unsatisfiable() {
        let clamped = PriceBounds::SLIDER.clamp(FilterCriteria::default().with_price_range(900, 300));
        assert_eq!((clamped.min_price, clamped.max_price), (900, 300));
        assert!(!clamped.has_satisfiable_price_range());
    }

    #[test]
    fn slider_intersects_partially_overlapping_ranges() {
        let low = PriceBounds::SLIDER.clamp(FilterCriteria::default().with_price_range(100, 500));
        assert_eq!((low.min_price, low.max_price), (200, 500));

        let high = PriceBounds::SLIDER.clamp(FilterCriteria::default().with_price_range(800, 1500));
        assert_eq!((high.min_price, high.max_price), (800, 1000));
    }

    #[test]
    fn ranges_outside_slider_do_not_collapse_onto_an_edge() {
        let above = FilterCriteria::default().with_price_range(1500, 2000);
        let clamped = PriceBounds::SLIDER.clamp(above);
        assert_eq!(clamped, above);
        assert!(!clamped.admits_price(1000));

        let below = FilterCriteria::default().with_price_range(50, 100);
        let clamped = PriceBounds::SLIDER.clamp(below);
        assert_eq!(clamped, below);
        assert!(!clamped.admits_price(200));
    }

    #[test]
    fn criteria_json_is_camel_case() {
        let criteria = FilterCriteria::default().with_region(Prefecture::Miyagi);
        let json = serde_json::to_value(criteria).unwrap();
        assert_eq!(json["minPrice"], 200);
        assert_eq!(json["maxPrice"], 1000);
        assert_eq!(json["region"], "宮城県");
        assert_eq!(json["subsidyOnly"], false);
    }
}
