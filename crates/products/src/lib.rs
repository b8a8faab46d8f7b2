//! Products domain module: the rice catalog and its filter engine.
//!
//! Everything here is deterministic domain logic (no HTTP, no storage). The
//! only IO is [`JsonCatalog`] reading its file when asked to load.

pub mod catalog;
pub mod criteria;
pub mod filter;
pub mod product;
pub mod region;
pub mod search;

pub use catalog::{Catalog, CatalogError, CatalogProvider, JsonCatalog, StaticCatalog};
pub use criteria::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, FilterCriteria, PriceBounds};
pub use filter::{filter, filter_refs};
pub use product::{Product, ProductRecord};
pub use region::{ALL_REGIONS_LABEL, Prefecture, RegionFilter};
pub use search::{SearchSession, SearchState};
