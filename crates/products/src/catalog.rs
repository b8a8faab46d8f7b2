//! Catalog abstraction: the immutable product list and where it comes from.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use ricefinder_core::{DomainError, DomainResult, Entity, ProductId};

use crate::criteria::FilterCriteria;
use crate::filter::filter;
use crate::product::{Product, ProductRecord};

/// Immutable, ordered product list. Cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(DomainError::validation(format!(
                    "duplicate product id: {}",
                    product.id()
                )));
            }
        }
        Ok(Self {
            products: products.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            products: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Run the filter engine over this catalog.
    pub fn search(&self, criteria: &FilterCriteria) -> Vec<Product> {
        filter(&self.products, criteria)
    }
}

impl AsRef<[Product]> for Catalog {
    fn as_ref(&self) -> &[Product] {
        &self.products
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Domain(#[from] DomainError),
}

/// Source of the product catalog, consulted once at startup.
pub trait CatalogProvider: Send + Sync {
    /// Short human-readable description of the source (for logs).
    fn describe(&self) -> String;

    fn load(&self) -> Result<Catalog, CatalogError>;
}

impl<P> CatalogProvider for Arc<P>
where
    P: CatalogProvider + ?Sized,
{
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        (**self).load()
    }
}

/// The built-in catalog shipped with the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

// (id, name, yen/kg, package, region, subsidy eligible)
const BUILTIN: [(&str, &str, u32, &str, &str, bool); 5] = [
    ("1", "コシヒカリ", 450, "5kg", "新潟県", false),
    ("2", "あきたこまち", 380, "5kg", "秋田県", true),
    ("3", "ひとめぼれ", 420, "10kg", "宮城県", false),
    ("4", "ななつぼし", 390, "5kg", "北海道", true),
    ("5", "つや姫", 520, "5kg", "山形県", false),
];

impl CatalogProvider for StaticCatalog {
    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        let products = BUILTIN
            .iter()
            .map(|&(id, name, price, volume, region, subsidy)| {
                Product::try_from(ProductRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                    price_per_unit: price,
                    package_volume: volume.to_string(),
                    region: region.to_string(),
                    is_subsidy_eligible: subsidy,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Catalog::new(products)?)
    }
}

/// Catalog read from a JSON array of [`ProductRecord`]s.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse catalog JSON held in memory.
    pub fn parse(raw: &str) -> Result<Catalog, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(raw)?;
        let products = records
            .into_iter()
            .map(Product::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Catalog::new(products)?)
    }
}

impl CatalogProvider for JsonCatalog {
    fn describe(&self) -> String {
        format!("json catalog at {}", self.path.display())
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let catalog = Self::parse(&raw)?;
        tracing::debug!(path = %self.path.display(), products = catalog.len(), "parsed json catalog");
        Ok(catalog)
    }
}
