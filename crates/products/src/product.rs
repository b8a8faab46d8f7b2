use serde::{Deserialize, Serialize};

use ricefinder_core::{DomainError, DomainResult, Entity, ProductId};

use crate::region::Prefecture;

/// Wire/record form of a product, as found in catalog files.
///
/// Field names are camelCase (`pricePerUnit`, `isSubsidyEligible`, ...).
/// Use [`Product::try_from`] to validate a record into a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price_per_unit: u32,
    pub package_volume: String,
    pub region: String,
    pub is_subsidy_eligible: bool,
}

/// A catalog product. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price_per_unit: u32, // yen per kg
    package_volume: String,
    region: Prefecture,
    subsidy_eligible: bool,
}

impl Product {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price in yen per kg. Always positive.
    pub fn price_per_unit(&self) -> u32 {
        self.price_per_unit
    }

    /// Display-only package label (e.g. `5kg`).
    pub fn package_volume(&self) -> &str {
        &self.package_volume
    }

    pub fn region(&self) -> Prefecture {
        self.region
    }

    /// Eligible for hometown-tax (ふるさと納税) support.
    pub fn is_subsidy_eligible(&self) -> bool {
        self.subsidy_eligible
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> DomainResult<Self> {
        let id = ProductId::new(record.id)?;

        if record.name.trim().is_empty() {
            return Err(DomainError::validation(format!("product {id}: name cannot be empty")));
        }

        if record.price_per_unit == 0 {
            return Err(DomainError::validation(format!("product {id}: price must be positive")));
        }

        let region = record
            .region
            .parse::<Prefecture>()
            .map_err(|e| DomainError::validation(format!("product {id}: {e}")))?;

        Ok(Self {
            id,
            name: record.name,
            price_per_unit: record.price_per_unit,
            package_volume: record.package_volume,
            region,
            subsidy_eligible: record.is_subsidy_eligible,
        })
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name,
            price_per_unit: product.price_per_unit,
            package_volume: product.package_volume,
            region: product.region.label().to_string(),
            is_subsidy_eligible: product.subsidy_eligible,
        }
    }
}
