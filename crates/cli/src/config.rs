//! Command-line configuration: flags, env fallbacks and input sanitization.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};

use ricefinder_products::{
    CatalogProvider, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, FilterCriteria, JsonCatalog,
    PriceBounds, RegionFilter, StaticCatalog,
};

/// Environment variable naming a JSON catalog file.
pub const CATALOG_ENV: &str = "RICEFINDER_CATALOG";

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Search the rice catalog by price, region and hometown-tax eligibility.
#[derive(Debug, Clone, Parser)]
#[command(name = "ricefinder", version)]
pub struct Args {
    /// Lowest price in yen per kg (inclusive).
    #[arg(long, default_value_t = DEFAULT_MIN_PRICE, allow_negative_numbers = true)]
    pub min_price: i64,

    /// Highest price in yen per kg (inclusive).
    #[arg(long, default_value_t = DEFAULT_MAX_PRICE, allow_negative_numbers = true)]
    pub max_price: i64,

    /// Prefecture (label or romanized slug), or 全国 / all.
    #[arg(long, default_value_t = RegionFilter::All)]
    pub region: RegionFilter,

    /// Only hometown-tax (ふるさと納税) eligible products.
    #[arg(long)]
    pub subsidy_only: bool,

    /// JSON catalog file; the built-in catalog is used when absent.
    #[arg(long, env = CATALOG_ENV)]
    pub catalog: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pass price bounds through as given instead of clamping to 200..=1000.
    #[arg(long)]
    pub no_clamp: bool,

    /// Print the selectable regions and exit.
    #[arg(long)]
    pub list_regions: bool,
}

impl Args {
    /// Criteria handed to the engine, sanitized unless `--no-clamp`.
    pub fn criteria(&self) -> FilterCriteria {
        let raw = FilterCriteria {
            min_price: self.min_price,
            max_price: self.max_price,
            region: self.region,
            subsidy_only: self.subsidy_only,
        };

        if self.no_clamp {
            return raw;
        }

        let clamped = PriceBounds::SLIDER.clamp(raw);
        if clamped != raw {
            tracing::debug!(
                min_price = clamped.min_price,
                max_price = clamped.max_price,
                "clamped price range to slider bounds"
            );
        }
        clamped
    }

    pub fn provider(&self) -> Arc<dyn CatalogProvider> {
        match &self.catalog {
            Some(path) => Arc::new(JsonCatalog::new(path)),
            None => Arc::new(StaticCatalog),
        }
    }
}
