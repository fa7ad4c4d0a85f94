//! Fome Zero restaurant analytics.
//!
//! Descriptive analytics over a static Zomato-style restaurant export:
//! one normalization pipeline shared by four presentation screens, and
//! a family of pure group-by/ranking views.
//!
//! - `data`: raw CSV loading with Polars (all cells kept as strings)
//! - `tables`: fixed code tables (country, rating color, price tier)
//! - `normalize`: rename/clean/enrich pipeline producing typed records
//! - `views`: aggregation and ranking views, one module per screen
//!
//! Data flows one way: raw table → normalizer → country filter →
//! views. Every screen invocation reloads and re-normalizes the full
//! dataset; nothing is cached or shared.

pub mod data;
pub mod error;
pub mod normalize;
pub mod record;
pub mod tables;
pub mod views;

use std::path::Path;

use rustc_hash::FxHashSet;

// Re-export commonly used types
pub use data::{load_raw_table, RawTable};
pub use error::Error;
pub use normalize::{canonical_header, filter_countries, Normalizer};
pub use record::RestaurantRecord;
pub use tables::{price_type, CodeTables};

/// Load, normalize and (optionally) country-filter an export in one
/// call. Each screen binary runs this full pipeline independently.
pub fn load_screen_table(
    path: &Path,
    countries: Option<&FxHashSet<String>>,
) -> anyhow::Result<Vec<RestaurantRecord>> {
    let raw = data::load_raw_table(path)?;
    let records = Normalizer::with_builtin_tables().normalize(raw)?;
    Ok(match countries {
        Some(selection) => filter_countries(records, selection),
        None => records,
    })
}
