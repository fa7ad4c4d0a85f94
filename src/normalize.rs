//! Dataset normalization pipeline.
//!
//! The fixed cleaning sequence applied once to the raw export before
//! any view runs: header canonicalization, constant-column removal,
//! duplicate removal, missing-data removal, cuisine collapse, then
//! typed extraction with enrichment lookups. Each step consumes and
//! returns a table; no partial mutation is observable and the order is
//! load-bearing (later steps address columns by their canonical names).
//!
//! Row-level problems (missing cells, unparseable numerics) drop the
//! row silently. An unmapped code in a lookup column aborts the whole
//! invocation with [`Error::DataIntegrity`].

use rustc_hash::{FxHashMap, FxHashSet};

use crate::data::RawTable;
use crate::error::Error;
use crate::record::RestaurantRecord;
use crate::tables::{price_type, CodeTables};

/// The export guarantees this column is single-valued; it is dropped
/// by name, not by a dynamic single-value detector.
const CONSTANT_COLUMN: &str = "switch_to_order_menu";

/// Canonical columns the typed extraction reads (post-rename names).
pub const REQUIRED_COLUMNS: &[&str] = &[
    "restaurant_id",
    "restaurant_name",
    "country_code",
    "city",
    "longitude",
    "latitude",
    "cuisines",
    "average_cost_for_two",
    "currency",
    "price_range",
    "aggregate_rating",
    "rating_color",
    "votes",
];

/// Canonicalize one raw header to lower snake_case.
///
/// Splits on whitespace and underscores, title-cases each word, joins,
/// then breaks the CamelCase result back apart on uppercase letters.
/// "Restaurant Name" → `restaurant_name`, "Average Cost for two" →
/// `average_cost_for_two`. Pure, position-independent, and idempotent:
/// an already-canonical header maps to itself.
pub fn canonical_header(raw: &str) -> String {
    let mut camel = String::with_capacity(raw.len());
    for word in raw.split(|c: char| c.is_whitespace() || c == '_') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            for c in chars {
                camel.extend(c.to_lowercase());
            }
        }
    }

    let mut snake = String::with_capacity(camel.len() + 4);
    for c in camel.chars() {
        if c.is_uppercase() {
            if !snake.is_empty() {
                snake.push('_');
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Applies the cleaning sequence and enrichment lookups.
///
/// Holds the injected [`CodeTables`]; tests substitute alternates via
/// [`Normalizer::new`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    tables: CodeTables,
}

impl Normalizer {
    pub fn new(tables: CodeTables) -> Self {
        Self { tables }
    }

    /// Normalizer carrying the fixed 7-color / 15-country tables.
    pub fn with_builtin_tables() -> Self {
        Self::new(CodeTables::builtin())
    }

    /// Run the full pipeline over one raw table.
    pub fn normalize(&self, raw: RawTable) -> Result<Vec<RestaurantRecord>, Error> {
        let table = rename_headers(raw);
        let table = drop_constant_column(table)?;
        let table = drop_duplicate_rows(table);
        let table = drop_incomplete_rows(table);
        let table = collapse_cuisines(table)?;
        self.extract_records(&table)
    }

    /// Step 6: typed extraction plus the three enrichment lookups.
    ///
    /// Rows that fail numeric coercion are dropped (same policy as
    /// missing data); unmapped codes abort with `DataIntegrity`.
    fn extract_records(&self, table: &RawTable) -> Result<Vec<RestaurantRecord>, Error> {
        let ix = ColumnIndexes::resolve(table)?;
        let mut records = Vec::with_capacity(table.height());

        for row in &table.rows {
            let Some(restaurant_id) = parse_cell::<u64>(row, ix.restaurant_id) else {
                continue;
            };
            let Some(country_code) = parse_cell::<u32>(row, ix.country_code) else {
                continue;
            };
            let Some(latitude) = parse_cell::<f64>(row, ix.latitude) else {
                continue;
            };
            let Some(longitude) = parse_cell::<f64>(row, ix.longitude) else {
                continue;
            };
            let Some(average_cost_for_two) = parse_cell::<f64>(row, ix.average_cost_for_two)
            else {
                continue;
            };
            let Some(price_range) = parse_cell::<u32>(row, ix.price_range) else {
                continue;
            };
            let Some(aggregate_rating) = parse_cell::<f64>(row, ix.aggregate_rating) else {
                continue;
            };
            let Some(votes) = parse_cell::<u64>(row, ix.votes) else {
                continue;
            };

            let rating_color = cell(row, ix.rating_color).unwrap_or_default();
            let color_name = self
                .tables
                .color_name(rating_color)
                .ok_or_else(|| Error::DataIntegrity {
                    column: "rating_color",
                    value: rating_color.to_string(),
                })?
                .to_string();
            let country_name = self
                .tables
                .country_name(country_code)
                .ok_or_else(|| Error::DataIntegrity {
                    column: "country_code",
                    value: country_code.to_string(),
                })?
                .to_string();

            records.push(RestaurantRecord {
                restaurant_id,
                restaurant_name: cell(row, ix.restaurant_name).unwrap_or_default().to_string(),
                city: cell(row, ix.city).unwrap_or_default().to_string(),
                country_code,
                country_name,
                latitude,
                longitude,
                cuisines: cell(row, ix.cuisines).unwrap_or_default().to_string(),
                average_cost_for_two,
                currency: cell(row, ix.currency).unwrap_or_default().to_string(),
                price_range,
                price_type: price_type(price_range),
                aggregate_rating,
                votes,
                rating_color: rating_color.to_string(),
                color_name,
            });
        }

        Ok(records)
    }
}

/// Step 1: canonicalize every header. Cells are untouched.
fn rename_headers(mut table: RawTable) -> RawTable {
    table.columns = table
        .columns
        .iter()
        .map(|name| canonical_header(name))
        .collect();
    table
}

/// Step 2: drop the known single-valued column.
fn drop_constant_column(mut table: RawTable) -> Result<RawTable, Error> {
    let idx = table
        .column_index(CONSTANT_COLUMN)
        .ok_or_else(|| Error::MissingColumn {
            name: CONSTANT_COLUMN.to_string(),
        })?;
    table.columns.remove(idx);
    for row in &mut table.rows {
        row.remove(idx);
    }
    Ok(table)
}

/// Step 3: remove rows identical across all remaining columns,
/// keeping the first occurrence.
fn drop_duplicate_rows(mut table: RawTable) -> RawTable {
    let mut seen = FxHashSet::default();
    table.rows.retain(|row| seen.insert(row_key(row)));
    table
}

/// Step 4: remove any row with a missing cell. The empty string counts
/// as missing; there is no partial-column imputation.
fn drop_incomplete_rows(mut table: RawTable) -> RawTable {
    table
        .rows
        .retain(|row| row.iter().all(|c| c.as_deref().is_some_and(|s| !s.is_empty())));
    table
}

/// Step 5: keep only the first comma-separated cuisine token.
///
/// No whitespace trimming beyond what the source provides — literal
/// policy, so "Italian , Pizza" collapses to "Italian " as-is.
fn collapse_cuisines(mut table: RawTable) -> Result<RawTable, Error> {
    let idx = table
        .column_index("cuisines")
        .ok_or_else(|| Error::MissingColumn {
            name: "cuisines".to_string(),
        })?;
    for row in &mut table.rows {
        if let Some(value) = &row[idx] {
            let first = value.split(',').next().unwrap_or_default().to_string();
            row[idx] = Some(first);
        }
    }
    Ok(table)
}

/// Retain only rows whose `country_name` is in the supplied set.
/// Applied after normalization, before any view call.
pub fn filter_countries(
    records: Vec<RestaurantRecord>,
    countries: &FxHashSet<String>,
) -> Vec<RestaurantRecord> {
    records
        .into_iter()
        .filter(|r| countries.contains(&r.country_name))
        .collect()
}

struct ColumnIndexes {
    restaurant_id: usize,
    restaurant_name: usize,
    country_code: usize,
    city: usize,
    longitude: usize,
    latitude: usize,
    cuisines: usize,
    average_cost_for_two: usize,
    currency: usize,
    price_range: usize,
    aggregate_rating: usize,
    rating_color: usize,
    votes: usize,
}

impl ColumnIndexes {
    fn resolve(table: &RawTable) -> Result<Self, Error> {
        let mut by_name = FxHashMap::default();
        for name in REQUIRED_COLUMNS {
            let idx = table
                .column_index(name)
                .ok_or_else(|| Error::MissingColumn {
                    name: name.to_string(),
                })?;
            by_name.insert(*name, idx);
        }
        Ok(Self {
            restaurant_id: by_name["restaurant_id"],
            restaurant_name: by_name["restaurant_name"],
            country_code: by_name["country_code"],
            city: by_name["city"],
            longitude: by_name["longitude"],
            latitude: by_name["latitude"],
            cuisines: by_name["cuisines"],
            average_cost_for_two: by_name["average_cost_for_two"],
            currency: by_name["currency"],
            price_range: by_name["price_range"],
            aggregate_rating: by_name["aggregate_rating"],
            rating_color: by_name["rating_color"],
            votes: by_name["votes"],
        })
    }
}

fn cell(row: &[Option<String>], idx: usize) -> Option<&str> {
    row.get(idx).and_then(|c| c.as_deref())
}

fn parse_cell<T: std::str::FromStr>(row: &[Option<String>], idx: usize) -> Option<T> {
    cell(row, idx).and_then(|s| s.parse().ok())
}

fn row_key(row: &[Option<String>]) -> String {
    let mut key = String::new();
    for c in row {
        match c {
            Some(s) => key.push_str(s),
            None => key.push('\u{0}'),
        }
        key.push('\u{1f}');
    }
    key
}
