//! COUNTRIES SCREEN: per-country aggregates.
//!
//! Means and distinct counts grouped by `country_name`, always sorted
//! descending and never truncated (there are at most 15 countries).

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::record::RestaurantRecord;

/// Column averaged per country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeanMetric {
    Votes,
    CostForTwo,
}

/// Column whose distinct values are counted per country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistinctMetric {
    Restaurants,
    Cities,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryMean {
    pub country_name: String,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryDistinctCount {
    pub country_name: String,
    pub count: usize,
}

/// Arithmetic mean of `metric` per country, sorted descending by mean.
pub fn mean_by_country(records: &[RestaurantRecord], metric: MeanMetric) -> Vec<CountryMean> {
    let mut sums: FxHashMap<&str, (f64, usize)> = FxHashMap::default();
    for r in records {
        let value = match metric {
            MeanMetric::Votes => r.votes as f64,
            MeanMetric::CostForTwo => r.average_cost_for_two,
        };
        let entry = sums.entry(r.country_name.as_str()).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    let mut out: Vec<CountryMean> = sums
        .into_iter()
        .map(|(country, (sum, n))| CountryMean {
            country_name: country.to_string(),
            mean: sum / n as f64,
        })
        .collect();
    out.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    out
}

/// Distinct count of `metric` per country, sorted descending.
pub fn count_distinct_by_country(
    records: &[RestaurantRecord],
    metric: DistinctMetric,
) -> Vec<CountryDistinctCount> {
    let mut sets: FxHashMap<&str, FxHashSet<String>> = FxHashMap::default();
    for r in records {
        let value = match metric {
            DistinctMetric::Restaurants => r.restaurant_id.to_string(),
            DistinctMetric::Cities => r.city.clone(),
        };
        sets.entry(r.country_name.as_str()).or_default().insert(value);
    }

    let mut out: Vec<CountryDistinctCount> = sets
        .into_iter()
        .map(|(country, values)| CountryDistinctCount {
            country_name: country.to_string(),
            count: values.len(),
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}
