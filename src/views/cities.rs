//! CITIES SCREEN: city-level rankings.
//!
//! Top-N city groups by distinct-restaurant count within a rating
//! band, and by distinct count of an arbitrary metric column. Rankings
//! here carry a single sort key; ties keep hash-map iteration order
//! and callers must not rely on tie order.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use smallvec::SmallVec;

use crate::record::RestaurantRecord;

pub const DEFAULT_TOP_N: usize = 10;

/// Group keys used by the cities screen charts.
pub const CITY_GROUP_KEYS: &[GroupKey] = &[GroupKey::City, GroupKey::CountryName];

/// Which side of the rating threshold to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    /// `aggregate_rating >= threshold`, counts sorted descending.
    High,
    /// `aggregate_rating <= threshold`, counts sorted ascending.
    Low,
}

/// A grouping column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    City,
    CountryName,
}

/// Column whose distinct values are counted per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityMetric {
    Restaurants,
    Cuisines,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityGroupCount {
    pub city: String,
    pub country_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupDistinctCount {
    /// One value per requested group key, in the same order.
    pub keys: Vec<String>,
    pub count: usize,
}

/// Top `n` `(city, country_name)` groups by distinct restaurants whose
/// rating falls in `band` relative to `threshold`.
pub fn top_cities_by_rating(
    records: &[RestaurantRecord],
    threshold: f64,
    band: RatingBand,
    n: usize,
) -> Vec<CityGroupCount> {
    let mut groups: FxHashMap<(&str, &str), FxHashSet<u64>> = FxHashMap::default();
    for r in records {
        let keep = match band {
            RatingBand::High => r.aggregate_rating >= threshold,
            RatingBand::Low => r.aggregate_rating <= threshold,
        };
        if !keep {
            continue;
        }
        groups
            .entry((r.city.as_str(), r.country_name.as_str()))
            .or_default()
            .insert(r.restaurant_id);
    }

    let mut out: Vec<CityGroupCount> = groups
        .into_iter()
        .map(|((city, country_name), ids)| CityGroupCount {
            city: city.to_string(),
            country_name: country_name.to_string(),
            count: ids.len(),
        })
        .collect();
    match band {
        RatingBand::High => out.sort_by(|a, b| b.count.cmp(&a.count)),
        RatingBand::Low => out.sort_by(|a, b| a.count.cmp(&b.count)),
    }
    out.truncate(n);
    out
}

/// Top `n` groups by distinct count of `metric`, grouped by
/// `group_keys` (the screen uses [`CITY_GROUP_KEYS`]), sorted
/// descending.
pub fn top_groups_by_distinct(
    records: &[RestaurantRecord],
    group_keys: &[GroupKey],
    metric: CityMetric,
    n: usize,
) -> Vec<GroupDistinctCount> {
    let mut groups: FxHashMap<SmallVec<[&str; 2]>, FxHashSet<String>> = FxHashMap::default();
    for r in records {
        let key: SmallVec<[&str; 2]> = group_keys
            .iter()
            .map(|k| match k {
                GroupKey::City => r.city.as_str(),
                GroupKey::CountryName => r.country_name.as_str(),
            })
            .collect();
        let value = match metric {
            CityMetric::Restaurants => r.restaurant_id.to_string(),
            CityMetric::Cuisines => r.cuisines.clone(),
        };
        groups.entry(key).or_default().insert(value);
    }

    let mut out: Vec<GroupDistinctCount> = groups
        .into_iter()
        .map(|(key, values)| GroupDistinctCount {
            keys: key.iter().map(|s| s.to_string()).collect(),
            count: values.len(),
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out.truncate(n);
    out
}
