//! CUISINES SCREEN: cuisine rankings and best-restaurant lookups.
//!
//! Holds the only fully deterministic ranking in the system
//! ([`top_restaurants`], three sort keys) and the single-entity lookup
//! that reports explicit absence instead of panicking on an empty
//! selection.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::Error;
use crate::record::RestaurantRecord;

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_TOP_RESTAURANTS: usize = 20;

/// The six cuisines the dashboard pins as metric widgets.
pub const FEATURED_CUISINES: &[&str] = &[
    "Italian",
    "American",
    "Arabian",
    "Japanese",
    "Home-made",
    "Brazilian",
];

/// Ranking direction for the mean-rating chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// Highest means first.
    Best,
    /// Lowest means first.
    Worst,
}

/// Winner of a best-restaurant-for-cuisine lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuisinePick {
    pub restaurant_name: String,
    pub aggregate_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuisineMeanRating {
    pub cuisines: String,
    /// Rounded to one decimal place for display; ranking uses the
    /// unrounded mean.
    pub mean_rating: f64,
}

/// The top-rated restaurant serving `cuisine`, tie-broken by lowest
/// `restaurant_id`. An empty selection is [`Error::NotFound`].
pub fn best_restaurant_for_cuisine(
    records: &[RestaurantRecord],
    cuisine: &str,
) -> Result<CuisinePick, Error> {
    records
        .iter()
        .filter(|r| r.cuisines == cuisine)
        .min_by(|a, b| {
            b.aggregate_rating
                .total_cmp(&a.aggregate_rating)
                .then_with(|| a.restaurant_id.cmp(&b.restaurant_id))
        })
        .map(|best| CuisinePick {
            restaurant_name: best.restaurant_name.clone(),
            aggregate_rating: best.aggregate_rating,
        })
        .ok_or_else(|| Error::NotFound {
            cuisine: cuisine.to_string(),
        })
}

/// Mean `aggregate_rating` per cuisine, top `n`, Best descending or
/// Worst ascending. Sorting happens on the unrounded mean; the
/// reported value is rounded to one decimal.
pub fn mean_rating_by_cuisine(
    records: &[RestaurantRecord],
    n: usize,
    order: RankOrder,
) -> Vec<CuisineMeanRating> {
    let mut sums: FxHashMap<&str, (f64, usize)> = FxHashMap::default();
    for r in records {
        let entry = sums.entry(r.cuisines.as_str()).or_insert((0.0, 0));
        entry.0 += r.aggregate_rating;
        entry.1 += 1;
    }

    let mut means: Vec<(&str, f64)> = sums
        .into_iter()
        .map(|(cuisine, (sum, count))| (cuisine, sum / count as f64))
        .collect();
    match order {
        RankOrder::Best => means.sort_by(|a, b| b.1.total_cmp(&a.1)),
        RankOrder::Worst => means.sort_by(|a, b| a.1.total_cmp(&b.1)),
    }
    means.truncate(n);

    means
        .into_iter()
        .map(|(cuisine, mean)| CuisineMeanRating {
            cuisines: cuisine.to_string(),
            mean_rating: round1(mean),
        })
        .collect()
}

/// Top `n` full records by `(rating desc, votes desc, restaurant_id
/// asc)` — a deterministic three-key tie-break.
pub fn top_restaurants(records: &[RestaurantRecord], n: usize) -> Vec<RestaurantRecord> {
    let mut rows = records.to_vec();
    rows.sort_by(|a, b| {
        b.aggregate_rating
            .total_cmp(&a.aggregate_rating)
            .then_with(|| b.votes.cmp(&a.votes))
            .then_with(|| a.restaurant_id.cmp(&b.restaurant_id))
    });
    rows.truncate(n);
    rows
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::test_support::record;
    use approx::assert_relative_eq;

    #[test]
    fn test_best_restaurant_picks_highest_rating() {
        let records = vec![
            record(1, "Trattoria", "SP", "Brazil", "Italian", 4.5, 100),
            record(2, "Osteria", "Rio", "Brazil", "Italian", 4.9, 50),
            record(3, "Diner", "SP", "Brazil", "American", 5.0, 10),
        ];

        let pick = best_restaurant_for_cuisine(&records, "Italian").unwrap();
        assert_eq!(pick.restaurant_name, "Osteria");
        assert_relative_eq!(pick.aggregate_rating, 4.9);
    }

    #[test]
    fn test_best_restaurant_tie_breaks_on_lowest_id() {
        let records = vec![
            record(9, "Later", "SP", "Brazil", "Italian", 4.9, 100),
            record(2, "Earlier", "Rio", "Brazil", "Italian", 4.9, 50),
        ];

        let pick = best_restaurant_for_cuisine(&records, "Italian").unwrap();
        assert_eq!(pick.restaurant_name, "Earlier");
    }

    #[test]
    fn test_best_restaurant_not_found() {
        let records = vec![record(1, "A", "SP", "Brazil", "Italian", 4.5, 100)];
        let err = best_restaurant_for_cuisine(&records, "Mexican").unwrap_err();
        assert_eq!(
            err,
            Error::NotFound {
                cuisine: "Mexican".to_string()
            }
        );
    }

    #[test]
    fn test_mean_rating_rounded_one_decimal() {
        let records = vec![
            record(1, "A", "SP", "Brazil", "Italian", 4.26, 10),
            record(2, "B", "SP", "Brazil", "Italian", 4.30, 10),
            record(3, "C", "SP", "Brazil", "American", 3.0, 10),
        ];

        let out = mean_rating_by_cuisine(&records, 10, RankOrder::Best);
        assert_eq!(out[0].cuisines, "Italian");
        assert_relative_eq!(out[0].mean_rating, 4.3); // mean 4.28 → 4.3
        assert_eq!(out[1].cuisines, "American");
    }

    #[test]
    fn test_mean_rating_worst_ascending() {
        let records = vec![
            record(1, "A", "SP", "Brazil", "Italian", 4.5, 10),
            record(2, "B", "SP", "Brazil", "American", 2.0, 10),
        ];

        let out = mean_rating_by_cuisine(&records, 10, RankOrder::Worst);
        assert_eq!(out[0].cuisines, "American");
    }

    #[test]
    fn test_top_restaurants_three_key_order() {
        let records = vec![
            record(5, "E", "SP", "Brazil", "Italian", 4.5, 100),
            record(3, "C", "SP", "Brazil", "Italian", 4.9, 50),
            record(4, "D", "SP", "Brazil", "Italian", 4.9, 80),
            record(2, "B", "SP", "Brazil", "Italian", 4.9, 80),
            record(1, "A", "SP", "Brazil", "Italian", 3.0, 999),
        ];

        let out = top_restaurants(&records, DEFAULT_TOP_RESTAURANTS);
        for pair in out.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let ordered = a.aggregate_rating > b.aggregate_rating
                || (a.aggregate_rating == b.aggregate_rating && a.votes > b.votes)
                || (a.aggregate_rating == b.aggregate_rating
                    && a.votes == b.votes
                    && a.restaurant_id < b.restaurant_id);
            assert!(ordered, "rows {} and {} out of order", a.restaurant_id, b.restaurant_id);
        }
        assert_eq!(out[0].restaurant_id, 2); // 4.9 rating, 80 votes, lowest id
        assert_eq!(out.last().unwrap().restaurant_id, 1);
    }

    #[test]
    fn test_top_restaurants_truncates() {
        let records: Vec<_> = (0..50)
            .map(|i| record(i, "R", "SP", "Brazil", "Italian", 4.0, 10))
            .collect();
        assert_eq!(top_restaurants(&records, 20).len(), 20);
    }

    #[test]
    fn test_featured_cuisines_fixed() {
        assert_eq!(FEATURED_CUISINES.len(), 6);
        assert!(FEATURED_CUISINES.contains(&"Home-made"));
    }
}
