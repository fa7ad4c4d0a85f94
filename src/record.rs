//! The normalized restaurant row.

use serde::Serialize;

/// One row of the normalized table.
///
/// Constructed only by the normalizer; immutable afterwards. `cuisines`
/// always holds a single token, and the three enrichment fields
/// (`country_name`, `color_name`, `price_type`) are always populated —
/// an unmappable code aborts normalization instead of producing a
/// partial record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantRecord {
    pub restaurant_id: u64,
    pub restaurant_name: String,
    pub city: String,
    pub country_code: u32,
    pub country_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub cuisines: String,
    pub average_cost_for_two: f64,
    pub currency: String,
    pub price_range: u32,
    pub price_type: &'static str,
    pub aggregate_rating: f64,
    pub votes: u64,
    pub rating_color: String,
    pub color_name: String,
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::RestaurantRecord;

    /// Minimal record for view tests; override fields as needed.
    pub(crate) fn record(
        id: u64,
        name: &str,
        city: &str,
        country: &str,
        cuisine: &str,
        rating: f64,
        votes: u64,
    ) -> RestaurantRecord {
        RestaurantRecord {
            restaurant_id: id,
            restaurant_name: name.to_string(),
            city: city.to_string(),
            country_code: 0,
            country_name: country.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            cuisines: cuisine.to_string(),
            average_cost_for_two: 100.0,
            currency: "Dollar($)".to_string(),
            price_range: 2,
            price_type: "normal",
            aggregate_rating: rating,
            votes,
            rating_color: "5BA829".to_string(),
            color_name: "green".to_string(),
        }
    }
}
