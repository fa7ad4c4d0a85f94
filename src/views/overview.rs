//! OVERVIEW SCREEN: platform-wide summary metrics and map markers.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::record::RestaurantRecord;

/// The five headline metrics of the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewSummary {
    /// Distinct restaurant ids.
    pub restaurants: usize,
    /// Distinct country names.
    pub countries: usize,
    /// Distinct city names.
    pub cities: usize,
    /// Sum of all votes across rows.
    pub votes: u64,
    /// Distinct cuisine types.
    pub cuisines: usize,
}

/// One map marker: position, icon color and popup text. Rendering is
/// the map layer's job; this is only the data it is keyed by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub color_name: String,
    pub popup: String,
}

pub fn summary(records: &[RestaurantRecord]) -> OverviewSummary {
    let mut restaurants = FxHashSet::default();
    let mut countries = FxHashSet::default();
    let mut cities = FxHashSet::default();
    let mut cuisines = FxHashSet::default();
    let mut votes: u64 = 0;

    for r in records {
        restaurants.insert(r.restaurant_id);
        countries.insert(r.country_name.as_str());
        cities.insert(r.city.as_str());
        cuisines.insert(r.cuisines.as_str());
        votes += r.votes;
    }

    OverviewSummary {
        restaurants: restaurants.len(),
        countries: countries.len(),
        cities: cities.len(),
        votes,
        cuisines: cuisines.len(),
    }
}

/// One marker per record, popup lines joined with `<br>`.
pub fn markers(records: &[RestaurantRecord]) -> Vec<Marker> {
    records
        .iter()
        .map(|r| Marker {
            latitude: r.latitude,
            longitude: r.longitude,
            color_name: r.color_name.clone(),
            popup: format!(
                "name:{}<br>city:{}<br>rating:{}<br>cuisine:{}<br>cost for two:{}<br>votes:{}",
                r.restaurant_name,
                r.city,
                r.aggregate_rating,
                r.cuisines,
                r.average_cost_for_two,
                r.votes
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::test_support::record;

    #[test]
    fn test_summary_counts_distinct() {
        let records = vec![
            record(1, "A", "SP", "Brazil", "Brazilian", 4.5, 10),
            record(1, "A", "SP", "Brazil", "Brazilian", 4.5, 10),
            record(2, "B", "Rio", "Brazil", "Pizza", 4.0, 20),
            record(3, "C", "Delhi", "India", "North Indian", 4.2, 5),
        ];

        let s = summary(&records);
        assert_eq!(s.restaurants, 3);
        assert_eq!(s.countries, 2);
        assert_eq!(s.cities, 3);
        assert_eq!(s.cuisines, 3);
        assert_eq!(s.votes, 45);
    }

    #[test]
    fn test_empty_summary() {
        let s = summary(&[]);
        assert_eq!(s.restaurants, 0);
        assert_eq!(s.votes, 0);
    }

    #[test]
    fn test_marker_carries_color_and_popup() {
        let mut r = record(1, "Casa", "São Paulo", "Brazil", "Brazilian", 4.8, 410);
        r.latitude = -23.5;
        r.longitude = -46.6;
        r.color_name = "darkgreen".to_string();

        let out = markers(&[r]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].latitude, -23.5);
        assert_eq!(out[0].color_name, "darkgreen");
        assert!(out[0].popup.starts_with("name:Casa<br>city:São Paulo<br>"));
        assert!(out[0].popup.ends_with("votes:410"));
    }
}
