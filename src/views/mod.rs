//! Aggregation and ranking views over the normalized table.
//!
//! All views are pure and side-effect-free: they take the
//! normalized (and country-filtered) records and return ranked or
//! aggregated results for the presentation layer. One module per
//! dashboard screen.

pub mod cities;
pub mod countries;
pub mod cuisines;
pub mod overview;
