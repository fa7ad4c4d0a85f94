//! Cities screen: city-level rankings as text tables.
//!
//! Usage: cities [csv-path] [country,country,...]

use std::path::PathBuf;

use anyhow::Result;
use rustc_hash::FxHashSet;

use fome_zero_analytics::load_screen_table;
use fome_zero_analytics::views::cities::{
    top_cities_by_rating, top_groups_by_distinct, CityMetric, RatingBand, CITY_GROUP_KEYS,
    DEFAULT_TOP_N,
};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().unwrap_or_else(|| "dataset/zomato.csv".to_string()));
    let countries = args.next().map(parse_countries);

    let records = load_screen_table(&path, countries.as_ref())?;

    println!("{}", "=".repeat(60));
    println!("FOME ZERO — CITIES");
    println!("{}", "=".repeat(60));

    println!("\nTop {} cities by registered restaurants", DEFAULT_TOP_N);
    for group in top_groups_by_distinct(
        &records,
        CITY_GROUP_KEYS,
        CityMetric::Restaurants,
        DEFAULT_TOP_N,
    ) {
        println!("  {:<30} {:>6}", group.keys.join(" / "), group.count);
    }

    println!("\nCities with restaurants rated 4.0 or higher");
    for group in top_cities_by_rating(&records, 4.0, RatingBand::High, DEFAULT_TOP_N) {
        println!(
            "  {:<22} {:<18} {:>6}",
            group.city, group.country_name, group.count
        );
    }

    println!("\nCities with restaurants rated 2.5 or lower");
    for group in top_cities_by_rating(&records, 2.5, RatingBand::Low, DEFAULT_TOP_N) {
        println!(
            "  {:<22} {:<18} {:>6}",
            group.city, group.country_name, group.count
        );
    }

    println!("\nTop {} cities by distinct cuisine types", DEFAULT_TOP_N);
    for group in top_groups_by_distinct(
        &records,
        CITY_GROUP_KEYS,
        CityMetric::Cuisines,
        DEFAULT_TOP_N,
    ) {
        println!("  {:<30} {:>6}", group.keys.join(" / "), group.count);
    }

    Ok(())
}

fn parse_countries(arg: String) -> FxHashSet<String> {
    arg.split(',').map(|s| s.trim().to_string()).collect()
}
