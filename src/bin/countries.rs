//! Countries screen: per-country aggregates as text tables.
//!
//! Usage: countries [csv-path] [country,country,...]

use std::path::PathBuf;

use anyhow::Result;
use rustc_hash::FxHashSet;

use fome_zero_analytics::load_screen_table;
use fome_zero_analytics::views::countries::{
    count_distinct_by_country, mean_by_country, DistinctMetric, MeanMetric,
};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().unwrap_or_else(|| "dataset/zomato.csv".to_string()));
    let countries = args.next().map(parse_countries);

    let records = load_screen_table(&path, countries.as_ref())?;

    println!("{}", "=".repeat(60));
    println!("FOME ZERO — COUNTRIES");
    println!("{}", "=".repeat(60));

    println!("\nRegistered restaurants per country");
    for row in count_distinct_by_country(&records, DistinctMetric::Restaurants) {
        println!("  {:<28} {:>6}", row.country_name, row.count);
    }

    println!("\nRegistered cities per country");
    for row in count_distinct_by_country(&records, DistinctMetric::Cities) {
        println!("  {:<28} {:>6}", row.country_name, row.count);
    }

    println!("\nMean ratings submitted per country");
    for row in mean_by_country(&records, MeanMetric::Votes) {
        println!("  {:<28} {:>10.1}", row.country_name, row.mean);
    }

    println!("\nMean cost of a dish for two per country");
    for row in mean_by_country(&records, MeanMetric::CostForTwo) {
        println!("  {:<28} {:>10.1}", row.country_name, row.mean);
    }

    Ok(())
}

fn parse_countries(arg: String) -> FxHashSet<String> {
    arg.split(',').map(|s| s.trim().to_string()).collect()
}
