//! Overview screen: headline metrics plus optional map-marker export.
//!
//! Usage: overview [csv-path] [country,country,...] [markers-out.json]

use std::path::PathBuf;

use anyhow::Result;
use rustc_hash::FxHashSet;

use fome_zero_analytics::load_screen_table;
use fome_zero_analytics::views::overview;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().unwrap_or_else(|| "dataset/zomato.csv".to_string()));
    let countries = args.next().map(parse_countries);
    let markers_out = args.next().map(PathBuf::from);

    let records = load_screen_table(&path, countries.as_ref())?;
    let summary = overview::summary(&records);

    println!("{}", "=".repeat(60));
    println!("FOME ZERO — OVERVIEW");
    println!("{}", "=".repeat(60));
    println!("  Registered restaurants  {}", summary.restaurants);
    println!("  Countries               {}", summary.countries);
    println!("  Cities                  {}", summary.cities);
    println!("  Ratings submitted       {}", summary.votes);
    println!("  Cuisine types           {}", summary.cuisines);

    if let Some(out) = markers_out {
        let markers = overview::markers(&records);
        std::fs::write(&out, serde_json::to_string_pretty(&markers)?)?;
        println!();
        println!("Wrote {} map markers to {}", markers.len(), out.display());
    }

    Ok(())
}

fn parse_countries(arg: String) -> FxHashSet<String> {
    arg.split(',').map(|s| s.trim().to_string()).collect()
}
