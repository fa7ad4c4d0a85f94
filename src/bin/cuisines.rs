//! Cuisines screen: featured picks, top restaurants, cuisine rankings.
//!
//! Usage: cuisines [csv-path] [country,country,...]

use std::path::PathBuf;

use anyhow::Result;
use rustc_hash::FxHashSet;

use fome_zero_analytics::load_screen_table;
use fome_zero_analytics::views::cuisines::{
    best_restaurant_for_cuisine, mean_rating_by_cuisine, top_restaurants, RankOrder,
    DEFAULT_TOP_N, DEFAULT_TOP_RESTAURANTS, FEATURED_CUISINES,
};
use fome_zero_analytics::Error;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().unwrap_or_else(|| "dataset/zomato.csv".to_string()));
    let countries = args.next().map(parse_countries);

    let records = load_screen_table(&path, countries.as_ref())?;

    println!("{}", "=".repeat(60));
    println!("FOME ZERO — CUISINES");
    println!("{}", "=".repeat(60));

    println!("\nBest restaurants of the featured cuisines");
    for cuisine in FEATURED_CUISINES {
        match best_restaurant_for_cuisine(&records, cuisine) {
            Ok(pick) => println!(
                "  {:<12} {}  ({}/5.0)",
                cuisine, pick.restaurant_name, pick.aggregate_rating
            ),
            // The active country filter can empty a featured cuisine.
            Err(Error::NotFound { .. }) => {
                println!("  {:<12} no match under current filter", cuisine)
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("\nTop {} restaurants", DEFAULT_TOP_RESTAURANTS);
    for r in top_restaurants(&records, DEFAULT_TOP_RESTAURANTS) {
        println!(
            "  {:>8}  {:<28} {:<18} {:<16} {:>4}  {:>6}",
            r.restaurant_id, r.restaurant_name, r.city, r.cuisines, r.aggregate_rating, r.votes
        );
    }

    println!("\nTop {} best-rated cuisines", DEFAULT_TOP_N);
    for row in mean_rating_by_cuisine(&records, DEFAULT_TOP_N, RankOrder::Best) {
        println!("  {:<24} {:>4}", row.cuisines, row.mean_rating);
    }

    println!("\nTop {} worst-rated cuisines", DEFAULT_TOP_N);
    for row in mean_rating_by_cuisine(&records, DEFAULT_TOP_N, RankOrder::Worst) {
        println!("  {:<24} {:>4}", row.cuisines, row.mean_rating);
    }

    Ok(())
}

fn parse_countries(arg: String) -> FxHashSet<String> {
    arg.split(',').map(|s| s.trim().to_string()).collect()
}
