//! Basic usage example for citydb-rs
//!
//! Builds a small dataset in memory, validates it, and runs a few lookups.

use citydb_core::{build, find_by_prefix, normalize, validate, CityRaw, Result};

fn row(name: &str, country: &str, iso2: &str, lat: &str, lng: &str, pop: &str) -> CityRaw {
    CityRaw {
        name: name.into(),
        country: country.into(),
        iso2: iso2.into(),
        lat: Some(lat.into()),
        lng: Some(lng.into()),
        population: Some(pop.into()),
    }
}

fn main() -> Result<()> {
    println!("=== citydb-rs Basic Usage Example ===\n");

    // Example 1: Sort keys
    println!("--- Example 1: Normalized sort keys ---");
    for name in ["Đà Nẵng", "Søndre Land", "Köln", "Straße", "東京"] {
        println!("  {name:<15} -> '{}'", normalize(name));
    }
    println!();

    // Example 2: Build
    println!("--- Example 2: Building hot and all datasets ---");
    let rows = vec![
        row("Zürich", "Switzerland", "CH", "47.3786", "8.5400", "436332"),
        row("Köln", "Germany", "DE", "50.9422", "6.9578", "1087863"),
        row("Kolkata", "India", "IN", "22.5675", "88.3700", "14850066"),
        row("Đà Nẵng", "Vietnam", "VN", "16.0748", "108.2240", "1220190"),
        row("Atlantis", "Nowhere", "XX", "", "", "0"),
    ];
    let (hot, all) = build(rows, 2, 10);
    println!("  hot: {} cities, all: {} cities", hot.len(), all.len());
    for city in &all {
        println!("  {} ({})", city.name, city.country_code);
    }
    println!();

    // Example 3: Validate
    println!("--- Example 3: Validating sort order ---");
    match validate(&all) {
        Ok(report) if report.is_valid() => {
            println!("  ✓ {} cities, sorted", report.stats.total)
        }
        Ok(report) => println!("  ✗ {} violation(s)", report.violations.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 4: Lookup
    println!("--- Example 4: Prefix lookup ---");
    for query in ["kol", "ZÜR", "da n"] {
        let hits: Vec<&str> = find_by_prefix(&all, query, 5)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        println!("  {query:<6} -> {hits:?}");
    }

    Ok(())
}
