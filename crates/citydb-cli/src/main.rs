//! citydb — Command-line interface for citydb-core
//!
//! Generates the `hot` and `all` autocomplete datasets from a SimpleMaps
//! `worldcities.csv`, and validates that emitted datasets are sorted by
//! normalized name.
//!
//! Usage examples
//! --------------
//!
//! - Build both datasets (defaults: 500 hot, 48000 all)
//!   $ citydb generate -i cache/worldcities.csv -o data
//!
//! - Validate them; exits 1 if either one fails
//!   $ citydb validate
//!
//! - Show the sort key of a name
//!   $ citydb normalize "Đà Nẵng"
//!
//! - Prefix search
//!   $ citydb lookup -d data/all_cities.json zur
mod args;

use crate::args::{CliArgs, Commands};
use citydb_core::config::{default_source_path, DatasetConfig, DEFAULT_DATA_DIR};
use citydb_core::loader::{read_cities_csv, read_dataset, read_entries, write_dataset};
use citydb_core::{
    build, find_by_prefix, normalize, preview_head, preview_tail, validate, ValidationError,
};
use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const RULE_WIDTH: usize = 70;

fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match args.command {
        Commands::Generate {
            input,
            out_dir,
            hot,
            all,
            hot_name,
            all_name,
        } => {
            let defaults = DatasetConfig::default();
            let config = DatasetConfig {
                hot_limit: hot.unwrap_or(defaults.hot_limit),
                all_limit: all.unwrap_or(defaults.all_limit),
                hot_file: hot_name.unwrap_or(defaults.hot_file),
                all_file: all_name.unwrap_or(defaults.all_file),
            };
            let input = input.unwrap_or_else(default_source_path);
            let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
            generate(&input, &out_dir, &config)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Validate { files } => {
            let files = if files.is_empty() {
                let config = DatasetConfig::default();
                vec![
                    config.hot_path(DEFAULT_DATA_DIR),
                    config.all_path(DEFAULT_DATA_DIR),
                ]
            } else {
                files
            };
            Ok(validate_all(&files))
        }

        Commands::Normalize { names } => {
            for name in names {
                println!("{name} -> '{}'", normalize(&name));
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Lookup {
            dataset,
            limit,
            query,
        } => {
            let dataset =
                dataset.unwrap_or_else(|| DatasetConfig::default().all_path(DEFAULT_DATA_DIR));
            let cities = read_dataset(&dataset)?;
            let hits = find_by_prefix(&cities, &query, limit);
            if hits.is_empty() {
                println!("No cities found matching: {query}");
            } else {
                for city in hits {
                    println!(
                        "{} — {} ({}) [{:.4}, {:.4}]",
                        city.name, city.country, city.country_code, city.lat, city.lon
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn generate(input: &Path, out_dir: &Path, config: &DatasetConfig) -> anyhow::Result<()> {
    println!("Reading from: {}", input.display());
    let rows = read_cities_csv(input)?;

    let (hot, all) = build(rows, config.hot_limit, config.all_limit);

    let hot_path = config.hot_path(out_dir);
    write_dataset(&hot_path, &hot)?;
    println!(
        "Created {} with {} cities (sorted alphabetically)",
        hot_path.display(),
        hot.len()
    );

    let all_path = config.all_path(out_dir);
    write_dataset(&all_path, &all)?;
    println!(
        "Created {} with {} cities (sorted alphabetically)",
        all_path.display(),
        all.len()
    );

    println!("\nFirst 10 cities alphabetically:");
    for (i, city) in hot.iter().take(10).enumerate() {
        let pop_m = city.population as f64 / 1_000_000.0;
        println!(
            "{:2}. {:<20} -> '{}' ({:<20} {:>6.1}M)",
            i + 1,
            city.name,
            normalize(&city.name),
            city.country,
            pop_m
        );
    }
    Ok(())
}

/// Validates every file independently; a failure in one never skips the rest.
fn validate_all(files: &[PathBuf]) -> ExitCode {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{rule}");
    println!("City Dataset Sorting Validation");
    println!("{rule}");

    let mut all_valid = true;
    for path in files {
        all_valid &= validate_one(path);
    }

    println!("\n{rule}");
    if all_valid {
        println!("✓ All datasets are properly sorted for binary search");
        ExitCode::SUCCESS
    } else {
        println!("✗ Some datasets have sorting issues - binary search will NOT work correctly");
        ExitCode::FAILURE
    }
}

fn validate_one(path: &Path) -> bool {
    println!("\nValidating: {}", path.display());

    let outcome = read_entries(path)
        .map_err(ValidationError::from)
        .and_then(|entries| validate(&entries).map(|report| (entries, report)));

    match outcome {
        Ok((entries, report)) if report.is_valid() => {
            println!("  Total cities: {}", report.stats.total);
            println!("  First 5 cities:");
            for line in preview_head(&entries, 5) {
                println!("    {:<30} -> '{}'", line.name, line.key);
            }
            println!("  Last 5 cities:");
            for line in preview_tail(&entries, 5) {
                println!("    {:<30} -> '{}'", line.name, line.key);
            }
            println!("  ✓ VALID - Properly sorted");
            true
        }
        Ok((_, report)) => {
            println!("  Total cities: {}", report.stats.total);
            println!(
                "  ✗ INVALID - {} sorting error(s) detected:",
                report.violations.len()
            );
            for violation in &report.violations {
                for line in violation.to_string().lines() {
                    println!("  {line}");
                }
            }
            false
        }
        Err(e) => {
            eprintln!("  ✗ INVALID - {e}");
            false
        }
    }
}
