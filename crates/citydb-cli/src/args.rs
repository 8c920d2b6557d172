use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citydb
#[derive(Debug, Parser)]
#[command(
    name = "citydb",
    version,
    about = "Generate and validate sorted city datasets for autocomplete"
)]
pub struct CliArgs {
    /// Log more (debug level); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build hot and all datasets from a worldcities CSV
    Generate {
        /// Source CSV (.csv, or .csv.gz with the 'compact' feature; default: cache/worldcities.csv)
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// Directory the JSON datasets are written to (default: data)
        #[arg(short = 'o', long = "out-dir")]
        out_dir: Option<PathBuf>,

        /// Number of cities in the hot dataset
        #[arg(long = "hot")]
        hot: Option<usize>,

        /// Number of cities in the all dataset
        #[arg(long = "all")]
        all: Option<usize>,

        /// File name of the hot dataset
        #[arg(long = "hot-name")]
        hot_name: Option<String>,

        /// File name of the all dataset
        #[arg(long = "all-name")]
        all_name: Option<String>,
    },

    /// Check that datasets are sorted for binary search
    Validate {
        /// Dataset files to check (default: data/hot_cities.json data/all_cities.json)
        files: Vec<PathBuf>,
    },

    /// Print the sort key of one or more names
    Normalize {
        /// Names to normalize
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Prefix search in a sorted dataset
    Lookup {
        /// Dataset to search (default: data/all_cities.json)
        #[arg(short = 'd', long = "dataset")]
        dataset: Option<PathBuf>,

        /// Maximum number of results
        #[arg(short = 'n', long = "limit", default_value_t = 10)]
        limit: usize,

        /// Query text (accents and case are ignored)
        query: String,
    },
}
