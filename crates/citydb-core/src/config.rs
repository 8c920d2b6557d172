// crates/citydb-core/src/config.rs
use std::path::{Path, PathBuf};

pub const DEFAULT_HOT_LIMIT: usize = 500;
pub const DEFAULT_ALL_LIMIT: usize = 48_000;
pub const DEFAULT_HOT_FILE: &str = "hot_cities.json";
pub const DEFAULT_ALL_FILE: &str = "all_cities.json";
pub const DEFAULT_SOURCE_FILE: &str = "worldcities.csv";
pub const DEFAULT_CACHE_DIR: &str = "cache";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Where the downloaded `worldcities.csv` is expected by default.
pub fn default_source_path() -> PathBuf {
    Path::new(DEFAULT_CACHE_DIR).join(DEFAULT_SOURCE_FILE)
}

/// Sizes and file names of the two emitted datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub hot_limit: usize,
    pub all_limit: usize,
    pub hot_file: String,
    pub all_file: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            hot_limit: DEFAULT_HOT_LIMIT,
            all_limit: DEFAULT_ALL_LIMIT,
            hot_file: DEFAULT_HOT_FILE.to_owned(),
            all_file: DEFAULT_ALL_FILE.to_owned(),
        }
    }
}

impl DatasetConfig {
    pub fn hot_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(&self.hot_file)
    }

    pub fn all_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(&self.all_file)
    }
}
