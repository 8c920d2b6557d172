// crates/citydb-core/src/loader/artifact.rs
use super::common_io;
use crate::error::Result;
use crate::model::{City, DatasetEntry};
use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// On-disk shape of an artifact: `{"cities": [...]}`.
#[derive(Serialize, Deserialize)]
struct Artifact<C> {
    cities: C,
}

/// Writes `cities` as a pretty-printed artifact, keeping non-ASCII names
/// unescaped. Parent directories are created as needed.
pub fn write_dataset(path: impl AsRef<Path>, cities: &[City]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &Artifact { cities })?;
    writer.flush()?;

    info!("wrote {} cities to {}", cities.len(), path.display());
    Ok(())
}

/// Reads the `cities` array of an artifact into any record type.
///
/// A document without a `cities` array is rejected as malformed JSON.
pub fn read_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let reader = common_io::open_stream(path.as_ref())?;
    let artifact: Artifact<Vec<T>> = serde_json::from_reader(reader)?;
    Ok(artifact.cities)
}

/// Reads a full dataset, e.g. for lookups.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Vec<City>> {
    read_records(path)
}

/// Reads only what the validator needs from each record.
pub fn read_entries(path: impl AsRef<Path>) -> Result<Vec<DatasetEntry>> {
    read_records(path)
}
