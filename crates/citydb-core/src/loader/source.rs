// crates/citydb-core/src/loader/source.rs
use super::common_io;
use crate::error::Result;
use crate::model::CityRaw;
use log::info;
use std::io::Read;
use std::path::Path;

/// Reads raw city rows from a `worldcities.csv`-shaped source.
///
/// Rows are returned as-is; coordinate filtering and population defaulting
/// happen in [`crate::builder::build`].
pub fn cities_from_reader<R: Read>(reader: R) -> Result<Vec<CityRaw>> {
    let mut rdr = csv::ReaderBuilder::new().from_reader(reader);
    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        let raw: CityRaw = row?;
        rows.push(raw);
    }
    Ok(rows)
}

/// Reads raw city rows from a CSV file (`.csv` or, with `compact`, `.csv.gz`).
pub fn read_cities_csv(path: impl AsRef<Path>) -> Result<Vec<CityRaw>> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let rows = cities_from_reader(reader)?;
    info!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
