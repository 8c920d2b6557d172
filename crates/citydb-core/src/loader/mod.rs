// crates/citydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (file access, optional Gzip) and the two
//! formats the pipeline touches: the source CSV and the JSON artifacts.

mod artifact;
mod common_io;
mod source;

pub use artifact::{read_dataset, read_entries, read_records, write_dataset};
pub use common_io::open_stream;
pub use source::{cities_from_reader, read_cities_csv};
