// crates/citydb-core/src/lib.rs

//! # citydb-core
//!
//! Builds the `hot` and `all` city datasets used by autocomplete and checks,
//! independently, that they are sorted by normalized name so a binary search
//! over them is valid.
//!
//! ```rust
//! use citydb_core::{build, find_by_prefix, validate, CityRaw};
//!
//! let rows = ["Zürich", "Köln", "Aachen"].iter().map(|n| CityRaw {
//!     name: (*n).into(),
//!     lat: Some("1.0".into()),
//!     lng: Some("2.0".into()),
//!     ..Default::default()
//! });
//! let (hot, all) = build(rows, 2, 10);
//! assert_eq!(hot.len(), 2);
//! assert!(validate(&all).unwrap().is_valid());
//! assert_eq!(find_by_prefix(&all, "koln", 5)[0].name, "Köln");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod builder;
pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod search;
pub mod text;
pub mod traits;
pub mod validate;

// Re-exports
pub use crate::builder::{build, sort_cities};
pub use crate::common::{preview_head, preview_tail, DatasetStats, PreviewLine};
pub use crate::config::DatasetConfig;
pub use crate::error::{CityDbError, Result, ValidationError};
pub use crate::model::{City, CityRaw, DatasetEntry};
pub use crate::search::find_by_prefix;
pub use crate::text::normalize;
pub use crate::traits::NamedRecord;
pub use crate::validate::{validate, validate_file, ValidationReport, Violation};
