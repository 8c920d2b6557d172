//! citydb-cli
//! ==========
//!
//! Command-line interface for `citydb-core`.
//!
//! This crate primarily provides a binary (`citydb`). The library target
//! exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! citydb generate --input cache/worldcities.csv --out-dir data
//! citydb validate data/hot_cities.json data/all_cities.json
//! citydb normalize "Đà Nẵng" "Søndre Land"
//! citydb lookup --dataset data/all_cities.json kol
//! ```
//!
//! For programmatic access use the [`citydb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
