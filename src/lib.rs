//! Workspace root for `citydb-core` and `citydb-cli`.
//!
//! Re-exports the core crate so the demos under `demos/` can use it.
pub use citydb_core::*;
