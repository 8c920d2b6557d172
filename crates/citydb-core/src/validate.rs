// crates/citydb-core/src/validate.rs

//! # Sort Order Validator
//!
//! Re-derives every key from the raw names of an emitted dataset and checks
//! that they never decrease. Shares nothing with the builder except
//! [`crate::text::normalize`].

use crate::common::DatasetStats;
use crate::error::ValidationError;
use crate::loader;
use crate::traits::NamedRecord;
use log::{debug, info};
use serde::Serialize;
use std::path::Path;

/// An adjacent pair whose keys are out of order.
///
/// `index` is the position of the later record (`current`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub index: usize,
    pub previous_name: String,
    pub previous_key: String,
    pub current_name: String,
    pub current_key: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sorting violation at index {}:", self.index)?;
        writeln!(f, "  Previous: '{}' -> '{}'", self.previous_name, self.previous_key)?;
        writeln!(f, "  Current:  '{}' -> '{}'", self.current_name, self.current_key)?;
        write!(
            f,
            "  ('{}' should come AFTER '{}')",
            self.current_key, self.previous_key
        )
    }
}

/// Outcome of validating one dataset whose structure was sound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// `true` iff no adjacent pair is out of order.
    pub ok: bool,
    pub violations: Vec<Violation>,
    pub stats: DatasetStats,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.ok
    }
}

/// Validates the sort order of `records`.
///
/// An empty dataset or a record without a name is a hard error. Ordering
/// problems are not: every one of them is collected into the report, so a
/// single run shows all defects.
pub fn validate<R: NamedRecord>(records: &[R]) -> Result<ValidationReport, ValidationError> {
    if records.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut missing = Vec::new();
    let mut keyed: Vec<(&str, String)> = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        match record.name_str() {
            Some(name) => keyed.push((name, crate::text::normalize(name))),
            None => missing.push(i),
        }
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingName { indices: missing });
    }

    let violations: Vec<Violation> = keyed
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[1].1 < pair[0].1)
        .map(|(i, pair)| Violation {
            index: i + 1,
            previous_name: pair[0].0.to_owned(),
            previous_key: pair[0].1.clone(),
            current_name: pair[1].0.to_owned(),
            current_key: pair[1].1.clone(),
        })
        .collect();

    // non-empty and fully named past this point
    let stats = DatasetStats {
        total: keyed.len(),
        first: keyed[0].0.to_owned(),
        last: keyed[keyed.len() - 1].0.to_owned(),
    };

    debug!(
        "validated {} records, {} violation(s)",
        stats.total,
        violations.len()
    );

    Ok(ValidationReport {
        ok: violations.is_empty(),
        violations,
        stats,
    })
}

/// Loads an artifact and validates it.
pub fn validate_file(path: impl AsRef<Path>) -> Result<ValidationReport, ValidationError> {
    let path = path.as_ref();
    info!("validating {}", path.display());
    let entries = loader::read_entries(path)?;
    validate(&entries)
}
