// crates/citydb-core/src/common.rs
use crate::traits::NamedRecord;
use serde::{Deserialize, Serialize};

/// Summary statistics for a dataset, reported by the validator.
///
/// `first` and `last` are raw display names, handy to eyeball whether a
/// dataset starts and ends where it should.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total: usize,
    pub first: String,
    pub last: String,
}

/// One `name -> key` line of a dataset preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub name: String,
    pub key: String,
}

impl PreviewLine {
    fn of<R: NamedRecord>(record: &R) -> Self {
        let name = record.name_str().unwrap_or_default().to_owned();
        let key = record.sort_key().unwrap_or_default();
        Self { name, key }
    }
}

/// First `n` records with their keys.
pub fn preview_head<R: NamedRecord>(records: &[R], n: usize) -> Vec<PreviewLine> {
    records.iter().take(n).map(PreviewLine::of).collect()
}

/// Last `n` records with their keys, in dataset order.
pub fn preview_tail<R: NamedRecord>(records: &[R], n: usize) -> Vec<PreviewLine> {
    let start = records.len().saturating_sub(n);
    records[start..].iter().map(PreviewLine::of).collect()
}
