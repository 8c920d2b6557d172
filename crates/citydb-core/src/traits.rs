// crates/citydb-core/src/traits.rs
use crate::model::{City, DatasetEntry};
use crate::text::normalize;

/// Records that carry a display name and therefore a sort key.
///
/// The key is always [`normalize`] of the name, the same function the
/// builder sorts with and the validator checks with.
///
/// # Examples
/// ```rust
/// use citydb_core::{DatasetEntry, NamedRecord};
///
/// let entry = DatasetEntry::named("Köln");
/// assert_eq!(entry.sort_key().as_deref(), Some("koln"));
/// ```
pub trait NamedRecord {
    /// Raw display name, if the record has one.
    fn name_str(&self) -> Option<&str>;

    /// Normalized key of the name.
    fn sort_key(&self) -> Option<String> {
        self.name_str().map(normalize)
    }
}

impl NamedRecord for City {
    fn name_str(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl NamedRecord for DatasetEntry {
    fn name_str(&self) -> Option<&str> {
        self.name
            .as_ref()
            .map(|name| name.as_deref().unwrap_or_default())
    }
}
