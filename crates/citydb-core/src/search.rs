// crates/citydb-core/src/search.rs
use crate::text::normalize;
use crate::traits::NamedRecord;

/// Autocomplete lookup over a sorted dataset.
///
/// Normalizes `query`, binary-searches to the first record whose key is
/// `>=` the query key, then collects up to `limit` records whose keys start
/// with it. `records` must be sorted by key (see
/// [`crate::validate::validate`]); on an unsorted slice the result is
/// unspecified.
///
/// A query that normalizes to nothing returns nothing.
///
/// # Examples
/// ```rust
/// use citydb_core::{find_by_prefix, DatasetEntry};
///
/// let data: Vec<DatasetEntry> = ["Bergen", "Berlin", "Bern", "Bonn"]
///     .iter()
///     .map(|n| DatasetEntry::named(*n))
///     .collect();
/// let hits = find_by_prefix(&data, "BER", 10);
/// assert_eq!(hits.len(), 3);
/// ```
pub fn find_by_prefix<'a, R: NamedRecord>(records: &'a [R], query: &str, limit: usize) -> Vec<&'a R> {
    let q = normalize(query);
    if q.is_empty() {
        return Vec::new();
    }

    let start = records.partition_point(|r| r.sort_key().unwrap_or_default() < q);

    records[start..]
        .iter()
        .take_while(|r| r.sort_key().is_some_and(|k| k.starts_with(&q)))
        .take(limit)
        .collect()
}
