// crates/citydb-core/src/builder.rs

//! # Dataset Builder
//!
//! Raw rows -> filtered, keyed, stably sorted cities -> two prefix views.

use crate::model::{City, CityRaw};
use crate::text::normalize;
use log::debug;

/// Sorts cities by their normalized name.
///
/// The sort is stable: cities with equal keys keep their input order, which
/// keeps output reproducible for a given source file.
pub fn sort_cities(cities: &mut [City]) {
    cities.sort_by_cached_key(|c| normalize(&c.name));
}

/// Builds the `hot` and `all` datasets from raw rows.
///
/// Rows without usable coordinates are dropped silently. Both views are
/// prefixes of one sorted sequence, so with `hot_limit <= all_limit` the hot
/// dataset is a prefix of the all dataset. Asking for more than exists just
/// returns everything.
pub fn build<I>(records: I, hot_limit: usize, all_limit: usize) -> (Vec<City>, Vec<City>)
where
    I: IntoIterator<Item = CityRaw>,
{
    let mut total = 0usize;
    let mut cities: Vec<City> = records
        .into_iter()
        .inspect(|_| total += 1)
        .filter_map(|raw| raw.to_city())
        .collect();

    debug!(
        "kept {} of {} rows ({} without valid coordinates)",
        cities.len(),
        total,
        total - cities.len()
    );

    sort_cities(&mut cities);

    let hot: Vec<City> = cities.iter().take(hot_limit).cloned().collect();
    cities.truncate(all_limit);
    (hot, cities)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, lat: &str, lng: &str) -> CityRaw {
        CityRaw {
            name: name.to_owned(),
            country: "Testland".to_owned(),
            iso2: "TL".to_owned(),
            lat: Some(lat.to_owned()),
            lng: Some(lng.to_owned()),
            population: None,
        }
    }

    fn names(cities: &[City]) -> Vec<&str> {
        cities.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn sorts_by_normalized_name() {
        let rows = vec![
            row("Zürich", "47.37", "8.54"),
            row("Ålesund", "62.47", "6.15"),
            row("Bern", "46.95", "7.45"),
            row("Øslo", "59.91", "10.75"),
        ];
        let (_, all) = build(rows, 10, 10);
        assert_eq!(names(&all), vec!["Ålesund", "Bern", "Øslo", "Zürich"]);
    }

    #[test]
    fn drops_rows_without_coordinates() {
        let mut missing = row("Nowhere", "0", "0");
        missing.lat = None;
        let rows = vec![row("Lima", "-12.06", "-77.04"), missing, row("Bad", "x", "1")];
        let (hot, all) = build(rows, 10, 10);
        assert_eq!(names(&all), vec!["Lima"]);
        assert_eq!(names(&hot), vec!["Lima"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let rows = vec![
            row("Köln", "1", "1"),
            row("Aba", "1", "1"),
            row("koln", "2", "2"),
            row("KOLN", "3", "3"),
        ];
        let (_, all) = build(rows, 10, 10);
        assert_eq!(names(&all), vec!["Aba", "Köln", "koln", "KOLN"]);
        assert_eq!(all[1].lat, 1.0);
        assert_eq!(all[3].lat, 3.0);
    }

    #[test]
    fn hot_is_prefix_of_all() {
        let rows: Vec<CityRaw> = ["e", "d", "c", "b", "a", "f"]
            .iter()
            .map(|n| row(n, "1", "1"))
            .collect();
        let (hot, all) = build(rows, 2, 4);
        assert_eq!(names(&hot), vec!["a", "b"]);
        assert_eq!(names(&all), vec!["a", "b", "c", "d"]);
        assert_eq!(&all[..hot.len()], &hot[..]);
    }

    #[test]
    fn under_supply_is_not_padded() {
        let rows = vec![row("Quito", "1", "1"), row("Accra", "1", "1")];
        let (hot, all) = build(rows, 5, 10);
        assert_eq!(hot.len(), 2);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn zero_limits() {
        let (hot, all) = build(vec![row("Quito", "1", "1")], 0, 0);
        assert!(hot.is_empty());
        assert!(all.is_empty());
    }

    #[test]
    fn unmapped_scripts_sort_first() {
        let rows = vec![
            row("Aachen", "1", "1"),
            row("東京", "1", "1"),
            row("123 Village", "1", "1"),
        ];
        let (_, all) = build(rows, 10, 10);
        assert_eq!(names(&all), vec!["東京", "123 Village", "Aachen"]);
    }
}
