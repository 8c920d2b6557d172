// crates/citydb-core/src/model.rs
use serde::{Deserialize, Serialize};

/// Raw city row as it comes from the SimpleMaps `worldcities.csv`.
///
/// Numeric columns stay textual here; [`CityRaw::to_city`] decides what is
/// usable. Columns not listed are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityRaw {
    #[serde(rename = "city")]
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub iso2: String,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
}

impl CityRaw {
    /// Converts the row into a [`City`].
    ///
    /// Returns `None` when either coordinate is missing or not a finite
    /// number. A bad population never rejects the row, it becomes `0`.
    pub fn to_city(&self) -> Option<City> {
        let lat = parse_coordinate(self.lat.as_deref())?;
        let lon = parse_coordinate(self.lng.as_deref())?;

        Some(City {
            name: self.name.clone(),
            country: self.country.clone(),
            country_code: self.iso2.clone(),
            lat,
            lon,
            population: parse_population(self.population.as_deref()),
        })
    }
}

/// A city entry in an emitted dataset.
///
/// `name` is the original display string; the sort key is always derived
/// from it and never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
    pub country_code: String,
    pub lat: f64,
    pub lon: f64,
    pub population: u64,
}

/// A record read back from an artifact for validation.
///
/// Only the name matters to the sort order. The outer `Option` is the key
/// itself: `None` means the record has no `name` field and is reported,
/// while `Some(None)` is an explicit `"name": null`, which sorts as an
/// empty key.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DatasetEntry {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
}

impl DatasetEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(Some(name.into())),
        }
    }
}

impl From<&City> for DatasetEntry {
    fn from(city: &City) -> Self {
        Self::named(city.name.clone())
    }
}

// Only called when the key exists, so a `null` value still counts as present.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Parses a coordinate, accepting only finite values.
pub fn parse_coordinate(s: Option<&str>) -> Option<f64> {
    s.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parses a population count. Accepts integer or float text (`"1234.0"`),
/// truncating toward zero. Anything missing, malformed or negative is `0`.
pub fn parse_population(s: Option<&str>) -> u64 {
    s.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|p| p.is_finite() && *p >= 0.0)
        .map(|p| p.trunc() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(lat: Option<&str>, lng: Option<&str>, population: Option<&str>) -> CityRaw {
        CityRaw {
            name: "Tokyo".into(),
            country: "Japan".into(),
            iso2: "JP".into(),
            lat: lat.map(str::to_owned),
            lng: lng.map(str::to_owned),
            population: population.map(str::to_owned),
        }
    }

    #[test]
    fn converts_a_complete_row() {
        let city = raw(Some("35.6897"), Some("139.6922"), Some("37732000"))
            .to_city()
            .expect("valid row");
        assert_eq!(city.name, "Tokyo");
        assert_eq!(city.country_code, "JP");
        assert_eq!(city.lat, 35.6897);
        assert_eq!(city.lon, 139.6922);
        assert_eq!(city.population, 37_732_000);
    }

    #[test]
    fn rejects_missing_or_bad_coordinates() {
        assert!(raw(None, Some("1.0"), None).to_city().is_none());
        assert!(raw(Some("1.0"), Some(""), None).to_city().is_none());
        assert!(raw(Some("north"), Some("1.0"), None).to_city().is_none());
        assert!(raw(Some("NaN"), Some("1.0"), None).to_city().is_none());
        assert!(raw(Some("1.0"), Some("inf"), None).to_city().is_none());
    }

    #[test]
    fn coordinates_tolerate_whitespace() {
        assert_eq!(parse_coordinate(Some(" -33.45 ")), Some(-33.45));
    }

    #[test]
    fn population_defaults_to_zero() {
        assert_eq!(parse_population(None), 0);
        assert_eq!(parse_population(Some("")), 0);
        assert_eq!(parse_population(Some("n/a")), 0);
        assert_eq!(parse_population(Some("-5")), 0);
        assert_eq!(parse_population(Some("1234.9")), 1234);
        assert_eq!(parse_population(Some("42")), 42);
    }

    #[test]
    fn entry_from_city_keeps_name() {
        let city = raw(Some("1"), Some("2"), None).to_city().unwrap();
        assert_eq!(DatasetEntry::from(&city).name, Some(Some("Tokyo".to_owned())));
    }

    #[test]
    fn entry_tells_null_name_from_missing_name() {
        let null: DatasetEntry = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(null.name, Some(None));

        let missing: DatasetEntry = serde_json::from_str(r#"{"country": "X"}"#).unwrap();
        assert_eq!(missing.name, None);

        let named: DatasetEntry = serde_json::from_str(r#"{"name": "Bern"}"#).unwrap();
        assert_eq!(named.name, Some(Some("Bern".to_owned())));
    }
}
