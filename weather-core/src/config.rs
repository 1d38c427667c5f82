use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::model::{CityName, WeatherRecord};

/// Seed data compiled into the library.
const BUILTIN_SEED: &str = include_str!("seed.toml");

/// Top-level seed configuration: the canned reports, as written in TOML.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// [[city]]
    /// city = "London"
    /// temperature_f = 60
    /// condition = "Cloudy"
    /// humidity_pct = 65
    #[serde(default, rename = "city")]
    pub cities: Vec<WeatherRecord>,
}

impl Config {
    /// Parse the seed table shipped with the library.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_SEED).context("Failed to parse built-in seed table")
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents).context("Failed to parse seed table TOML")?;
        Ok(cfg)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Seed table contains no cities")]
    Empty,

    #[error("City '{found}' is not in canonical form (expected '{expected}')")]
    NonCanonicalCity { found: String, expected: String },

    #[error("City '{0}' appears more than once in the seed table")]
    DuplicateCity(String),

    #[error("Humidity {humidity_pct}% for '{city}' is outside 0-100")]
    HumidityOutOfRange { city: String, humidity_pct: u8 },
}

/// Validated, immutable lookup table keyed by canonical city name.
///
/// Every key maps to a record whose own `city` equals that key.
#[derive(Debug, Clone)]
pub struct WeatherTable {
    records: HashMap<CityName, WeatherRecord>,
}

impl WeatherTable {
    pub fn from_config(config: Config) -> Result<Self, TableError> {
        if config.cities.is_empty() {
            return Err(TableError::Empty);
        }

        let mut records = HashMap::with_capacity(config.cities.len());
        for record in config.cities {
            let key = CityName::normalize(&record.city);
            if key.as_str() != record.city {
                return Err(TableError::NonCanonicalCity {
                    found: record.city,
                    expected: key.to_string(),
                });
            }
            if record.humidity_pct > 100 {
                return Err(TableError::HumidityOutOfRange {
                    city: record.city,
                    humidity_pct: record.humidity_pct,
                });
            }
            if records.contains_key(&key) {
                return Err(TableError::DuplicateCity(record.city));
            }
            records.insert(key, record);
        }

        tracing::debug!(cities = records.len(), "weather table built");
        Ok(Self { records })
    }

    /// Convenience helper: parse and validate the built-in seed table.
    pub fn builtin() -> Result<Self> {
        let config = Config::builtin()?;
        Self::from_config(config).context("Built-in seed table is invalid")
    }

    pub fn get(&self, city: &CityName) -> Option<&WeatherRecord> {
        self.records.get(city)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Canonical city names, sorted.
    pub fn cities(&self) -> Vec<&CityName> {
        let mut names: Vec<&CityName> = self.records.keys().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(city: &str, humidity_pct: u8) -> WeatherRecord {
        WeatherRecord {
            city: city.to_string(),
            temperature_f: 50,
            condition: "Foggy".to_string(),
            humidity_pct,
        }
    }

    #[test]
    fn builtin_table_has_three_cities() {
        let table = WeatherTable::builtin().expect("built-in table must be valid");

        assert_eq!(table.len(), 3);
        let names: Vec<&str> = table.cities().into_iter().map(CityName::as_str).collect();
        assert_eq!(names, ["London", "New York", "Tokyo"]);
    }

    #[test]
    fn builtin_records_match_their_keys() {
        let table = WeatherTable::builtin().expect("built-in table must be valid");

        for name in table.cities() {
            let rec = table.get(name).expect("listed city must resolve");
            assert_eq!(rec.city, name.as_str());
        }
    }

    #[test]
    fn builtin_tokyo_values() {
        let table = WeatherTable::builtin().unwrap();
        let tokyo = table.get(&CityName::normalize("tokyo")).unwrap();

        assert_eq!(tokyo.temperature_f, 75);
        assert_eq!(tokyo.condition, "Rainy");
        assert_eq!(tokyo.humidity_pct, 70);
    }

    #[test]
    fn parses_toml_document() {
        let cfg = Config::from_toml_str(
            r#"
            [[city]]
            city = "Oslo"
            temperature_f = 28
            condition = "Snow"
            humidity_pct = 80
            "#,
        )
        .expect("valid TOML");

        assert_eq!(cfg.cities, vec![WeatherRecord {
            city: "Oslo".into(),
            temperature_f: 28,
            condition: "Snow".into(),
            humidity_pct: 80,
        }]);
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = Config::from_toml_str("[[city]]\ncity = 12").unwrap_err();
        assert!(err.to_string().contains("Failed to parse seed table TOML"));
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = WeatherTable::from_config(Config::default()).unwrap_err();
        assert_eq!(err, TableError::Empty);
    }

    #[test]
    fn non_canonical_city_is_rejected() {
        let cfg = Config { cities: vec![record("new york", 40)] };
        let err = WeatherTable::from_config(cfg).unwrap_err();

        assert_eq!(err, TableError::NonCanonicalCity {
            found: "new york".into(),
            expected: "New York".into(),
        });
    }

    #[test]
    fn duplicate_city_is_rejected() {
        let cfg = Config { cities: vec![record("Paris", 40), record("Paris", 45)] };
        let err = WeatherTable::from_config(cfg).unwrap_err();

        assert_eq!(err, TableError::DuplicateCity("Paris".into()));
    }

    #[test]
    fn humidity_above_hundred_is_rejected() {
        let cfg = Config { cities: vec![record("Lima", 101)] };
        let err = WeatherTable::from_config(cfg).unwrap_err();

        assert!(err.to_string().contains("outside 0-100"));
    }
}
