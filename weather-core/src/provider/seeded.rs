use std::sync::Arc;

use crate::{
    config::WeatherTable,
    model::{CityName, WeatherRecord},
};

use super::WeatherProvider;

/// Serves records from the in-memory seed table.
#[derive(Debug, Clone)]
pub struct SeededProvider {
    table: Arc<WeatherTable>,
}

impl SeededProvider {
    pub fn new(table: Arc<WeatherTable>) -> Self {
        Self { table }
    }
}

impl WeatherProvider for SeededProvider {
    fn fetch(&self, city: &str) -> Option<WeatherRecord> {
        tracing::info!("Fetching weather data for {city}...");

        let key = CityName::normalize(city);
        self.table.get(&key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> SeededProvider {
        SeededProvider::new(Arc::new(WeatherTable::builtin().expect("valid seed")))
    }

    #[test]
    fn fetch_known_city() {
        let rec = provider().fetch("London").expect("London is seeded");

        assert_eq!(rec, WeatherRecord {
            city: "London".into(),
            temperature_f: 60,
            condition: "Cloudy".into(),
            humidity_pct: 65,
        });
    }

    #[test]
    fn fetch_ignores_case_and_whitespace() {
        let p = provider();
        let expected = p.fetch("New York");

        assert!(expected.is_some());
        for raw in ["new york", " New York ", "NEW YORK"] {
            assert_eq!(p.fetch(raw), expected, "input {raw:?}");
        }
    }

    #[test]
    fn fetch_of_normalized_matches_fetch_of_raw() {
        let p = provider();
        for raw in ["tOkYo", "  london\t", "atlantis", ""] {
            let normalized = CityName::normalize(raw);
            assert_eq!(p.fetch(normalized.as_str()), p.fetch(raw));
        }
    }

    #[test]
    fn fetch_unknown_city_is_none() {
        let p = provider();

        assert_eq!(p.fetch("Atlantis"), None);
        assert_eq!(p.fetch(""), None);
        assert_eq!(p.fetch("NewYork"), None);
    }

    #[test]
    fn boxed_provider_delegates() {
        let boxed: Box<dyn WeatherProvider> = Box::new(provider());
        assert_eq!(boxed.fetch("tokyo").map(|r| r.temperature_f), Some(75));
    }
}
