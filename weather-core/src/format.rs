use crate::model::WeatherRecord;

/// Sentence returned when there is no record to format.
pub const NOT_AVAILABLE: &str = "Weather data not available";

/// Turns a weather record into text for the user.
pub trait ReportFormatter {
    fn format(&self, record: Option<&WeatherRecord>) -> String;
}

/// Renders one fixed English sentence per record. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceFormatter;

impl ReportFormatter for SentenceFormatter {
    fn format(&self, record: Option<&WeatherRecord>) -> String {
        match record {
            Some(r) => format!(
                "Weather in {}: {} degrees, {}, Humidity: {}%",
                r.city, r.temperature_f, r.condition, r.humidity_pct
            ),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

impl<F: ReportFormatter + ?Sized> ReportFormatter for &F {
    fn format(&self, record: Option<&WeatherRecord>) -> String {
        (**self).format(record)
    }
}

/// Line printed in basic mode for a city the source does not know.
pub fn not_found_for(city: &str) -> String {
    format!("{NOT_AVAILABLE} for {city}")
}
