use crate::model::WeatherRecord;
use std::fmt::Debug;

pub mod seeded;

pub use seeded::SeededProvider;

/// A source of weather records.
///
/// An unknown city is an expected outcome and yields `None`, not an error.
pub trait WeatherProvider: Debug {
    fn fetch(&self, city: &str) -> Option<WeatherRecord>;
}

impl<P: WeatherProvider + ?Sized> WeatherProvider for &P {
    fn fetch(&self, city: &str) -> Option<WeatherRecord> {
        (**self).fetch(city)
    }
}

impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    fn fetch(&self, city: &str) -> Option<WeatherRecord> {
        (**self).fetch(city)
    }
}
