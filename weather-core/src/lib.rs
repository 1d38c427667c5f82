//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The seed table of canned weather reports and its validation
//! - Abstraction over weather data sources
//! - Report formatting
//! - Shared domain models (records, city names)
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod format;
pub mod model;
pub mod provider;

pub use config::{Config, TableError, WeatherTable};
pub use format::{ReportFormatter, SentenceFormatter};
pub use model::{CityName, WeatherRecord};
pub use provider::{SeededProvider, WeatherProvider};
