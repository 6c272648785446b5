//! Defines the current-conditions sample taken from the OpenWeatherMap API and the raw
//! response structures it is extracted from.

use crate::types::location::LatLon;
use crate::types::units::Units;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single temperature reading at a coordinate pair, taken at request time.
///
/// Samples are not stored; every climate comparison fetches fresh ones.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSample {
    /// The point that was queried.
    pub location: LatLon,
    /// Air temperature in the requested [`Units`].
    pub temperature: f64,
    pub feels_like: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<f64>,
    /// Short description of the current conditions (e.g. "light rain").
    pub description: Option<String>,
    /// Name of the nearest place OpenWeatherMap knows about, if any.
    pub place_name: Option<String>,
    /// When the provider observed these conditions.
    pub observed_at: Option<DateTime<Utc>>,
    pub units: Units,
}

impl WeatherSample {
    /// Temperature with its unit suffix, e.g. `24.31°C`.
    pub fn temperature_label(&self) -> String {
        format!("{}{}", self.temperature, self.units.temperature_suffix())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeatherResponse {
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub dt: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainReadings {
    pub temp: f64,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeatherCondition {
    pub description: Option<String>,
}

impl CurrentWeatherResponse {
    pub(crate) fn into_sample(self, location: LatLon, units: Units) -> WeatherSample {
        WeatherSample {
            location,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            description: self.weather.into_iter().find_map(|w| w.description),
            // OpenWeatherMap reports an empty name for points in the ocean or wilderness.
            place_name: self.name.filter(|n| !n.is_empty()),
            observed_at: self.dt.and_then(|ts| DateTime::from_timestamp(ts, 0)),
            units,
        }
    }
}
