//! Runtime configuration for the API clients and the dashboard views.

use crate::gbif::client::{DEFAULT_GBIF_BASE_URL, DEFAULT_OCCURRENCE_LIMIT};
use crate::types::units::Units;
use crate::weather::client::DEFAULT_WEATHER_BASE_URL;
use bon::Builder;
use std::path::PathBuf;

/// Default location of the historical temperature CSV, relative to the working directory.
pub const DEFAULT_HISTORICAL_CSV: &str = "data/weather.csv";

/// Settings shared by the [`crate::Dashboard`] and the clients it creates.
///
/// Every field has a default, so the smallest configuration is just an API key for the
/// weather service (the other two views work without one).
///
/// # Examples
///
/// ```
/// use biodiversity_explorer::{ExplorerConfig, Units};
///
/// let config = ExplorerConfig::builder()
///     .weather_api_key("my-openweathermap-key")
///     .units(Units::Imperial)
///     .occurrence_limit(20)
///     .build();
///
/// assert_eq!(config.gbif_base_url, "https://api.gbif.org/v1");
/// assert_eq!(config.climate_occurrence_limit, 1);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ExplorerConfig {
    /// Base URL of the GBIF API, without trailing slash.
    #[builder(default = DEFAULT_GBIF_BASE_URL.to_string(), into)]
    pub gbif_base_url: String,

    /// Base URL of the OpenWeatherMap data API, without trailing slash.
    #[builder(default = DEFAULT_WEATHER_BASE_URL.to_string(), into)]
    pub weather_base_url: String,

    /// OpenWeatherMap API key. Weather lookups fail with
    /// [`crate::WeatherError::MissingApiKey`] when this is not set.
    #[builder(into)]
    pub weather_api_key: Option<String>,

    #[builder(default)]
    pub units: Units,

    /// Number of occurrence records fetched per species in the occurrence view.
    #[builder(default = DEFAULT_OCCURRENCE_LIMIT)]
    pub occurrence_limit: u32,

    /// Number of occurrence records fetched per species in the climate view. Only the
    /// first record's coordinates are used.
    #[builder(default = 1)]
    pub climate_occurrence_limit: u32,

    /// CSV with `Year` and `Mean Temperature (°C)` columns for the historical view.
    #[builder(default = PathBuf::from(DEFAULT_HISTORICAL_CSV), into)]
    pub historical_csv: PathBuf,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
