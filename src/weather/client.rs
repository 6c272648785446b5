//! Current-conditions lookups against the OpenWeatherMap API.

use crate::types::location::LatLon;
use crate::types::units::Units;
use crate::types::weather_sample::{CurrentWeatherResponse, WeatherSample};
use crate::weather::error::WeatherError;
use log::{info, warn};
use reqwest::Client;

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the OpenWeatherMap "current weather" endpoint.
///
/// Unlike the GBIF lookups, every failure here is an error: the caller decides how to
/// present it.
pub struct WeatherClient {
    base_url: String,
    api_key: Option<String>,
    units: Units,
    http: Client,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, units: Units) -> Self {
        Self::with_http_client(base_url, api_key, units, Client::new())
    }

    pub fn with_http_client(
        base_url: impl Into<String>,
        api_key: Option<String>,
        units: Units,
        http: Client,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key,
            units,
            http,
        }
    }

    pub fn units(&self) -> Units {
        self.units
    }

    /// Fetches the current temperature and conditions at a point.
    ///
    /// # Errors
    ///
    /// * [`WeatherError::MissingApiKey`] if the client has no API key; no request is sent.
    /// * [`WeatherError::NetworkRequest`] if the request cannot be sent.
    /// * [`WeatherError::HttpStatus`] for any non-2xx response (e.g. 401 for a bad key).
    /// * [`WeatherError::JsonParse`] if the body is not a current-weather document.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use biodiversity_explorer::{LatLon, Units, WeatherClient, WeatherError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), WeatherError> {
    /// let weather = WeatherClient::new(
    ///     "https://api.openweathermap.org/data/2.5",
    ///     std::env::var("OPENWEATHER_API_KEY").ok(),
    ///     Units::Metric,
    /// );
    /// let sample = weather.current(LatLon(-1.5, 35.1)).await?;
    /// println!("Maasai Mara: {}", sample.temperature_label());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn current(&self, location: LatLon) -> Result<WeatherSample, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;
        // The key travels in the query string, so only the bare endpoint is logged or
        // reported in errors.
        let url = format!("{}/weather", self.base_url);
        info!("Fetching current weather at {}", location);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", location.latitude().to_string()),
                ("lon", location.longitude().to_string()),
                ("appid", api_key.to_string()),
                ("units", self.units.query_value().to_string()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::NetworkRequest(url.clone(), e.without_url()))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error fetching weather at {}: {:?}", location, e.status());
                return Err(if let Some(status) = e.status() {
                    WeatherError::HttpStatus {
                        url,
                        status,
                        source: e.without_url(),
                    }
                } else {
                    WeatherError::NetworkRequest(url, e.without_url())
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherError::ResponseBody(url.clone(), e.without_url()))?;
        let parsed: CurrentWeatherResponse =
            serde_json::from_slice(&body).map_err(|e| WeatherError::JsonParse { url, source: e })?;

        Ok(parsed.into_sample(location, self.units))
    }
}
