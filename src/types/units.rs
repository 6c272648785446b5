//! Unit systems supported by the OpenWeatherMap API.

use std::fmt;
use std::str::FromStr;

/// The unit system requested from the weather API.
///
/// OpenWeatherMap returns Kelvin unless told otherwise; the dashboard asks for
/// [`Units::Metric`] by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    /// Celsius.
    #[default]
    Metric,
    /// Fahrenheit.
    Imperial,
    /// Kelvin.
    Standard,
}

impl Units {
    /// The value sent as the `units` query parameter.
    pub(crate) fn query_value(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    /// Suffix appended to temperatures in this unit system.
    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_value())
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            "standard" => Ok(Units::Standard),
            other => Err(format!(
                "unknown unit system '{}', expected metric, imperial or standard",
                other
            )),
        }
    }
}
