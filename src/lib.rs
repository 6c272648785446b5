//! Compare two species side by side: their GBIF taxonomy and occurrence records, the
//! current temperature where they were last seen, and a historical temperature chart
//! from a local CSV.

pub mod charts;
mod config;
mod dashboard;
mod error;
pub mod frames;
mod gbif;
mod types;
mod utils;
mod weather;

pub use config::{ExplorerConfig, DEFAULT_HISTORICAL_CSV};
pub use error::ExplorerError;
pub use utils::{ensure_output_dir_exists, get_output_dir};

pub use charts::{Chart, ChartKind, ChartTarget};
pub use dashboard::page::{Block, Page};
pub use dashboard::{Dashboard, DEFAULT_FIRST_SPECIES, DEFAULT_SECOND_SPECIES};

pub use gbif::client::{GbifClient, DEFAULT_GBIF_BASE_URL, DEFAULT_OCCURRENCE_LIMIT};
pub use gbif::error::GbifError;
pub use weather::client::{WeatherClient, DEFAULT_WEATHER_BASE_URL};
pub use weather::error::WeatherError;

pub use frames::error::FrameError;

pub use types::location::LatLon;
pub use types::occurrence::Occurrence;
pub use types::species::{SpeciesMatch, TaxonomicRank, NOT_AVAILABLE};
pub use types::units::Units;
pub use types::view::View;
pub use types::weather_sample::WeatherSample;
