//! This module provides the `Dashboard`, which renders one of the three views into a
//! [`Page`].
//!
//! Views run their lookups one after the other. Every failure becomes an error block on
//! the page and stops that section; rendering a view never returns an error.

mod climate;
mod historical;
mod occurrence;
pub mod page;

use crate::config::ExplorerConfig;
use crate::gbif::client::GbifClient;
use crate::types::occurrence::Occurrence;
use crate::types::species::SpeciesMatch;
use crate::types::view::View;
use crate::weather::client::WeatherClient;
use log::{info, warn};
use page::Page;
use reqwest::Client;

pub(crate) const SPECIES_ERROR: &str = "Could not fetch species information for one or both species.";
pub(crate) const OCCURRENCE_ERROR: &str = "Could not retrieve occurrence data for one or both species.";
pub(crate) const TEMPERATURE_ERROR: &str = "Unable to fetch temperature data for one or both species.";

/// The species compared when the user does not enter any.
pub const DEFAULT_FIRST_SPECIES: &str = "Panthera tigris";
pub const DEFAULT_SECOND_SPECIES: &str = "Loxodonta africana";

/// Renders dashboard views from live GBIF and OpenWeatherMap data.
///
/// # Examples
///
/// ```no_run
/// use biodiversity_explorer::{Dashboard, ExplorerConfig, View};
///
/// # #[tokio::main]
/// # async fn main() {
/// let dashboard = Dashboard::new(ExplorerConfig::default());
/// let page = dashboard
///     .render(View::Occurrence, "Panthera tigris", "Loxodonta africana")
///     .await;
///
/// for error in page.errors() {
///     eprintln!("{}", error);
/// }
/// # }
/// ```
pub struct Dashboard {
    config: ExplorerConfig,
    gbif: GbifClient,
    weather: WeatherClient,
}

impl Dashboard {
    pub fn new(config: ExplorerConfig) -> Self {
        let http = Client::new();
        Self {
            gbif: GbifClient::with_http_client(config.gbif_base_url.clone(), http.clone()),
            weather: WeatherClient::with_http_client(
                config.weather_base_url.clone(),
                config.weather_api_key.clone(),
                config.units,
                http,
            ),
            config,
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Renders the selected view for two species.
    ///
    /// The species names are ignored by [`View::Historical`].
    pub async fn render(&self, view: View, first_species: &str, second_species: &str) -> Page {
        info!("Rendering view '{}'", view);
        let mut page = Page::new(view.title());
        match view {
            View::Historical => self.render_historical(&mut page).await,
            View::Occurrence => {
                self.render_occurrences(&mut page, first_species, second_species)
                    .await
            }
            View::Climate => {
                self.render_climate(&mut page, first_species, second_species)
                    .await
            }
        }
        page
    }

    /// Looks up both species in order. Returns `None` if either lookup comes back empty
    /// or fails.
    async fn species_pair(
        &self,
        first: &str,
        second: &str,
    ) -> Option<(SpeciesMatch, SpeciesMatch)> {
        let first_match = self.species(first).await?;
        let second_match = self.species(second).await?;
        Some((first_match, second_match))
    }

    async fn species(&self, name: &str) -> Option<SpeciesMatch> {
        match self.gbif.species_match(name).await {
            Ok(found) => found,
            Err(e) => {
                warn!("Species lookup for '{}' failed: {:?}", name, e);
                None
            }
        }
    }

    /// Fetches occurrences for both species in order. Returns `None` if either search
    /// is absent, empty or fails.
    async fn occurrence_pair(
        &self,
        first: &str,
        second: &str,
        limit: u32,
    ) -> Option<(Vec<Occurrence>, Vec<Occurrence>)> {
        let first_records = self.occurrences(first, limit).await?;
        let second_records = self.occurrences(second, limit).await?;
        Some((first_records, second_records))
    }

    async fn occurrences(&self, name: &str, limit: u32) -> Option<Vec<Occurrence>> {
        match self.gbif.occurrences().species(name).limit(limit).call().await {
            Ok(Some(records)) if !records.is_empty() => Some(records),
            Ok(_) => {
                warn!("No occurrences returned for '{}'", name);
                None
            }
            Err(e) => {
                warn!("Occurrence search for '{}' failed: {:?}", name, e);
                None
            }
        }
    }
}
