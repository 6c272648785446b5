use crate::charts::Chart;
use crate::dashboard::page::Page;
use crate::dashboard::{Dashboard, OCCURRENCE_ERROR, SPECIES_ERROR, TEMPERATURE_ERROR};
use crate::frames::temperature_frame::temperature_comparison;
use crate::types::location::LatLon;
use crate::types::occurrence::Occurrence;
use log::warn;

impl Dashboard {
    pub(crate) async fn render_climate(&self, page: &mut Page, first: &str, second: &str) {
        page.subheader("🌡️ Climate Data (Temperature) for Selected Locations");

        if self.species_pair(first, second).await.is_none() {
            page.error(SPECIES_ERROR);
            return;
        }

        let limit = self.config.climate_occurrence_limit;
        let Some((first_records, second_records)) =
            self.occurrence_pair(first, second, limit).await
        else {
            page.error(OCCURRENCE_ERROR);
            return;
        };

        let first_location = record_location(&first_records);
        let second_location = record_location(&second_records);

        let first_temperature = match first_location {
            Some(location) => self.temperature_at(page, first, location).await,
            None => None,
        };
        let second_temperature = match second_location {
            Some(location) => self.temperature_at(page, second, location).await,
            None => None,
        };

        if first_location.is_none() || second_location.is_none() {
            return;
        }

        page.subheader("🌡️ Species Preferred Temperature for Survival");
        match temperature_comparison(first, first_temperature, second, second_temperature) {
            Ok(Some(frame)) => page.chart(Chart::temperature_comparison(frame, self.weather.units())),
            Ok(None) => page.error(TEMPERATURE_ERROR),
            Err(e) => {
                warn!("Failed to build temperature comparison: {:?}", e);
                page.error(TEMPERATURE_ERROR);
            }
        }
    }

    /// Looks up the current temperature at `location` and reports it on the page.
    async fn temperature_at(&self, page: &mut Page, species: &str, location: LatLon) -> Option<f64> {
        match self.weather.current(location).await {
            Ok(sample) => {
                page.text(format!(
                    "Temperature at {} location {}: {}",
                    species,
                    location,
                    sample.temperature_label()
                ));
                Some(sample.temperature)
            }
            Err(e) => {
                warn!("Weather lookup for '{}' at {} failed: {:?}", species, location, e);
                page.error(format!("Error fetching climate data: {}", e));
                page.error(format!("Could not fetch climate data for {}", species));
                None
            }
        }
    }
}

/// Coordinates of the first record, if it has a non-zero latitude and longitude.
fn record_location(records: &[Occurrence]) -> Option<LatLon> {
    records.first().and_then(Occurrence::known_coordinates)
}
