//! Defines GBIF occurrence records and the search page that wraps them.

use crate::types::location::LatLon;
use serde::{Deserialize, Serialize};

/// A single observed sighting of a species, as returned by the GBIF occurrence search.
///
/// GBIF records are sparse: depending on the publishing dataset any of these fields can
/// be absent, so all of them are optional.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub key: Option<i64>,
    pub scientific_name: Option<String>,
    /// Country name in English (e.g. "India").
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code (e.g. "IN").
    pub country_code: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub decimal_latitude: Option<f64>,
    pub decimal_longitude: Option<f64>,
    /// How the record was obtained (e.g. "HUMAN_OBSERVATION", "PRESERVED_SPECIMEN").
    pub basis_of_record: Option<String>,
}

impl Occurrence {
    /// Returns the record's coordinates when both latitude and longitude are present.
    pub fn coordinates(&self) -> Option<LatLon> {
        match (self.decimal_latitude, self.decimal_longitude) {
            (Some(lat), Some(lon)) => Some(LatLon(lat, lon)),
            _ => None,
        }
    }

    /// Like [`Occurrence::coordinates`], but also treats a latitude or longitude of
    /// exactly `0.0` as missing. GBIF uses zeros as a placeholder for unknown positions.
    pub fn known_coordinates(&self) -> Option<LatLon> {
        self.coordinates()
            .filter(|p| p.latitude() != 0.0 && p.longitude() != 0.0)
    }
}

/// One page of the occurrence search response.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OccurrencePage {
    #[serde(default)]
    pub end_of_records: bool,
    pub count: Option<u64>,
    #[serde(default)]
    pub results: Vec<Occurrence>,
}
