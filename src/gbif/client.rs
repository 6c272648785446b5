//! Thin wrapper around the two GBIF endpoints the dashboard uses: species name matching
//! and occurrence search.

use crate::gbif::error::GbifError;
use crate::types::occurrence::{Occurrence, OccurrencePage};
use crate::types::species::SpeciesMatch;
use bon::bon;
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const DEFAULT_GBIF_BASE_URL: &str = "https://api.gbif.org/v1";

/// Number of occurrence records requested when no limit is given.
pub const DEFAULT_OCCURRENCE_LIMIT: u32 = 50;

/// Client for the GBIF species and occurrence APIs.
///
/// Both lookups treat a non-200 response as "nothing found" and return `Ok(None)`;
/// only transport failures and undecodable bodies are errors.
pub struct GbifClient {
    base_url: String,
    http: Client,
}

#[bon]
impl GbifClient {
    /// Creates a client against the given base URL (e.g. `https://api.gbif.org/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Client::new())
    }

    /// Creates a client that reuses an existing `reqwest` client.
    pub fn with_http_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// Finds the best taxonomic match for a free-text species name.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(match))` on a 200 response. A name GBIF cannot match still returns a
    ///   [`SpeciesMatch`], with `match_type` set to `NONE` and no ranks.
    /// * `Ok(None)` when GBIF answers with any other status.
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::NetworkRequest`] if the request cannot be sent, and
    /// [`GbifError::JsonParse`] if a 200 body is not a species match.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use biodiversity_explorer::{GbifClient, GbifError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), GbifError> {
    /// let gbif = GbifClient::new("https://api.gbif.org/v1");
    /// if let Some(tiger) = gbif.species_match("Panthera tigris").await? {
    ///     println!("{:?} belongs to {:?}", tiger.scientific_name, tiger.family);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn species_match(&self, name: &str) -> Result<Option<SpeciesMatch>, GbifError> {
        let url = format!("{}/species/match", self.base_url);
        info!("Looking up species '{}'", name);
        self.get_json(&url, &[("name", name.to_string())]).await
    }

    /// Fetches up to `limit` occurrence records for a scientific name.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.species(&str)`: **Required.** The scientific name to search for.
    /// * `.limit(u32)`: Optional. Maximum number of records. Defaults to `50`.
    ///
    /// # Returns
    ///
    /// `Ok(Some(records))` on a 200 response (the list may be empty), `Ok(None)` on any
    /// other status.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use biodiversity_explorer::{GbifClient, GbifError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), GbifError> {
    /// let gbif = GbifClient::new("https://api.gbif.org/v1");
    /// let records = gbif
    ///     .occurrences()
    ///     .species("Loxodonta africana")
    ///     .limit(10)
    ///     .call()
    ///     .await?
    ///     .unwrap_or_default();
    /// assert!(records.len() <= 10);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn occurrences(
        &self,
        species: &str,
        limit: Option<u32>,
    ) -> Result<Option<Vec<Occurrence>>, GbifError> {
        let limit = limit.unwrap_or(DEFAULT_OCCURRENCE_LIMIT);
        let url = format!("{}/occurrence/search", self.base_url);
        info!("Searching up to {} occurrences of '{}'", limit, species);

        let page: Option<OccurrencePage> = self
            .get_json(
                &url,
                &[
                    ("scientificName", species.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(page.map(|page| {
            debug!(
                "Received {} of {:?} occurrences for '{}' (end of records: {})",
                page.results.len(),
                page.count,
                species,
                page.end_of_records
            );
            page.results
        }))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, GbifError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| GbifError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!("GBIF returned status {} for {}", status, url);
            return Ok(None);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GbifError::ResponseBody(url.to_string(), e))?;
        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|e| GbifError::JsonParse {
                url: url.to_string(),
                source: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_species_match_ok() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/species/match")
            .match_query(Matcher::UrlEncoded(
                "name".into(),
                "Panthera tigris".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"usageKey": 5219416, "scientificName": "Panthera tigris (Linnaeus, 1758)",
                    "matchType": "EXACT", "kingdom": "Animalia", "class": "Mammalia"}"#,
            )
            .create_async()
            .await;

        let gbif = GbifClient::new(server.url());
        let species = gbif.species_match("Panthera tigris").await?;

        mock.assert_async().await;
        let species = species.ok_or("expected a species match")?;
        assert_eq!(species.key, Some(5219416));
        assert_eq!(species.class.as_deref(), Some("Mammalia"));
        Ok(())
    }

    #[tokio::test]
    async fn test_species_match_non_200_is_absent() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/species/match")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let gbif = GbifClient::new(server.url());
        assert!(gbif.species_match("Panthera tigris").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_species_match_bad_body_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/species/match")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let gbif = GbifClient::new(server.url());
        let result = gbif.species_match("Panthera tigris").await;
        assert!(matches!(result, Err(GbifError::JsonParse { .. })));
    }

    #[tokio::test]
    async fn test_occurrences_sends_name_and_limit() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/occurrence/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("scientificName".into(), "Loxodonta africana".into()),
                Matcher::UrlEncoded("limit".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"offset": 0, "limit": 2, "endOfRecords": false, "count": 9000,
                    "results": [
                        {"country": "Kenya", "year": 2021, "decimalLatitude": -1.5, "decimalLongitude": 35.1},
                        {"country": "Botswana", "year": 2019}
                    ]}"#,
            )
            .create_async()
            .await;

        let gbif = GbifClient::new(server.url());
        let records = gbif
            .occurrences()
            .species("Loxodonta africana")
            .limit(2)
            .call()
            .await?
            .ok_or("expected occurrences")?;

        mock.assert_async().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country.as_deref(), Some("Kenya"));
        assert_eq!(records[1].decimal_latitude, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_occurrences_default_limit() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/occurrence/search")
            .match_query(Matcher::UrlEncoded("limit".into(), "50".into()))
            .with_status(200)
            .with_body(r#"{"results": []}"#)
            .create_async()
            .await;

        let gbif = GbifClient::new(server.url());
        let records = gbif.occurrences().species("Panthera tigris").call().await?;

        mock.assert_async().await;
        assert_eq!(records, Some(Vec::new()));
        Ok(())
    }

    #[tokio::test]
    async fn test_occurrences_non_200_is_absent() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/occurrence/search")
            .match_query(Matcher::Any)
            .with_status(400)
            .create_async()
            .await;

        let gbif = GbifClient::new(server.url());
        let records = gbif.occurrences().species("Panthera tigris").call().await?;
        assert!(records.is_none());
        Ok(())
    }
}
