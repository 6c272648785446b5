//! Defines the taxonomic match returned by the GBIF species matching endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for any field the species API did not return.
pub const NOT_AVAILABLE: &str = "N/A";

/// The best taxonomic match GBIF found for a free-text species name.
///
/// All fields are taken verbatim from the API response and every one of them may be
/// missing: a `matchType` of `NONE` still comes back as a successful response, just
/// without any ranks.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesMatch {
    /// The GBIF usage key. The match endpoint calls it `usageKey`, the species endpoint `key`.
    #[serde(alias = "usageKey")]
    pub key: Option<i64>,
    /// Full scientific name including authorship (e.g. "Panthera tigris (Linnaeus, 1758)").
    pub scientific_name: Option<String>,
    /// Scientific name without authorship.
    pub canonical_name: Option<String>,
    /// The rank of the matched name (e.g. "SPECIES").
    pub rank: Option<String>,
    /// Taxonomic status (e.g. "ACCEPTED", "SYNONYM").
    pub status: Option<String>,
    /// Match confidence between 0 and 100.
    pub confidence: Option<u8>,
    /// How the name was matched: `EXACT`, `FUZZY`, `HIGHERRANK` or `NONE`.
    pub match_type: Option<String>,
    pub kingdom: Option<String>,
    pub phylum: Option<String>,
    #[serde(rename = "class", alias = "clazz")]
    pub class: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub description: Option<String>,
}

/// One level of the biological classification carried by a [`SpeciesMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxonomicRank {
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
}

impl TaxonomicRank {
    /// All ranks from the broadest to the narrowest.
    pub const ALL: [TaxonomicRank; 6] = [
        TaxonomicRank::Kingdom,
        TaxonomicRank::Phylum,
        TaxonomicRank::Class,
        TaxonomicRank::Order,
        TaxonomicRank::Family,
        TaxonomicRank::Genus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaxonomicRank::Kingdom => "Kingdom",
            TaxonomicRank::Phylum => "Phylum",
            TaxonomicRank::Class => "Class",
            TaxonomicRank::Order => "Order",
            TaxonomicRank::Family => "Family",
            TaxonomicRank::Genus => "Genus",
        }
    }
}

impl fmt::Display for TaxonomicRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl SpeciesMatch {
    /// Returns the name at the given rank, if the match carries one.
    pub fn rank_name(&self, rank: TaxonomicRank) -> Option<&str> {
        let value = match rank {
            TaxonomicRank::Kingdom => &self.kingdom,
            TaxonomicRank::Phylum => &self.phylum,
            TaxonomicRank::Class => &self.class,
            TaxonomicRank::Order => &self.order,
            TaxonomicRank::Family => &self.family,
            TaxonomicRank::Genus => &self.genus,
        };
        value.as_deref()
    }

    /// `true` when GBIF answered but could not match the name to any taxon.
    pub fn is_no_match(&self) -> bool {
        self.match_type.as_deref() == Some("NONE")
    }

    /// The lines shown in a species information section, with `N/A` for missing values.
    ///
    /// The description line is only included when the API returned one.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(9);
        lines.push(format!(
            "**Scientific Name:** {}",
            self.scientific_name.as_deref().unwrap_or(NOT_AVAILABLE)
        ));
        for rank in TaxonomicRank::ALL {
            lines.push(format!(
                "**{}:** {}",
                rank,
                self.rank_name(rank).unwrap_or(NOT_AVAILABLE)
            ));
        }
        lines.push(format!(
            "**Species Key:** {}",
            self.key
                .map(|k| k.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        ));
        if let Some(description) = &self.description {
            lines.push(format!("**Description:** {}", description));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_match_response() -> Result<(), serde_json::Error> {
        let body = r#"{
            "usageKey": 5219416,
            "scientificName": "Panthera tigris (Linnaeus, 1758)",
            "canonicalName": "Panthera tigris",
            "rank": "SPECIES",
            "status": "ACCEPTED",
            "confidence": 99,
            "matchType": "EXACT",
            "kingdom": "Animalia",
            "phylum": "Chordata",
            "order": "Carnivora",
            "family": "Felidae",
            "genus": "Panthera",
            "species": "Panthera tigris",
            "class": "Mammalia"
        }"#;
        let species: SpeciesMatch = serde_json::from_str(body)?;

        assert_eq!(species.key, Some(5219416));
        assert_eq!(species.rank_name(TaxonomicRank::Class), Some("Mammalia"));
        assert_eq!(species.rank_name(TaxonomicRank::Genus), Some("Panthera"));
        assert!(!species.is_no_match());
        assert!(species.description.is_none());
        Ok(())
    }

    #[test]
    fn test_no_match_has_no_ranks() -> Result<(), serde_json::Error> {
        let body = r#"{"confidence": 100, "matchType": "NONE", "synonym": false}"#;
        let species: SpeciesMatch = serde_json::from_str(body)?;

        assert!(species.is_no_match());
        assert!(TaxonomicRank::ALL
            .iter()
            .all(|rank| species.rank_name(*rank).is_none()));
        Ok(())
    }

    #[test]
    fn test_summary_lines_fill_missing_values() {
        let species = SpeciesMatch {
            scientific_name: Some("Loxodonta africana (Blumenbach, 1797)".to_string()),
            kingdom: Some("Animalia".to_string()),
            ..Default::default()
        };
        let lines = species.summary_lines();

        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[0],
            "**Scientific Name:** Loxodonta africana (Blumenbach, 1797)"
        );
        assert_eq!(lines[1], "**Kingdom:** Animalia");
        assert_eq!(lines[2], "**Phylum:** N/A");
        assert_eq!(lines[7], "**Species Key:** N/A");
    }

    #[test]
    fn test_summary_lines_include_description() {
        let species = SpeciesMatch {
            key: Some(2435099),
            description: Some("Largest living land animal.".to_string()),
            ..Default::default()
        };
        let lines = species.summary_lines();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[7], "**Species Key:** 2435099");
        assert_eq!(lines[8], "**Description:** Largest living land animal.");
    }
}
