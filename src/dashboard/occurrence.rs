use crate::charts::Chart;
use crate::dashboard::page::Page;
use crate::dashboard::{Dashboard, OCCURRENCE_ERROR, SPECIES_ERROR};
use crate::frames::error::FrameError;
use crate::frames::occurrence_frame::{
    compare_year_counts, map_points, occurrence_frame, year_counts,
};
use crate::types::occurrence::Occurrence;
use crate::types::species::SpeciesMatch;
use log::warn;

impl Dashboard {
    pub(crate) async fn render_occurrences(&self, page: &mut Page, first: &str, second: &str) {
        let Some((first_info, second_info)) = self.species_pair(first, second).await else {
            page.error(SPECIES_ERROR);
            return;
        };

        species_section(page, first, &first_info);
        species_section(page, second, &second_info);

        page.subheader("📍 Occurrence Data Comparison");

        let limit = self.config.occurrence_limit;
        let Some((first_records, second_records)) =
            self.occurrence_pair(first, second, limit).await
        else {
            page.error(OCCURRENCE_ERROR);
            return;
        };

        if let Err(e) = occurrence_sections(page, first, &first_records, second, &second_records)
        {
            warn!("Failed to prepare occurrence tables: {:?}", e);
            page.error(format!("Could not process occurrence data: {}", e));
        }
    }
}

fn species_section(page: &mut Page, name: &str, info: &SpeciesMatch) {
    page.subheader(format!("🔎 Species Information: {}", name));
    for line in info.summary_lines() {
        page.markdown(line);
    }
}

fn occurrence_sections(
    page: &mut Page,
    first: &str,
    first_records: &[Occurrence],
    second: &str,
    second_records: &[Occurrence],
) -> Result<(), FrameError> {
    let first_frame = occurrence_frame(first_records)?;
    let second_frame = occurrence_frame(second_records)?;

    let comparison = compare_year_counts(
        &year_counts(&first_frame)?,
        &year_counts(&second_frame)?,
        first,
        second,
    )?;

    page.subheader(format!("Occurrence Data for {}", first));
    page.table(first_frame);
    page.subheader(format!("Occurrence Data for {}", second));
    page.table(second_frame);

    page.subheader("📈 Occurrences Over Time Comparison");
    page.chart(Chart::occurrences_over_time(comparison));

    for (name, records) in [(first, first_records), (second, second_records)] {
        let points = map_points(records)?;
        if points.height() > 0 {
            page.subheader(format!("📍 Occurrences Map for {}", name));
            page.chart(Chart::occurrence_map(points, name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::charts::ChartKind;
    use crate::dashboard::test_support::*;
    use crate::dashboard::{OCCURRENCE_ERROR, SPECIES_ERROR};
    use crate::frames::occurrence_frame::YEAR;
    use crate::{Dashboard, ExplorerConfig, View};
    use mockito::Matcher;

    const TIGER_RECORDS: &str = r#"{"results": [
        {"country": "India", "year": 2020, "decimalLatitude": 26.6, "decimalLongitude": 80.1},
        {"country": "Nepal", "decimalLatitude": 27.5, "decimalLongitude": 84.3},
        {"country": "India", "year": 2021}
    ]}"#;

    const ELEPHANT_RECORDS: &str = r#"{"results": [
        {"country": "Kenya", "year": 2019},
        {"country": "Botswana", "year": 2021}
    ]}"#;

    fn dashboard(server: &mockito::ServerGuard) -> Dashboard {
        Dashboard::new(
            ExplorerConfig::builder()
                .gbif_base_url(server.url())
                .occurrence_limit(3)
                .build(),
        )
    }

    #[tokio::test]
    async fn test_occurrence_view_full_page() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        let _tiger = mock_species(&mut server, "Panthera tigris", TIGER).await;
        let _elephant = mock_species(&mut server, "Loxodonta africana", ELEPHANT).await;
        let _tiger_occ = mock_occurrences(&mut server, "Panthera tigris", 200, TIGER_RECORDS).await;
        let _elephant_occ =
            mock_occurrences(&mut server, "Loxodonta africana", 200, ELEPHANT_RECORDS).await;

        let page = dashboard(&server)
            .render(View::Occurrence, "Panthera tigris", "Loxodonta africana")
            .await;

        assert_eq!(page.errors().count(), 0);
        let subheaders: Vec<_> = page.subheaders().collect();
        assert_eq!(
            subheaders,
            [
                "🔎 Species Information: Panthera tigris",
                "🔎 Species Information: Loxodonta africana",
                "📍 Occurrence Data Comparison",
                "Occurrence Data for Panthera tigris",
                "Occurrence Data for Loxodonta africana",
                "📈 Occurrences Over Time Comparison",
                "📍 Occurrences Map for Panthera tigris",
            ]
        );

        // The tiger record without a year is dropped from its table.
        let heights: Vec<usize> = page.tables().map(|t| t.height()).collect();
        assert_eq!(heights, [2, 2]);

        let charts: Vec<_> = page.charts().collect();
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].kind, ChartKind::OccurrencesOverTime);
        let years: Vec<Option<i32>> = charts[0].data.column(YEAR)?.i32()?.into_iter().collect();
        assert_eq!(years, [Some(2019), Some(2020), Some(2021)]);
        assert_eq!(
            charts[1].kind,
            ChartKind::OccurrenceMap {
                species: "Panthera tigris".to_string()
            }
        );
        assert_eq!(charts[1].data.height(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_occurrence_view_shows_description_only_when_present() {
        let mut server = mockito::Server::new_async().await;
        let _tiger = mock_species(&mut server, "Panthera tigris", TIGER).await;
        let _elephant = mock_species(&mut server, "Loxodonta africana", ELEPHANT).await;
        let _occ = server
            .mock("GET", "/occurrence/search")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let page = dashboard(&server)
            .render(View::Occurrence, "Panthera tigris", "Loxodonta africana")
            .await;

        let descriptions: Vec<_> = page
            .blocks
            .iter()
            .filter_map(|b| match b {
                crate::dashboard::page::Block::Markdown(text)
                    if text.starts_with("**Description:**") =>
                {
                    Some(text.clone())
                }
                _ => None,
            })
            .collect();
        assert_eq!(descriptions, ["**Description:** African bush elephant"]);
        assert_eq!(page.errors().collect::<Vec<_>>(), [OCCURRENCE_ERROR]);
        assert_eq!(page.tables().count(), 0);
    }

    #[tokio::test]
    async fn test_occurrence_view_species_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _tiger = mock_species(&mut server, "Panthera tigris", TIGER).await;
        let _missing = server
            .mock("GET", "/species/match")
            .match_query(Matcher::UrlEncoded("name".into(), "Unknown beast".into()))
            .with_status(404)
            .create_async()
            .await;
        let occurrences = server
            .mock("GET", "/occurrence/search")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let page = dashboard(&server)
            .render(View::Occurrence, "Panthera tigris", "Unknown beast")
            .await;

        assert_eq!(page.errors().collect::<Vec<_>>(), [SPECIES_ERROR]);
        assert_eq!(page.subheaders().count(), 0);
        occurrences.assert_async().await;
    }

    #[tokio::test]
    async fn test_occurrence_view_unreadable_species_response() {
        let mut server = mockito::Server::new_async().await;
        let _tiger = mock_species(&mut server, "Panthera tigris", TIGER).await;
        let _elephant = mock_species(&mut server, "Loxodonta africana", "not json").await;
        let occurrences = server
            .mock("GET", "/occurrence/search")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let page = dashboard(&server)
            .render(View::Occurrence, "Panthera tigris", "Loxodonta africana")
            .await;

        assert_eq!(page.errors().collect::<Vec<_>>(), [SPECIES_ERROR]);
        occurrences.assert_async().await;
    }

    #[tokio::test]
    async fn test_occurrence_view_gbif_unreachable() -> Result<(), Box<dyn std::error::Error>> {
        // Bind a port, then free it so nothing is listening there.
        let unused = std::net::TcpListener::bind("127.0.0.1:0")?.local_addr()?;
        let dashboard = Dashboard::new(
            ExplorerConfig::builder()
                .gbif_base_url(format!("http://{}", unused))
                .build(),
        );

        let page = dashboard
            .render(View::Occurrence, "Panthera tigris", "Loxodonta africana")
            .await;

        assert_eq!(page.errors().collect::<Vec<_>>(), [SPECIES_ERROR]);
        Ok(())
    }

    #[tokio::test]
    async fn test_occurrence_view_unreadable_occurrence_response() {
        let mut server = mockito::Server::new_async().await;
        let _tiger = mock_species(&mut server, "Panthera tigris", TIGER).await;
        let _elephant = mock_species(&mut server, "Loxodonta africana", ELEPHANT).await;
        let _tiger_occ =
            mock_occurrences(&mut server, "Panthera tigris", 200, r#"{"results": "#).await;

        let page = dashboard(&server)
            .render(View::Occurrence, "Panthera tigris", "Loxodonta africana")
            .await;

        assert_eq!(page.errors().collect::<Vec<_>>(), [OCCURRENCE_ERROR]);
        assert_eq!(page.tables().count(), 0);
    }

    #[tokio::test]
    async fn test_occurrence_view_empty_results_are_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _tiger = mock_species(&mut server, "Panthera tigris", TIGER).await;
        let _elephant = mock_species(&mut server, "Loxodonta africana", ELEPHANT).await;
        let _tiger_occ = mock_occurrences(&mut server, "Panthera tigris", 200, TIGER_RECORDS).await;
        let _elephant_occ =
            mock_occurrences(&mut server, "Loxodonta africana", 200, r#"{"results": []}"#).await;

        let page = dashboard(&server)
            .render(View::Occurrence, "Panthera tigris", "Loxodonta africana")
            .await;

        assert_eq!(page.errors().collect::<Vec<_>>(), [OCCURRENCE_ERROR]);
        assert_eq!(page.charts().count(), 0);
    }
}
