//! Chart definitions for the dashboard, drawn with `plotlars`.
//!
//! A [`Chart`] only holds its data and what kind of chart it is; nothing is drawn until
//! [`Chart::render`] is called. This keeps dashboard pages cheap to build and test.

use crate::frames::occurrence_frame::{MAP_LATITUDE, MAP_LONGITUDE, YEAR};
use crate::frames::temperature_frame::{
    AVERAGE_TEMPERATURE, SPECIES, TEMPERATURE, YEAR as HISTORICAL_YEAR,
};
use crate::types::units::Units;
use log::info;
use plotlars::{BarPlot, Legend, Line, LinePlot, Plot, Rgb, ScatterPlot, Shape, Text};
use polars::prelude::DataFrame;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const BLUE: Rgb = Rgb(31, 119, 180);
const RED: Rgb = Rgb(214, 39, 40);

/// What a chart shows; decides which plot type and columns are used.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    /// Line chart of `Year` against `Average Temperature (°C)`.
    HistoricalTemperature,
    /// Two lines of occurrences per year; the series are the frame's non-`Year` columns.
    OccurrencesOverTime,
    /// Longitude/latitude scatter of one species' records.
    OccurrenceMap { species: String },
    /// One bar per species with its current temperature.
    TemperatureComparison { units: Units },
}

/// Where rendered charts go.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartTarget {
    /// Open each chart in the default browser.
    Browser,
    /// Write each chart to `<dir>/<slug>.html`.
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub data: DataFrame,
}

enum BuiltPlot {
    Line(LinePlot),
    Bar(BarPlot),
    Scatter(ScatterPlot),
}

impl Chart {
    pub fn historical_temperature(data: DataFrame) -> Self {
        Self {
            kind: ChartKind::HistoricalTemperature,
            title: "Average Temperature Per Year".to_string(),
            data,
        }
    }

    pub fn occurrences_over_time(data: DataFrame) -> Self {
        Self {
            kind: ChartKind::OccurrencesOverTime,
            title: "Occurrences Over Time Comparison".to_string(),
            data,
        }
    }

    pub fn occurrence_map(data: DataFrame, species: &str) -> Self {
        Self {
            kind: ChartKind::OccurrenceMap {
                species: species.to_string(),
            },
            title: format!("Occurrences Map for {}", species),
            data,
        }
    }

    pub fn temperature_comparison(data: DataFrame, units: Units) -> Self {
        Self {
            kind: ChartKind::TemperatureComparison { units },
            title: "Species Preferred Temperature for Survival".to_string(),
            data,
        }
    }

    /// File-name friendly version of the title, e.g. `occurrences-map-for-panthera-tigris`.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for c in self.title.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        slug.trim_end_matches('-').to_string()
    }

    /// Draws the chart to the given target.
    ///
    /// Returns the path of the written file for [`ChartTarget::Directory`], `None` when
    /// the chart was opened in the browser.
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` if the HTML file cannot be written, for
    /// example because the directory does not exist.
    pub fn render(&self, target: &ChartTarget) -> io::Result<Option<PathBuf>> {
        let plot = self.build();
        match target {
            ChartTarget::Browser => {
                info!("Opening chart '{}' in browser", self.title);
                plot.show();
                Ok(None)
            }
            ChartTarget::Directory(dir) => {
                let path = self.output_path(dir);
                info!("Writing chart '{}' to {:?}", self.title, path);
                fs::write(&path, plot.to_html())?;
                Ok(Some(path))
            }
        }
    }

    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.html", self.slug()))
    }

    fn build(&self) -> BuiltPlot {
        match &self.kind {
            ChartKind::HistoricalTemperature => BuiltPlot::Line(
                LinePlot::builder()
                    .data(&self.data)
                    .x(HISTORICAL_YEAR)
                    .y(AVERAGE_TEMPERATURE)
                    .colors(vec![BLUE])
                    .lines(vec![Line::Solid])
                    .with_shape(true)
                    .shapes(vec![Shape::Circle])
                    .plot_title(Text::from(self.title.as_str()).size(18))
                    .x_title("Year")
                    .y_title("Average Temperature (°C)")
                    .build(),
            ),
            ChartKind::OccurrencesOverTime => {
                let series: Vec<String> = self
                    .data
                    .get_column_names()
                    .iter()
                    .map(|name| name.to_string())
                    .filter(|name| name != YEAR)
                    .collect();
                let (first, rest) = match series.split_first() {
                    Some((first, rest)) => (first.as_str(), rest),
                    None => (YEAR, &[][..]),
                };
                BuiltPlot::Line(
                    LinePlot::builder()
                        .data(&self.data)
                        .x(YEAR)
                        .y(first)
                        .additional_lines(rest.iter().map(String::as_str).collect())
                        .colors(vec![BLUE, RED])
                        .with_shape(true)
                        .shapes(vec![Shape::Circle, Shape::Circle])
                        .plot_title(Text::from(self.title.as_str()).size(18))
                        .legend(&Legend::new().x(0.05).y(0.95))
                        .x_title("Year")
                        .y_title("Number of Occurrences")
                        .build(),
                )
            }
            ChartKind::OccurrenceMap { .. } => BuiltPlot::Scatter(
                ScatterPlot::builder()
                    .data(&self.data)
                    .x(MAP_LONGITUDE)
                    .y(MAP_LATITUDE)
                    .opacity(0.7)
                    .size(8)
                    .plot_title(Text::from(self.title.as_str()).size(18))
                    .x_title("Longitude")
                    .y_title("Latitude")
                    .build(),
            ),
            ChartKind::TemperatureComparison { units } => BuiltPlot::Bar(
                BarPlot::builder()
                    .data(&self.data)
                    .labels(SPECIES)
                    .values(TEMPERATURE)
                    .group(SPECIES)
                    .colors(vec![BLUE, RED])
                    .plot_title(Text::from(self.title.as_str()).size(18))
                    .x_title("Species")
                    .y_title(format!("Temperature ({})", units.temperature_suffix()).as_str())
                    .build(),
            ),
        }
    }
}

impl BuiltPlot {
    fn show(self) {
        match self {
            BuiltPlot::Line(plot) => plot.plot(),
            BuiltPlot::Bar(plot) => plot.plot(),
            BuiltPlot::Scatter(plot) => plot.plot(),
        }
    }

    fn to_html(&self) -> String {
        match self {
            BuiltPlot::Line(plot) => plot.to_html(),
            BuiltPlot::Bar(plot) => plot.to_html(),
            BuiltPlot::Scatter(plot) => plot.to_html(),
        }
    }
}
