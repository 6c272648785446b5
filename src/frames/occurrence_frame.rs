//! Turns GBIF occurrence records into display tables and per-year counts.

use crate::frames::error::FrameError;
use crate::types::occurrence::Occurrence;
use polars::prelude::*;
use std::collections::BTreeMap;

pub const COUNTRY: &str = "Country";
pub const YEAR: &str = "Year";
pub const LATITUDE: &str = "Latitude";
pub const LONGITUDE: &str = "Longitude";

/// Column names of the frame returned by [`map_points`].
pub const MAP_LATITUDE: &str = "latitude";
pub const MAP_LONGITUDE: &str = "longitude";

const COUNT: &str = "count";

/// Builds the occurrence table shown for one species.
///
/// The frame has the columns `Country`, `Year`, `Latitude` and `Longitude`, in that
/// order. Records without a year are dropped; records missing any of the other fields
/// are kept with nulls.
pub fn occurrence_frame(records: &[Occurrence]) -> Result<DataFrame, FrameError> {
    let countries: Vec<Option<&str>> = records.iter().map(|r| r.country.as_deref()).collect();
    let years: Vec<Option<i32>> = records.iter().map(|r| r.year).collect();
    let latitudes: Vec<Option<f64>> = records.iter().map(|r| r.decimal_latitude).collect();
    let longitudes: Vec<Option<f64>> = records.iter().map(|r| r.decimal_longitude).collect();

    let frame = df!(
        COUNTRY => countries,
        YEAR => years,
        LATITUDE => latitudes,
        LONGITUDE => longitudes
    )?;

    Ok(frame.lazy().filter(col(YEAR).is_not_null()).collect()?)
}

/// Counts occurrences per year in a frame produced by [`occurrence_frame`].
pub fn year_counts(frame: &DataFrame) -> Result<BTreeMap<i32, u32>, FrameError> {
    let counts = frame
        .clone()
        .lazy()
        .filter(col(YEAR).is_not_null())
        .group_by([col(YEAR)])
        .agg([len().cast(DataType::UInt32).alias(COUNT)])
        .select([col(YEAR).cast(DataType::Int32), col(COUNT)])
        .collect()?;

    let years = counts.column(YEAR)?.i32()?;
    let totals = counts.column(COUNT)?.u32()?;

    Ok(years
        .into_iter()
        .zip(totals.into_iter())
        .filter_map(|(year, total)| Some((year?, total?)))
        .collect())
}

/// Aligns two per-year counts on the union of their years.
///
/// The result has a `Year` column sorted ascending and one count column per label;
/// a year only one species was seen in gets a count of 0 for the other. When both
/// labels are equal the second column is suffixed with ` (2)` so the names stay unique.
pub fn compare_year_counts(
    first: &BTreeMap<i32, u32>,
    second: &BTreeMap<i32, u32>,
    first_label: &str,
    second_label: &str,
) -> Result<DataFrame, FrameError> {
    let mut years: Vec<i32> = first.keys().chain(second.keys()).copied().collect();
    years.sort_unstable();
    years.dedup();

    let first_counts: Vec<u32> = years
        .iter()
        .map(|y| first.get(y).copied().unwrap_or(0))
        .collect();
    let second_counts: Vec<u32> = years
        .iter()
        .map(|y| second.get(y).copied().unwrap_or(0))
        .collect();

    let second_label = if first_label == second_label {
        format!("{} (2)", second_label)
    } else {
        second_label.to_string()
    };

    Ok(df!(
        YEAR => years,
        first_label => first_counts,
        second_label.as_str() => second_counts
    )?)
}

/// Collects the coordinates worth putting on a map.
///
/// A record contributes a point only when both its latitude and longitude are present
/// and non-zero, so the two columns always stay aligned.
pub fn map_points(records: &[Occurrence]) -> Result<DataFrame, FrameError> {
    let (latitudes, longitudes): (Vec<f64>, Vec<f64>) = records
        .iter()
        .filter_map(Occurrence::known_coordinates)
        .map(|p| (p.latitude(), p.longitude()))
        .unzip();

    Ok(df!(
        MAP_LATITUDE => latitudes,
        MAP_LONGITUDE => longitudes
    )?)
}
