//! Loads the historical temperature CSV and prepares the frames behind the two
//! temperature charts.

use crate::frames::error::FrameError;
use log::{debug, info};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tokio::task;

pub const YEAR: &str = "Year";
pub const MEAN_TEMPERATURE: &str = "Mean Temperature (°C)";
pub const AVERAGE_TEMPERATURE: &str = "Average Temperature (°C)";

/// Column names of the frame returned by [`temperature_comparison`].
pub const SPECIES: &str = "Species";
pub const TEMPERATURE: &str = "Temperature";

/// Reads the historical temperature CSV (with a header row) on a blocking task.
///
/// Any extra columns are kept; only `Year` and `Mean Temperature (°C)` are required.
///
/// # Errors
///
/// Returns [`FrameError::CsvRead`] if the file cannot be read or parsed, and
/// [`FrameError::MissingColumn`] if one of the required columns is absent.
pub async fn load_historical(path: &Path) -> Result<DataFrame, FrameError> {
    let path_buf = path.to_path_buf();
    info!("Loading historical temperatures from {:?}", path_buf);

    task::spawn_blocking(move || read_historical_csv(path_buf)).await?
}

fn read_historical_csv(path: PathBuf) -> Result<DataFrame, FrameError> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.clone()))
        .map_err(|e| FrameError::CsvRead(path.clone(), e))?
        .finish()
        .map_err(|e| FrameError::CsvRead(path.clone(), e))?;

    for column in [YEAR, MEAN_TEMPERATURE] {
        if frame.column(column).is_err() {
            return Err(FrameError::MissingColumn {
                path,
                column: column.to_string(),
            });
        }
    }

    debug!("Read {} historical rows from {:?}", frame.height(), path);
    Ok(frame)
}

/// Averages the mean temperature per year.
///
/// Rows with a null in *any* column are dropped first. The result has one row per
/// distinct year, sorted ascending, with the columns `Year` and
/// `Average Temperature (°C)`.
pub fn average_temperature_per_year(frame: &DataFrame) -> Result<DataFrame, FrameError> {
    Ok(frame
        .clone()
        .lazy()
        .drop_nulls(None)
        .group_by([col(YEAR)])
        .agg([col(MEAN_TEMPERATURE)
            .cast(DataType::Float64)
            .mean()
            .alias(AVERAGE_TEMPERATURE)])
        .sort([YEAR], SortMultipleOptions::default())
        .collect()?)
}

/// Builds the two-bar frame for the temperature comparison chart.
///
/// Returns `None` unless both temperatures are present; a chart with a single bar
/// would suggest a comparison that cannot be made.
pub fn temperature_comparison(
    first_label: &str,
    first_temperature: Option<f64>,
    second_label: &str,
    second_temperature: Option<f64>,
) -> Result<Option<DataFrame>, FrameError> {
    let (Some(first), Some(second)) = (first_temperature, second_temperature) else {
        return Ok(None);
    };

    let frame = df!(
        SPECIES => [first_label, second_label],
        TEMPERATURE => [first, second]
    )?;
    Ok(Some(frame))
}
