use crate::frames::error::FrameError;
use crate::gbif::error::GbifError;
use crate::weather::error::WeatherError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Gbif(#[from] GbifError),

    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error("Failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Output path exists but is not a directory: '{0}'")]
    OutputPathNotDirectory(PathBuf),

    #[error("Failed to determine output directory")]
    OutputDirResolution,
}
