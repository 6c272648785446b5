use crate::error::ExplorerError;
use log::info;
use std::io;
use std::path::{Path, PathBuf};

const OUTPUT_DIR_NAME: &str = "biodiversity_explorer";

/// Default directory for rendered charts, inside the system cache directory.
pub fn get_output_dir() -> Result<PathBuf, ExplorerError> {
    dirs::cache_dir()
        .ok_or(ExplorerError::OutputDirResolution)
        .map(|p| p.join(OUTPUT_DIR_NAME))
}

pub async fn ensure_output_dir_exists(path: &Path) -> Result<(), ExplorerError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(ExplorerError::OutputPathNotDirectory(path.to_path_buf()));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating output directory: {}", path.display());
            tokio::fs::create_dir_all(path)
                .await
                .map_err(|e| ExplorerError::OutputDirCreation(path.to_path_buf(), e))
        }
        Err(e) => Err(ExplorerError::OutputDirCreation(path.to_path_buf(), e)),
    }
}
