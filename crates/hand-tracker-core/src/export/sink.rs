use crate::{CoreResult, TrackerError};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Destination for exported recordings.
pub trait ExportSink {
    /// Persist `contents` under `file_name`. Returns where it was written.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ExportFailed`] if the contents could not be saved.
    fn save(&mut self, file_name: &str, contents: &[u8]) -> CoreResult<PathBuf>;
}

/// Writes exports into a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Create a sink writing into `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write, sync and rename the temp file into place.
    #[track_caller]
    fn commit(
        mut temp_file: fs::File,
        contents: &[u8],
        temp_path: &Path,
        final_path: &Path,
    ) -> CoreResult<()> {
        temp_file
            .write_all(contents)
            .map_err(|e| TrackerError::ExportFailed {
                reason: format!("Failed to write temp export file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| TrackerError::ExportFailed {
            reason: format!("Failed to sync temp export file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
        drop(temp_file);

        fs::rename(temp_path, final_path).map_err(|e| TrackerError::ExportFailed {
            reason: format!("Failed to rename temp export to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl ExportSink for FileSink {
    /// Atomic write: temp file, sync, then rename over the final name.
    #[track_caller]
    #[instrument(skip(self, contents), fields(dir = ?self.dir))]
    fn save(&mut self, file_name: &str, contents: &[u8]) -> CoreResult<PathBuf> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| TrackerError::ExportFailed {
                reason: format!("Failed to create export directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
            debug!(dir = ?self.dir, "Created export directory");
        }

        let final_path = self.dir.join(file_name);
        let temp_path = final_path.with_extension("json.tmp");

        let temp_file = fs::File::create(&temp_path).map_err(|e| TrackerError::ExportFailed {
            reason: format!("Failed to create temp export file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Err(e) = Self::commit(temp_file, contents, &temp_path, &final_path) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                warn!(error = ?cleanup, path = ?temp_path, "Failed to remove temp export file");
            }
            return Err(e);
        }

        info!(path = ?final_path, bytes = contents.len(), "Export written (atomic write)");

        Ok(final_path)
    }
}
