use crate::{CoreResult, model::FrameSnapshot};

use std::{fs, path::Path};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Format version written into every export.
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// Self-describing recording file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Export format version.
    pub version: String,
    /// Capture time, ISO-8601 UTC with millisecond precision.
    pub capture_date: String,
    /// Number of entries in `frames`.
    pub total_frames: usize,
    /// Frame rate measured when the export was taken.
    pub fps: u32,
    /// Recorded frames in capture order.
    pub frames: Vec<FrameSnapshot>,
}

impl ExportDocument {
    /// Assemble a document from recorded frames.
    pub fn new(frames: &[FrameSnapshot], fps: u32, captured_at: DateTime<Utc>) -> Self {
        Self {
            version: EXPORT_FORMAT_VERSION.to_string(),
            capture_date: captured_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            total_frames: frames.len(),
            fps,
            frames: frames.to_vec(),
        }
    }

    /// Encode as pretty-printed JSON.
    #[track_caller]
    pub fn to_json(&self) -> CoreResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Decode from JSON bytes.
    #[track_caller]
    pub fn from_json(bytes: &[u8]) -> CoreResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Read a previously exported file.
    #[track_caller]
    #[instrument]
    pub fn read_from(path: &Path) -> CoreResult<Self> {
        let bytes = fs::read(path)?;
        let document = Self::from_json(&bytes)?;

        debug!(
            total_frames = document.total_frames,
            version = %document.version,
            "Export document loaded"
        );

        Ok(document)
    }
}

/// File name for an export taken at `captured_at`:
/// `hand_tracking_<epoch-ms>.json`.
pub fn export_file_name(captured_at: DateTime<Utc>) -> String {
    format!("hand_tracking_{}.json", captured_at.timestamp_millis())
}
