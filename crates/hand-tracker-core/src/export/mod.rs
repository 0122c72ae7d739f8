//! Serialization of recorded frames to a downloadable JSON document.

mod document;
mod sink;

pub use {
    document::{EXPORT_FORMAT_VERSION, ExportDocument, export_file_name},
    sink::{ExportSink, FileSink},
};

use crate::{CoreResult, TrackerError, model::FrameSnapshot};

use std::{panic::Location, path::PathBuf};

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use tracing::{info, instrument};

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// Where the sink stored the document.
    pub path: PathBuf,
    /// File name handed to the sink.
    pub file_name: String,
    /// Number of frames written.
    pub total_frames: usize,
}

/// Serialize `frames` and hand the document to `sink`.
///
/// # Errors
///
/// Returns [`TrackerError::NoRecordedFrames`] without touching the sink when
/// `frames` is empty, or the sink's error if saving fails.
#[track_caller]
#[instrument(skip(frames, sink), fields(frame_count = frames.len()))]
pub fn write_export(
    frames: &[FrameSnapshot],
    fps: u32,
    captured_at: DateTime<Utc>,
    sink: &mut dyn ExportSink,
) -> CoreResult<ExportReceipt> {
    if frames.is_empty() {
        return Err(TrackerError::NoRecordedFrames {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let document = ExportDocument::new(frames, fps, captured_at);
    let contents = document.to_json()?;
    let file_name = export_file_name(captured_at);
    let path = sink.save(&file_name, &contents)?;

    info!(
        path = ?path,
        total_frames = document.total_frames,
        fps,
        "Recording exported"
    );

    Ok(ExportReceipt {
        path,
        file_name,
        total_frames: document.total_frames,
    })
}
