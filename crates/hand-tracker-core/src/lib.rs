//! Hand Tracker Core Library
//!
//! Session control, skeleton overlay rendering and landmark recording for a
//! live hand-tracking front-end. The camera and the landmark model are
//! external collaborators plugged in through [`CameraAdapter`] and
//! [`LandmarkDetector`].
//!
//! # Example
//!
//! ```no_run
//! use hand_tracker_core::{
//!     CameraAdapter, CoreResult, FileSink, HandRenderer, LandmarkDetector, Session,
//!     Canvas,
//! };
//!
//! use std::{sync::Arc, time::Instant};
//!
//! fn run<C: Canvas>(
//!     camera: Box<dyn CameraAdapter>,
//!     detector: Arc<dyn LandmarkDetector>,
//!     canvas: C,
//! ) -> CoreResult<()> {
//!     let (frame_tx, frame_rx) = std::sync::mpsc::sync_channel(2);
//!     let mut session = Session::new(camera, detector, HandRenderer::default(), canvas);
//!
//!     session.start(Box::new(move |frame| {
//!         let _ = frame_tx.try_send(frame);
//!     }))?;
//!     session.toggle_recording()?;
//!
//!     for frame in frame_rx.iter().take(300) {
//!         if let Some(job) = session.submit_frame(frame) {
//!             let outcome = job.run();
//!             session.handle_detection(outcome, Instant::now());
//!         }
//!     }
//!
//!     session.stop()?;
//!     session.download(&mut FileSink::new("recordings"))?;
//!     Ok(())
//! }
//! ```

mod error;
mod export;
mod fps;
mod model;
mod recording;
mod render;
mod session;
mod terminal_log;

pub mod topology;

pub use {
    error::Result as CoreResult,
    error::TrackerError,
    export::{
        EXPORT_FORMAT_VERSION, ExportDocument, ExportReceipt, ExportSink, FileSink,
        export_file_name, write_export,
    },
    fps::FpsMeter,
    model::{
        DetectedHand, Frame, FrameSnapshot, HandLabel, HandSnapshot, Handedness, Landmark2D,
        Landmark3D, NormalizedLandmark, WorldLandmark,
    },
    recording::RecordingBuffer,
    render::{Canvas, Color, HandRenderer, Point, SkeletonStyle},
    session::{
        CameraAdapter, ConnectionStatus, DetectionJob, DetectionOutcome, DetectionTicket,
        DetectorOptions, DiscardReason, FrameCallback, FrameDisposition, LandmarkDetector,
        Session, StatusReadout, TrackingState,
    },
    terminal_log::{MAX_TERMINAL_LINES, TerminalLog},
};

#[cfg(test)]
mod tests;
