mod camera;
mod detector;
#[allow(clippy::module_inception)]
mod session;
mod state;

pub use {
    camera::{CameraAdapter, FrameCallback},
    detector::{
        DetectionJob, DetectionOutcome, DetectionTicket, DetectorOptions, LandmarkDetector,
    },
    session::Session,
    state::{ConnectionStatus, DiscardReason, FrameDisposition, StatusReadout, TrackingState},
};
