use error_location::ErrorLocation;
use thiserror::Error;

/// Hand tracking errors with source location tracking.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Camera adapter failed to start (missing device, denied permission, bad source).
    #[error("Camera initialization failed: {reason} {location}")]
    CameraInitFailed {
        /// Description of the camera failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Landmark detector failed to process a frame.
    #[error("Detection failed: {reason} {location}")]
    DetectionFailed {
        /// Description of the detector failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Detector produced a landmark set that does not match the hand topology.
    #[error("Expected {expected} landmarks, got {actual} {location}")]
    InvalidLandmarks {
        /// Number of landmarks the topology requires.
        expected: usize,
        /// Number of landmarks actually received.
        actual: usize,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Operation requires an active tracking session.
    #[error("Tracking is not active {location}")]
    NotTracking {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Tracking was started while already initializing or online.
    #[error("Tracking is already active {location}")]
    AlreadyTracking {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Export requested with an empty recording buffer.
    #[error("No recorded frames to export {location}")]
    NoRecordedFrames {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Writing the export document failed.
    #[error("Export failed: {reason} {location}")]
    ExportFailed {
        /// Description of the export failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {source} {location}")]
    Serialization {
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

// Manual From impls keep the conversion site as the error location.
impl From<serde_json::Error> for TrackerError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        TrackerError::Serialization {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

impl From<std::io::Error> for TrackerError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        TrackerError::Io {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

/// Result type alias using [`TrackerError`].
pub type Result<T> = std::result::Result<T, TrackerError>;
