use std::{fmt, time::Instant};

use uuid::Uuid;

/// Tracking lifecycle of a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    /// Camera stopped.
    Offline,
    /// Camera start in progress.
    Initializing,
    /// Camera running and frames flowing to the detector.
    Online {
        /// When tracking came online.
        started_at: Instant,
        /// Unique id of this tracking run for log correlation.
        run_id: Uuid,
    },
    /// Last start attempt failed. Start may be retried.
    Error,
}

impl TrackingState {
    /// Connection readout for this state.
    pub fn connection(&self) -> ConnectionStatus {
        match self {
            TrackingState::Offline => ConnectionStatus::Offline,
            TrackingState::Initializing => ConnectionStatus::Initializing,
            TrackingState::Online { .. } => ConnectionStatus::Online,
            TrackingState::Error => ConnectionStatus::Error,
        }
    }
}

/// Connection readout shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not tracking.
    Offline,
    /// Starting the camera.
    Initializing,
    /// Tracking.
    Online,
    /// Camera failed to start.
    Error,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConnectionStatus::Offline => "OFFLINE",
            ConnectionStatus::Initializing => "INITIALIZING",
            ConnectionStatus::Online => "ONLINE",
            ConnectionStatus::Error => "ERROR",
        })
    }
}

/// Snapshot of the operator readouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReadout {
    /// Connection state.
    pub connection: ConnectionStatus,
    /// Hands in the most recent processed frame.
    pub hands: usize,
    /// Measured frame rate.
    pub fps: u32,
    /// Frames in the recording buffer.
    pub frames_recorded: usize,
    /// Whether recording is active.
    pub recording: bool,
}

impl fmt::Display for StatusReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "STATUS: {} | HANDS: {} | FPS: {} | FRAMES: {}{}",
            self.connection,
            self.hands,
            self.fps,
            self.frames_recorded,
            if self.recording { " | REC" } else { "" }
        )
    }
}

/// What happened to a detection result handed to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDisposition {
    /// Result was drawn and, if recording, possibly recorded.
    Applied {
        /// Hands with a complete landmark set.
        hands: usize,
        /// Whether a snapshot was appended to the recording buffer.
        recorded: bool,
    },
    /// Detector reported an error for this frame.
    Failed,
    /// Result ignored without any state change.
    Discarded(DiscardReason),
}

/// Why a detection result was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// Tracking is not active.
    NotTracking,
    /// Result belongs to an earlier tracking run.
    StaleRun,
    /// A newer result from this run was already applied.
    OutOfOrder,
}
