use crate::{
    CoreResult,
    model::{DetectedHand, Frame},
};

use std::sync::Arc;

use tracing::trace;
use uuid::Uuid;

/// Tuning passed to the landmark model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorOptions {
    /// Maximum hands reported per frame.
    pub max_num_hands: usize,
    /// Model variant; higher is slower and more accurate.
    pub model_complexity: u8,
    /// Minimum palm detection score for a hand to be reported.
    pub min_detection_confidence: f32,
    /// Minimum landmark tracking score before re-running palm detection.
    pub min_tracking_confidence: f32,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            max_num_hands: 2,
            model_complexity: 1,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

/// Pre-built hand landmark model, treated as a black box.
///
/// May block for an arbitrary time per frame; callers run it off the
/// event loop.
pub trait LandmarkDetector: Send + Sync {
    /// Detect hands in `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::DetectionFailed`](crate::TrackerError::DetectionFailed)
    /// if inference fails.
    fn detect(&self, frame: &Frame) -> CoreResult<Vec<DetectedHand>>;
}

/// Identifies which tracking run and which submission a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionTicket {
    /// Tracking run that issued the job.
    pub run_id: Uuid,
    /// Submission order within the run, starting at 1.
    pub sequence: u64,
}

/// A frame paired with the detector that should process it.
pub struct DetectionJob {
    ticket: DetectionTicket,
    frame: Frame,
    detector: Arc<dyn LandmarkDetector>,
}

impl DetectionJob {
    pub(crate) fn new(
        ticket: DetectionTicket,
        frame: Frame,
        detector: Arc<dyn LandmarkDetector>,
    ) -> Self {
        Self {
            ticket,
            frame,
            detector,
        }
    }

    /// Ticket the result will carry.
    pub fn ticket(&self) -> DetectionTicket {
        self.ticket
    }

    /// Run the detector. Blocking.
    pub fn run(self) -> DetectionOutcome {
        let result = self.detector.detect(&self.frame);
        trace!(
            sequence = self.ticket.sequence,
            ok = result.is_ok(),
            "Detection finished"
        );

        DetectionOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

/// Detector output tagged with the ticket of the job that produced it.
#[derive(Debug)]
pub struct DetectionOutcome {
    /// Ticket of the originating job.
    pub ticket: DetectionTicket,
    /// Hands found, or the detector's error.
    pub result: CoreResult<Vec<DetectedHand>>,
}
