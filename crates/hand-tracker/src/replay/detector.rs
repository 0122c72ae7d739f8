use crate::replay::ReplayTrack;

use hand_tracker_core::{CoreResult, DetectedHand, DetectorOptions, Frame, LandmarkDetector};

use tracing::trace;

/// Detector that returns the hands recorded for each replayed frame,
/// subject to the configured thresholds.
pub struct ReplayDetector {
    options: DetectorOptions,
    track: ReplayTrack,
}

impl ReplayDetector {
    /// Create a detector reading from `track`.
    pub fn new(options: DetectorOptions, track: ReplayTrack) -> Self {
        Self { options, track }
    }
}

impl LandmarkDetector for ReplayDetector {
    fn detect(&self, frame: &Frame) -> CoreResult<Vec<DetectedHand>> {
        let hands: Vec<DetectedHand> = self
            .track
            .hands_at(frame.sequence)
            .into_iter()
            .filter(|hand| hand.handedness.score >= self.options.min_detection_confidence)
            .take(self.options.max_num_hands)
            .collect();

        trace!(sequence = frame.sequence, hands = hands.len(), "Replay detection");

        Ok(hands)
    }
}
