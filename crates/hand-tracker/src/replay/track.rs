use hand_tracker_core::{
    CoreResult, DetectedHand, ExportDocument, FrameSnapshot, HandSnapshot, Handedness,
    NormalizedLandmark, WorldLandmark,
};

use std::{
    path::Path,
    sync::{Arc, RwLock},
};

use tracing::{info, instrument};

/// Per-frame hands loaded from a recording, shared by the replay camera and
/// the replay detector.
///
/// The camera loads the track when it starts; the detector looks frames up
/// by sequence number, wrapping around at the end of the recording.
#[derive(Debug, Clone, Default)]
pub struct ReplayTrack {
    frames: Arc<RwLock<Arc<[Vec<DetectedHand>]>>>,
}

impl ReplayTrack {
    /// Create an empty track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a recording, mapping pixel landmarks back to normalized image
    /// space using the capture resolution. Returns the frame count.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn load(&self, path: &Path, width: u32, height: u32) -> CoreResult<usize> {
        let document = ExportDocument::read_from(path)?;
        let frames: Arc<[Vec<DetectedHand>]> = document
            .frames
            .iter()
            .map(|frame| to_detected_hands(frame, width, height))
            .collect();
        let count = frames.len();

        *self.frames.write().unwrap_or_else(|e| e.into_inner()) = frames;

        info!(frame_count = count, path = ?path, "Replay track loaded");

        Ok(count)
    }

    /// Hands recorded for camera frame `sequence`.
    pub fn hands_at(&self, sequence: u64) -> Vec<DetectedHand> {
        let frames = self.frames.read().unwrap_or_else(|e| e.into_inner());
        if frames.is_empty() {
            return Vec::new();
        }
        let index = (sequence % frames.len() as u64) as usize;
        frames[index].clone()
    }
}

fn to_detected_hands(frame: &FrameSnapshot, width: u32, height: u32) -> Vec<DetectedHand> {
    frame
        .hands
        .iter()
        .map(|hand| to_detected_hand(hand, width, height))
        .collect()
}

fn to_detected_hand(hand: &HandSnapshot, width: u32, height: u32) -> DetectedHand {
    let (w, h) = (width.max(1) as f32, height.max(1) as f32);
    DetectedHand {
        handedness: Handedness {
            label: hand.label,
            score: hand.confidence,
        },
        landmarks: hand
            .landmarks_2d
            .iter()
            .map(|lm| NormalizedLandmark::new(lm.x / w, lm.y / h, 0.0))
            .collect(),
        world_landmarks: hand
            .landmarks_3d
            .iter()
            .map(|lm| WorldLandmark::new(lm.x, lm.y, lm.z))
            .collect(),
    }
}
