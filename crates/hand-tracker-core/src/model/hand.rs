use crate::{
    CoreResult, TrackerError,
    model::{Landmark2D, Landmark3D, NormalizedLandmark, WorldLandmark},
    topology::LANDMARK_COUNT,
};

use std::{fmt, panic::Location};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which hand the detector believes it is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandLabel {
    /// Left hand.
    Left,
    /// Right hand.
    Right,
}

impl HandLabel {
    /// Label as written in exports and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            HandLabel::Left => "Left",
            HandLabel::Right => "Right",
        }
    }
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handedness classification with its confidence score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handedness {
    /// Classified hand.
    pub label: HandLabel,
    /// Classification confidence in [0, 1].
    pub score: f32,
}

/// One hand as reported by the landmark detector.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedHand {
    /// Left/right classification.
    pub handedness: Handedness,
    /// Landmarks in normalized image space.
    pub landmarks: Vec<NormalizedLandmark>,
    /// Landmarks in world space.
    pub world_landmarks: Vec<WorldLandmark>,
}

impl DetectedHand {
    /// Whether both landmark sets match the hand topology.
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() == LANDMARK_COUNT && self.world_landmarks.len() == LANDMARK_COUNT
    }
}

/// Per-hand record stored in a [`FrameSnapshot`](crate::FrameSnapshot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandSnapshot {
    /// Left/right classification.
    pub label: HandLabel,
    /// Classification confidence in [0, 1].
    pub confidence: f32,
    /// World-space landmarks, ids 0-20.
    #[serde(rename = "landmarks3D")]
    pub landmarks_3d: Vec<Landmark3D>,
    /// Pixel-space landmarks, ids 0-20.
    #[serde(rename = "landmarks2D")]
    pub landmarks_2d: Vec<Landmark2D>,
}

impl HandSnapshot {
    /// Build a snapshot from detector output, scaling 2D points to a
    /// `width` x `height` pixel surface.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidLandmarks`] if either landmark set
    /// does not hold exactly 21 points.
    #[track_caller]
    pub fn from_detection(hand: &DetectedHand, width: u32, height: u32) -> CoreResult<Self> {
        for actual in [hand.landmarks.len(), hand.world_landmarks.len()] {
            if actual != LANDMARK_COUNT {
                return Err(TrackerError::InvalidLandmarks {
                    expected: LANDMARK_COUNT,
                    actual,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let landmarks_3d = hand
            .world_landmarks
            .iter()
            .zip(0u8..)
            .map(|(lm, id)| Landmark3D {
                id,
                x: lm.x,
                y: lm.y,
                z: lm.z,
            })
            .collect();

        let landmarks_2d = hand
            .landmarks
            .iter()
            .zip(0u8..)
            .map(|(lm, id)| {
                let (x, y) = lm.to_pixels(width, height);
                Landmark2D { id, x, y }
            })
            .collect();

        Ok(Self {
            label: hand.handedness.label,
            confidence: hand.handedness.score.clamp(0.0, 1.0),
            landmarks_3d,
            landmarks_2d,
        })
    }
}
