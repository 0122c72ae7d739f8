use crate::config::{default_confidence, default_max_num_hands, default_model_complexity};

use hand_tracker_core::DetectorOptions;
use serde::{Deserialize, Serialize};

/// Landmark detector thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Maximum hands reported per frame.
    #[serde(default = "default_max_num_hands")]
    pub max_num_hands: usize,
    /// Model variant (0 = lite, 1 = full).
    #[serde(default = "default_model_complexity")]
    pub model_complexity: u8,
    /// Minimum palm detection score.
    #[serde(default = "default_confidence")]
    pub min_detection_confidence: f32,
    /// Minimum landmark tracking score.
    #[serde(default = "default_confidence")]
    pub min_tracking_confidence: f32,
}

impl DetectorConfig {
    /// Options handed to the detector.
    pub fn options(&self) -> DetectorOptions {
        DetectorOptions {
            max_num_hands: self.max_num_hands,
            model_complexity: self.model_complexity,
            min_detection_confidence: self.min_detection_confidence,
            min_tracking_confidence: self.min_tracking_confidence,
        }
    }
}
