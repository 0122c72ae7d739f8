use crate::config::{default_capture_height, default_capture_width, default_frame_rate};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Camera capture configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Capture width in pixels.
    #[serde(default = "default_capture_width")]
    pub width: u32,
    /// Capture height in pixels.
    #[serde(default = "default_capture_height")]
    pub height: u32,
    /// Frames per second delivered by the camera.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Previously exported recording to replay as the camera feed.
    #[serde(default)]
    pub replay_path: Option<PathBuf>,
}
