use crate::model::HandSnapshot;

use serde::{Deserialize, Serialize};

/// A video frame delivered by the camera adapter.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Monotonic frame number assigned by the camera.
    pub sequence: u64,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Raw pixel bytes in the camera's native layout. May be empty for
    /// sources that carry no image data.
    pub data: Vec<u8>,
}

/// All hands recorded at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Wall-clock capture time, milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Hands present in the frame.
    pub hands: Vec<HandSnapshot>,
}
