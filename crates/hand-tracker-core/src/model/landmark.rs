use serde::{Deserialize, Serialize};

/// Detector landmark in normalized image space (x, y in [0, 1], z relative depth).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    /// Horizontal position as a fraction of image width.
    pub x: f32,
    /// Vertical position as a fraction of image height.
    pub y: f32,
    /// Depth relative to the wrist; smaller is closer to the camera.
    pub z: f32,
}

impl NormalizedLandmark {
    /// Create a landmark from normalized coordinates.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Scale to pixel coordinates on a surface of the given size.
    pub fn to_pixels(&self, width: u32, height: u32) -> (f32, f32) {
        (self.x * width as f32, self.y * height as f32)
    }
}

/// Detector landmark in world space, metres, origin at the hand's centre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldLandmark {
    /// X in metres.
    pub x: f32,
    /// Y in metres.
    pub y: f32,
    /// Z in metres.
    pub z: f32,
}

impl WorldLandmark {
    /// Create a landmark from world coordinates.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Recorded 3D landmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark3D {
    /// Landmark index in the hand topology (0-20).
    pub id: u8,
    /// X in metres.
    pub x: f32,
    /// Y in metres.
    pub y: f32,
    /// Z in metres.
    pub z: f32,
}

/// Recorded 2D landmark in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark2D {
    /// Landmark index in the hand topology (0-20).
    pub id: u8,
    /// X in pixels.
    pub x: f32,
    /// Y in pixels.
    pub y: f32,
}
