mod frame;
mod hand;
mod landmark;

pub use {
    frame::{Frame, FrameSnapshot},
    hand::{DetectedHand, HandLabel, HandSnapshot, Handedness},
    landmark::{Landmark2D, Landmark3D, NormalizedLandmark, WorldLandmark},
};
