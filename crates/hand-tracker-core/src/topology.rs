//! Fixed anatomical topology of a tracked hand.
//!
//! Every hand carries 21 landmarks: the wrist followed by four joints per
//! finger, thumb first, ordered base to tip.

/// Number of landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

/// Landmark indices by joint name.
pub mod landmarks {
    /// Wrist.
    pub const WRIST: usize = 0;
    /// Thumb carpometacarpal joint.
    pub const THUMB_CMC: usize = 1;
    /// Thumb metacarpophalangeal joint.
    pub const THUMB_MCP: usize = 2;
    /// Thumb interphalangeal joint.
    pub const THUMB_IP: usize = 3;
    /// Thumb tip.
    pub const THUMB_TIP: usize = 4;
    /// Index finger knuckle.
    pub const INDEX_MCP: usize = 5;
    /// Index finger middle joint.
    pub const INDEX_PIP: usize = 6;
    /// Index finger distal joint.
    pub const INDEX_DIP: usize = 7;
    /// Index finger tip.
    pub const INDEX_TIP: usize = 8;
    /// Middle finger knuckle.
    pub const MIDDLE_MCP: usize = 9;
    /// Middle finger middle joint.
    pub const MIDDLE_PIP: usize = 10;
    /// Middle finger distal joint.
    pub const MIDDLE_DIP: usize = 11;
    /// Middle finger tip.
    pub const MIDDLE_TIP: usize = 12;
    /// Ring finger knuckle.
    pub const RING_MCP: usize = 13;
    /// Ring finger middle joint.
    pub const RING_PIP: usize = 14;
    /// Ring finger distal joint.
    pub const RING_DIP: usize = 15;
    /// Ring finger tip.
    pub const RING_TIP: usize = 16;
    /// Pinky knuckle.
    pub const PINKY_MCP: usize = 17;
    /// Pinky middle joint.
    pub const PINKY_PIP: usize = 18;
    /// Pinky distal joint.
    pub const PINKY_DIP: usize = 19;
    /// Pinky tip.
    pub const PINKY_TIP: usize = 20;
}

use landmarks::*;

/// Bone segments drawn between landmark pairs.
///
/// Five finger chains, the knuckle line across the palm, and the
/// wrist-to-pinky edge that closes the palm.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    // Thumb
    (WRIST, THUMB_CMC),
    (THUMB_CMC, THUMB_MCP),
    (THUMB_MCP, THUMB_IP),
    (THUMB_IP, THUMB_TIP),
    // Index
    (WRIST, INDEX_MCP),
    (INDEX_MCP, INDEX_PIP),
    (INDEX_PIP, INDEX_DIP),
    (INDEX_DIP, INDEX_TIP),
    // Middle
    (INDEX_MCP, MIDDLE_MCP),
    (MIDDLE_MCP, MIDDLE_PIP),
    (MIDDLE_PIP, MIDDLE_DIP),
    (MIDDLE_DIP, MIDDLE_TIP),
    // Ring
    (MIDDLE_MCP, RING_MCP),
    (RING_MCP, RING_PIP),
    (RING_PIP, RING_DIP),
    (RING_DIP, RING_TIP),
    // Pinky
    (RING_MCP, PINKY_MCP),
    (PINKY_MCP, PINKY_PIP),
    (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
    // Palm base
    (WRIST, PINKY_MCP),
];

/// Landmarks that get a numeric label on the overlay: wrist and fingertips.
pub const LABELED_LANDMARKS: [usize; 6] = [
    WRIST, THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP,
];
