use crate::{
    Canvas, Color, CoreResult, DetectedHand, ExportSink, Frame, FrameCallback, HandLabel,
    Handedness, NormalizedLandmark, Point, TrackerError, WorldLandmark,
    session::{CameraAdapter, LandmarkDetector},
};

use std::{
    panic::Location,
    path::PathBuf,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use error_location::ErrorLocation;

pub(crate) const CAMERA_WIDTH: u32 = 640;
pub(crate) const CAMERA_HEIGHT: u32 = 480;

/// Camera double counting lifecycle calls.
pub(crate) struct FakeCamera {
    fail_start: bool,
    pub(crate) starts: Arc<AtomicUsize>,
    pub(crate) stops: Arc<AtomicUsize>,
}

impl FakeCamera {
    pub(crate) fn working() -> Self {
        Self {
            fail_start: false,
            starts: Arc::new(AtomicUsize::new(0)),
            stops: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail_start: true,
            ..Self::working()
        }
    }
}

impl CameraAdapter for FakeCamera {
    #[track_caller]
    fn start(&mut self, _on_frame: FrameCallback) -> CoreResult<()> {
        if self.fail_start {
            return Err(TrackerError::CameraInitFailed {
                reason: "permission denied".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.starts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }

    fn resolution(&self) -> (u32, u32) {
        (CAMERA_WIDTH, CAMERA_HEIGHT)
    }
}

/// Detector double returning whatever hands are queued in it.
#[derive(Default)]
pub(crate) struct FakeDetector {
    pub(crate) hands: Mutex<Vec<DetectedHand>>,
    pub(crate) fail: Mutex<bool>,
}

impl FakeDetector {
    pub(crate) fn set_hands(&self, hands: Vec<DetectedHand>) {
        *self.hands.lock().unwrap_or_else(|e| e.into_inner()) = hands;
    }

    pub(crate) fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap_or_else(|e| e.into_inner()) = fail;
    }
}

impl LandmarkDetector for FakeDetector {
    #[track_caller]
    fn detect(&self, _frame: &Frame) -> CoreResult<Vec<DetectedHand>> {
        if *self.fail.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(TrackerError::DetectionFailed {
                reason: "model crashed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(self.hands.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }
}

/// Drawing command captured by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawOp {
    Clear,
    Line { from: Point, to: Point },
    Circle { center: Point, radius: f32 },
    Text { text: String, at: Point, color: Color },
}

/// Canvas double that records every command since the last clear.
pub(crate) struct RecordingCanvas {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub(crate) fn lines(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }

    pub(crate) fn circles(&self) -> Vec<(Point, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { center, radius } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn labels(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.clear();
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn stroke_line(&mut self, from: Point, to: Point, _color: Color, _line_width: f32) {
        self.ops.push(DrawOp::Line { from, to });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, _color: Color) {
        self.ops.push(DrawOp::Circle { center, radius });
    }

    fn fill_text(&mut self, text: &str, at: Point, color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            color,
        });
    }
}

/// Export sink double keeping documents in memory.
#[derive(Default)]
pub(crate) struct MemorySink {
    pub(crate) saved: Vec<(String, Vec<u8>)>,
}

impl ExportSink for MemorySink {
    fn save(&mut self, file_name: &str, contents: &[u8]) -> CoreResult<PathBuf> {
        self.saved.push((file_name.to_string(), contents.to_vec()));
        Ok(PathBuf::from("memory").join(file_name))
    }
}

/// Hand with a full, distinct landmark set.
pub(crate) fn sample_hand(label: HandLabel) -> DetectedHand {
    DetectedHand {
        handedness: Handedness { label, score: 0.9 },
        landmarks: (0..21)
            .map(|i| NormalizedLandmark::new(0.25 + i as f32 * 0.02, 0.5 - i as f32 * 0.01, 0.0))
            .collect(),
        world_landmarks: (0..21)
            .map(|i| WorldLandmark::new(i as f32 * 0.001, -(i as f32) * 0.002, 0.01))
            .collect(),
    }
}

/// Hand whose image landmarks stop short of the topology.
pub(crate) fn truncated_hand() -> DetectedHand {
    let mut hand = sample_hand(HandLabel::Left);
    hand.landmarks.truncate(10);
    hand
}

/// Hand whose image landmarks are complete but world landmarks are not.
pub(crate) fn hand_missing_world_landmark(label: HandLabel) -> DetectedHand {
    let mut hand = sample_hand(label);
    hand.world_landmarks.truncate(20);
    hand
}

pub(crate) fn frame(sequence: u64) -> Frame {
    Frame {
        sequence,
        width: CAMERA_WIDTH,
        height: CAMERA_HEIGHT,
        data: Vec::new(),
    }
}
