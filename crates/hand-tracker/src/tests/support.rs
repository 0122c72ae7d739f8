use crate::config::{CaptureConfig, Config};

use hand_tracker_core::{
    DetectedHand, ExportDocument, FrameSnapshot, HandLabel, HandSnapshot, Handedness,
    NormalizedLandmark, WorldLandmark,
};

use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use chrono::Utc;

pub(crate) const WIDTH: u32 = 640;
pub(crate) const HEIGHT: u32 = 480;

/// Hand with a full landmark set, wrist at normalized (0.25, 0.5).
pub(crate) fn sample_hand(label: HandLabel, score: f32) -> DetectedHand {
    DetectedHand {
        handedness: Handedness { label, score },
        landmarks: (0..21)
            .map(|i| NormalizedLandmark::new(0.25 + i as f32 * 0.02, 0.5 - i as f32 * 0.01, 0.0))
            .collect(),
        world_landmarks: (0..21)
            .map(|i| WorldLandmark::new(i as f32 * 0.001, -(i as f32) * 0.002, 0.01))
            .collect(),
    }
}

/// Recorded frame holding the given hands.
pub(crate) fn recorded_frame(hands: &[DetectedHand]) -> FrameSnapshot {
    FrameSnapshot {
        timestamp: Utc::now().timestamp_millis(),
        hands: hands
            .iter()
            .map(|hand| HandSnapshot::from_detection(hand, WIDTH, HEIGHT).unwrap())
            .collect(),
    }
}

/// Write an export document usable as a replay source.
pub(crate) fn write_replay(dir: &Path, frames: &[FrameSnapshot]) -> PathBuf {
    let path = dir.join("replay.json");
    let document = ExportDocument::new(frames, 30, Utc::now());
    std::fs::write(&path, document.to_json().unwrap()).unwrap();
    path
}

/// Capture settings pointing at `replay_path`.
pub(crate) fn capture_config(replay_path: Option<PathBuf>, frame_rate: u32) -> CaptureConfig {
    CaptureConfig {
        width: WIDTH,
        height: HEIGHT,
        frame_rate,
        replay_path,
    }
}

/// Default configuration writing into `dir`.
pub(crate) fn config_in(dir: &Path) -> Config {
    Config::with_output_dir(dir.join("recordings"))
}

/// Cloneable writer capturing everything the app echoes.
#[derive(Clone, Default)]
pub(crate) struct SharedOutput(Arc<Mutex<Vec<u8>>>);

impl SharedOutput {
    pub(crate) fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
