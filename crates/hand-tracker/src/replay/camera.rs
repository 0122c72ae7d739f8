use crate::{config::CaptureConfig, replay::ReplayTrack};

use hand_tracker_core::{CameraAdapter, CoreResult, Frame, FrameCallback, TrackerError};

use std::{
    panic::Location,
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::JoinHandle,
    time::{Duration, Instant},
};

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument};

/// Camera adapter that plays back an exported recording at a fixed rate.
pub struct ReplayCamera {
    source: Option<PathBuf>,
    width: u32,
    height: u32,
    frame_interval: Duration,
    track: ReplayTrack,
    worker: Option<JoinHandle<()>>,
    /// Signals the playback thread to stop. Checked before every callback so
    /// no frame is delivered once `stop()` has set it.
    shutdown: Arc<AtomicBool>,
}

impl ReplayCamera {
    /// Create a camera for the configured source. Nothing is read until start.
    pub fn new(config: &CaptureConfig, track: ReplayTrack) -> Self {
        Self {
            source: config.replay_path.clone(),
            width: config.width,
            height: config.height,
            frame_interval: Duration::from_secs(1) / config.frame_rate.max(1),
            track,
            worker: None,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl CameraAdapter for ReplayCamera {
    #[track_caller]
    #[instrument(skip(self, on_frame))]
    fn start(&mut self, mut on_frame: FrameCallback) -> CoreResult<()> {
        let path = self
            .source
            .as_ref()
            .ok_or_else(|| TrackerError::CameraInitFailed {
                reason: "No capture source configured (set capture.replay_path)".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let frame_count = self
            .track
            .load(path, self.width, self.height)
            .map_err(|e| TrackerError::CameraInitFailed {
                reason: format!("Failed to open replay source {:?}: {}", path, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if frame_count == 0 {
            return Err(TrackerError::CameraInitFailed {
                reason: format!("Replay source {:?} contains no frames", path),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.shutdown.store(false, Ordering::Release);

        let shutdown = Arc::clone(&self.shutdown);
        let (width, height, interval) = (self.width, self.height, self.frame_interval);

        let worker = std::thread::Builder::new()
            .name("replay-camera".to_string())
            .spawn(move || {
                let mut sequence = 0u64;
                let mut next_due = Instant::now();

                while !shutdown.load(Ordering::Acquire) {
                    on_frame(Frame {
                        sequence,
                        width,
                        height,
                        data: Vec::new(),
                    });
                    sequence += 1;

                    next_due += interval;
                    if let Some(wait) = next_due.checked_duration_since(Instant::now()) {
                        std::thread::sleep(wait);
                    }
                }

                debug!(frames_delivered = sequence, "Replay playback thread exiting");
            })
            .map_err(|e| TrackerError::CameraInitFailed {
                reason: format!("Failed to spawn playback thread: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.worker = Some(worker);
        info!(
            source = ?path,
            frame_count,
            interval_ms = interval.as_millis() as u64,
            "Replay camera started"
        );

        Ok(())
    }

    #[instrument(skip(self))]
    fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Release);

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("Replay playback thread panicked");
            }
            info!("Replay camera stopped");
        }
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Drop for ReplayCamera {
    fn drop(&mut self) {
        self.stop();
    }
}
