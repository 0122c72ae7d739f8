use std::time::{Duration, Instant};

const MEASUREMENT_WINDOW: Duration = Duration::from_millis(1000);

/// Frame-rate meter updated once per measurement window.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    window_start: Instant,
    frames: u32,
    fps: u32,
}

impl FpsMeter {
    /// Start measuring from `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            fps: 0,
        }
    }

    /// Count one processed frame. Returns the new rate when a window closes.
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);

        if elapsed < MEASUREMENT_WINDOW {
            return None;
        }

        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        self.fps = (f64::from(self.frames) * 1000.0 / elapsed_ms).round() as u32;
        self.frames = 0;
        self.window_start = now;

        Some(self.fps)
    }

    /// Last published rate.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Zero the rate and restart the window at `now`.
    pub fn reset(&mut self, now: Instant) {
        *self = Self::new(now);
    }
}
