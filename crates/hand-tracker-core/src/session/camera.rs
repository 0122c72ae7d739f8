use crate::{CoreResult, model::Frame};

/// Per-frame notification installed when the camera starts.
pub type FrameCallback = Box<dyn FnMut(Frame) + Send + 'static>;

/// Video source feeding the tracker.
///
/// Implementations acquire frames at a fixed resolution and hand each one
/// to the callback given to [`start`](Self::start), from whatever thread
/// they capture on.
pub trait CameraAdapter: Send {
    /// Begin acquisition.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::CameraInitFailed`](crate::TrackerError::CameraInitFailed)
    /// if the device cannot be opened or access is denied.
    fn start(&mut self, on_frame: FrameCallback) -> CoreResult<()>;

    /// Halt acquisition. No callbacks fire after this returns.
    fn stop(&mut self);

    /// Capture resolution as (width, height) in pixels.
    fn resolution(&self) -> (u32, u32);
}
