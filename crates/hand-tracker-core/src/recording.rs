use crate::model::FrameSnapshot;

/// Ordered in-memory store of recorded frames.
///
/// Append-only; the only removal is [`clear`](Self::clear), which drops
/// everything at once. Memory grows with recording length: a two-hand frame
/// is roughly 1.5KB, so ten minutes at 30 fps is around 27MB.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuffer {
    frames: Vec<FrameSnapshot>,
}

impl RecordingBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame. Returns the new frame count.
    pub fn push(&mut self, frame: FrameSnapshot) -> usize {
        self.frames.push(frame);
        self.frames.len()
    }

    /// Drop every recorded frame.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Number of recorded frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Recorded frames in capture order.
    pub fn frames(&self) -> &[FrameSnapshot] {
        &self.frames
    }
}
