//! Bounded operator log shown alongside the video overlay.

use std::collections::VecDeque;

use chrono::Local;
use tracing::debug;

/// Maximum number of lines retained. Older lines are evicted first.
pub const MAX_TERMINAL_LINES: usize = 100;

/// Ring buffer of timestamped operator messages.
#[derive(Debug, Clone)]
pub struct TerminalLog {
    lines: VecDeque<String>,
    capacity: usize,
    /// Total lines ever appended, including evicted ones.
    written: u64,
}

impl Default for TerminalLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalLog {
    /// Create an empty log with the standard capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_TERMINAL_LINES)
    }

    /// Create an empty log holding at most `capacity` lines.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
            written: 0,
        }
    }

    /// Append a line prefixed with the local time as `[HH:MM:SS]`.
    pub fn push(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        let line = format!("[{}] {}", Local::now().format("%H:%M:%S"), text);
        debug!(target: "terminal", "{}", text);

        self.lines.push_back(line);
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
        self.written += 1;
    }

    /// Retained lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Lines appended after `cursor` that are still retained, plus the new
    /// cursor to pass on the next call. Start with a cursor of 0.
    pub fn lines_since(&self, cursor: u64) -> (Vec<&str>, u64) {
        let first_retained = self.written - self.lines.len() as u64;
        let skip = cursor.saturating_sub(first_retained) as usize;
        let fresh = self.lines.iter().skip(skip).map(String::as_str).collect();
        (fresh, self.written)
    }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// Number of retained lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no lines are retained.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Maximum number of retained lines.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
