use crate::{
    CoreResult, TrackerError,
    export::{ExportReceipt, ExportSink, write_export},
    fps::FpsMeter,
    model::{DetectedHand, Frame, FrameSnapshot, HandSnapshot},
    recording::RecordingBuffer,
    render::{Canvas, HandRenderer},
    session::{
        CameraAdapter, DetectionJob, DetectionOutcome, DetectionTicket, DiscardReason,
        FrameCallback, FrameDisposition, LandmarkDetector, StatusReadout, TrackingState,
    },
    terminal_log::TerminalLog,
    topology::landmarks::WRIST,
};

use std::{panic::Location, sync::Arc, time::Instant};

use chrono::Utc;
use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, trace, warn};
use uuid::Uuid;

/// Processed frames between sampled wrist coordinates in the log.
const WRIST_LOG_INTERVAL: u64 = 30;
/// Recorded frames between progress lines.
const RECORDING_PROGRESS_INTERVAL: usize = 10;
/// Handless frames between "no hands" lines.
const NO_HANDS_LOG_INTERVAL: u64 = 60;

/// One operator session: tracking lifecycle, overlay, log and recording.
///
/// All mutation happens through `&mut self`, so the owner decides the
/// execution context. Detection is split into [`submit_frame`](Self::submit_frame),
/// which hands out a [`DetectionJob`] to run anywhere, and
/// [`handle_detection`](Self::handle_detection), which applies the result.
/// Results that arrive after a stop, from an earlier run, or out of order
/// are discarded without touching state.
pub struct Session<C: Canvas> {
    camera: Box<dyn CameraAdapter>,
    detector: Arc<dyn LandmarkDetector>,
    renderer: HandRenderer,
    canvas: C,
    state: TrackingState,
    recording: bool,
    buffer: RecordingBuffer,
    terminal: TerminalLog,
    fps: FpsMeter,
    hands_detected: usize,
    processed_frames: u64,
    no_hand_frames: u64,
    next_sequence: u64,
    last_applied: Option<u64>,
    in_flight: Option<DetectionTicket>,
}

impl<C: Canvas> Session<C> {
    /// Create an offline session around its collaborators.
    pub fn new(
        camera: Box<dyn CameraAdapter>,
        detector: Arc<dyn LandmarkDetector>,
        renderer: HandRenderer,
        canvas: C,
    ) -> Self {
        Self {
            camera,
            detector,
            renderer,
            canvas,
            state: TrackingState::Offline,
            recording: false,
            buffer: RecordingBuffer::new(),
            terminal: TerminalLog::new(),
            fps: FpsMeter::new(Instant::now()),
            hands_detected: 0,
            processed_frames: 0,
            no_hand_frames: 0,
            next_sequence: 0,
            last_applied: None,
            in_flight: None,
        }
    }

    /// Start the camera and bring tracking online.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::AlreadyTracking`] if tracking is starting or
    /// online, or the camera's error if it fails to start. In the latter case
    /// the session is left in [`TrackingState::Error`].
    #[track_caller]
    #[instrument(skip(self, on_frame))]
    pub fn start(&mut self, on_frame: FrameCallback) -> CoreResult<()> {
        if matches!(
            self.state,
            TrackingState::Initializing | TrackingState::Online { .. }
        ) {
            self.terminal.push("> ERROR: Tracking already online");
            return Err(TrackerError::AlreadyTracking {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.terminal.push("> INITIALIZING CAMERA...");
        self.state = TrackingState::Initializing;

        if let Err(e) = self.camera.start(on_frame) {
            error!(error = ?e, "Camera initialization failed");
            self.terminal.push("> ERROR: Camera initialization failed");
            self.terminal.push("> Check camera permissions");
            self.state = TrackingState::Error;
            return Err(e);
        }

        let (width, height) = self.camera.resolution();
        self.canvas.resize(width, height);

        let run_id = Uuid::new_v4();
        let now = Instant::now();
        self.state = TrackingState::Online {
            started_at: now,
            run_id,
        };
        self.fps.reset(now);
        self.hands_detected = 0;
        self.processed_frames = 0;
        self.no_hand_frames = 0;
        self.next_sequence = 0;
        self.last_applied = None;
        self.in_flight = None;

        self.terminal.push("> TRACKING SYSTEM ONLINE");
        self.terminal.push("> Ready for hand detection...");
        info!(run_id = %run_id, width, height, "Tracking online");

        Ok(())
    }

    /// Stop the camera, end recording and clear the overlay.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotTracking`] if tracking is not active.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> CoreResult<()> {
        let started_at = match self.state {
            TrackingState::Online { started_at, .. } => Some(started_at),
            TrackingState::Initializing => None,
            TrackingState::Offline | TrackingState::Error => {
                self.terminal.push("> ERROR: Tracking not active");
                return Err(TrackerError::NotTracking {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        self.camera.stop();
        self.state = TrackingState::Offline;
        self.recording = false;
        self.in_flight = None;
        self.hands_detected = 0;
        self.canvas.clear();

        self.terminal.push("> TRACKING SYSTEM OFFLINE");
        info!(
            duration_ms = ?started_at.map(|t| t.elapsed().as_millis()),
            frames_processed = self.processed_frames,
            "Tracking offline"
        );

        Ok(())
    }

    /// Flip the recording flag. Returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotTracking`] if tracking is not online;
    /// neither the flag nor the buffer changes.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn toggle_recording(&mut self) -> CoreResult<bool> {
        if !self.is_tracking() {
            self.terminal.push("> ERROR: Start tracking first");
            return Err(TrackerError::NotTracking {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.recording = !self.recording;

        if self.recording {
            self.terminal.push("> RECORDING STARTED");
            self.terminal.push("> Capturing 3D coordinates...");
            info!(frames_buffered = self.buffer.len(), "Recording started");
        } else {
            self.terminal.push("> RECORDING STOPPED");
            self.terminal
                .push(format!("> Total frames captured: {}", self.buffer.len()));
            info!(frames_buffered = self.buffer.len(), "Recording stopped");
        }

        Ok(self.recording)
    }

    /// Empty the recording buffer.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        let dropped = self.buffer.len();
        self.buffer.clear();

        self.terminal.push("> DATA CLEARED");
        self.terminal.push("> Memory buffer reset");
        info!(dropped, "Recording buffer cleared");
    }

    /// Export the recording buffer through `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NoRecordedFrames`] without writing when the
    /// buffer is empty, or the sink's error. The buffer is kept either way.
    #[track_caller]
    #[instrument(skip(self, sink))]
    pub fn download(&mut self, sink: &mut dyn ExportSink) -> CoreResult<ExportReceipt> {
        match write_export(self.buffer.frames(), self.fps.fps(), Utc::now(), sink) {
            Ok(receipt) => {
                self.terminal
                    .push(format!("> DATA EXPORTED: {} frames", receipt.total_frames));
                self.terminal.push(format!("> File: {}", receipt.file_name));
                Ok(receipt)
            }
            Err(e @ TrackerError::NoRecordedFrames { .. }) => {
                self.terminal.push("> ERROR: No data to download");
                Err(e)
            }
            Err(e) => {
                warn!(error = ?e, "Export failed");
                self.terminal.push("> ERROR: Export failed");
                Err(e)
            }
        }
    }

    /// Turn a camera frame into a detection job.
    ///
    /// Returns `None` when tracking is not online or a detection is already
    /// in flight; the frame is dropped in that case.
    pub fn submit_frame(&mut self, frame: Frame) -> Option<DetectionJob> {
        let TrackingState::Online { run_id, .. } = self.state else {
            trace!(sequence = frame.sequence, "Frame ignored, tracking offline");
            return None;
        };

        if self.in_flight.is_some() {
            trace!(sequence = frame.sequence, "Frame dropped, detector busy");
            return None;
        }

        self.next_sequence += 1;
        let ticket = DetectionTicket {
            run_id,
            sequence: self.next_sequence,
        };
        self.in_flight = Some(ticket);

        Some(DetectionJob::new(ticket, frame, Arc::clone(&self.detector)))
    }

    /// Apply a finished detection, or discard it if it is stale.
    #[instrument(skip(self, outcome), fields(sequence = outcome.ticket.sequence))]
    pub fn handle_detection(&mut self, outcome: DetectionOutcome, now: Instant) -> FrameDisposition {
        let ticket = outcome.ticket;

        if self.in_flight == Some(ticket) {
            self.in_flight = None;
        }

        let TrackingState::Online { run_id, .. } = self.state else {
            debug!("Discarding detection result, tracking offline");
            return FrameDisposition::Discarded(DiscardReason::NotTracking);
        };

        if ticket.run_id != run_id {
            debug!(stale_run = %ticket.run_id, "Discarding detection result from earlier run");
            return FrameDisposition::Discarded(DiscardReason::StaleRun);
        }

        if self.last_applied.is_some_and(|last| ticket.sequence <= last) {
            debug!(
                last_applied = ?self.last_applied,
                "Discarding out-of-order detection result"
            );
            return FrameDisposition::Discarded(DiscardReason::OutOfOrder);
        }
        self.last_applied = Some(ticket.sequence);

        match outcome.result {
            Ok(hands) => self.apply_hands(&hands, now),
            Err(e) => {
                warn!(error = ?e, "Landmark detection failed");
                FrameDisposition::Failed
            }
        }
    }

    fn apply_hands(&mut self, hands: &[DetectedHand], now: Instant) -> FrameDisposition {
        self.renderer.render(&mut self.canvas, hands);

        let (width, height) = (self.canvas.width(), self.canvas.height());
        let snapshots: Vec<HandSnapshot> = hands
            .iter()
            .filter_map(|hand| match HandSnapshot::from_detection(hand, width, height) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    warn!(error = ?e, "Skipping hand with malformed landmarks");
                    None
                }
            })
            .collect();
        self.hands_detected = snapshots.len();

        if self.processed_frames % WRIST_LOG_INTERVAL == 0 {
            for hand in &snapshots {
                let wrist = &hand.landmarks_3d[WRIST];
                self.terminal.push(format!(
                    "{}_HAND: WRIST[{:.3}, {:.3}, {:.3}]",
                    hand.label, wrist.x, wrist.y, wrist.z
                ));
            }
        }

        let hands_found = snapshots.len();
        let mut recorded = false;

        if self.recording && hands_found > 0 {
            let count = self.buffer.push(FrameSnapshot {
                timestamp: Utc::now().timestamp_millis(),
                hands: snapshots,
            });
            recorded = true;

            if count % RECORDING_PROGRESS_INTERVAL == 0 {
                self.terminal
                    .push(format!("> RECORDING... {} frames captured", count));
            }
        }

        if hands_found == 0 {
            if self.no_hand_frames % NO_HANDS_LOG_INTERVAL == 0 {
                self.terminal.push("> No hands detected...");
            }
            self.no_hand_frames += 1;
        }

        self.processed_frames += 1;
        if let Some(fps) = self.fps.tick(now) {
            trace!(fps, "Frame rate measured");
        }

        FrameDisposition::Applied {
            hands: hands_found,
            recorded,
        }
    }

    /// Stop the camera if it is running, without logging. For teardown.
    pub fn shutdown(&mut self) {
        if !matches!(self.state, TrackingState::Offline | TrackingState::Error) {
            self.camera.stop();
            self.state = TrackingState::Offline;
            self.recording = false;
            self.in_flight = None;
            info!("Session shut down");
        }
    }

    /// Append an operator message to the terminal log.
    pub fn log(&mut self, text: impl AsRef<str>) {
        self.terminal.push(text);
    }

    /// Current operator readouts.
    pub fn status(&self) -> StatusReadout {
        let online = self.is_tracking();
        StatusReadout {
            connection: self.state.connection(),
            hands: if online { self.hands_detected } else { 0 },
            fps: if online { self.fps.fps() } else { 0 },
            frames_recorded: self.buffer.len(),
            recording: self.recording,
        }
    }

    /// Lifecycle state.
    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// Whether tracking is online.
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackingState::Online { .. })
    }

    /// Whether recording is active.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Whether a detection job is outstanding.
    pub fn detection_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Recorded frames.
    pub fn buffer(&self) -> &RecordingBuffer {
        &self.buffer
    }

    /// Operator log.
    pub fn terminal(&self) -> &TerminalLog {
        &self.terminal
    }

    /// Overlay surface.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }
}
