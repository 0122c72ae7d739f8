use crate::{AppCommand, AppResult, RasterCanvas};

use hand_tracker_core::{
    DetectionOutcome, FileSink, Frame, FrameCallback, FrameDisposition, Session, TrackerError,
};

use std::{
    io::Write,
    panic::Location,
    path::PathBuf,
    time::Instant,
};

use chrono::Utc;
use error_location::ErrorLocation;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, error, info, instrument, trace, warn};

/// Frames buffered between the camera thread and the event loop. Extra
/// frames are dropped at the camera.
const FRAME_QUEUE_DEPTH: usize = 2;

/// Main application state.
///
/// Owns the [`Session`] and is the only place it is mutated. Camera frames
/// and detector results arrive over channels and are applied in order on
/// the async runtime thread; the detector itself runs on the blocking pool.
pub struct App {
    session: Session<RasterCanvas>,
    sink: FileSink,
    snapshot_dir: PathBuf,
    command_rx: mpsc::Receiver<AppCommand>,
    frame_tx: mpsc::Sender<Frame>,
    frame_rx: mpsc::Receiver<Frame>,
    outcome_tx: mpsc::Sender<DetectionOutcome>,
    outcome_rx: mpsc::Receiver<DetectionOutcome>,
    detection_task: Option<JoinHandle<()>>,
    output: Box<dyn Write + Send>,
    terminal_cursor: u64,
}

impl App {
    /// Create the application around a session.
    ///
    /// Exports and overlay snapshots are written through `sink` and into
    /// `snapshot_dir`. Terminal lines are echoed to `output`.
    pub fn new(
        session: Session<RasterCanvas>,
        sink: FileSink,
        snapshot_dir: PathBuf,
        command_rx: mpsc::Receiver<AppCommand>,
        output: Box<dyn Write + Send>,
    ) -> Self {
        let (frame_tx, frame_rx) = mpsc::channel(FRAME_QUEUE_DEPTH);
        let (outcome_tx, outcome_rx) = mpsc::channel(FRAME_QUEUE_DEPTH);

        Self {
            session,
            sink,
            snapshot_dir,
            command_rx,
            frame_tx,
            frame_rx,
            outcome_tx,
            outcome_rx,
            detection_task: None,
            output,
            terminal_cursor: 0,
        }
    }

    /// Run the main application event loop until shutdown is requested or
    /// the command channel closes.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Hand tracker starting");
        self.flush_terminal();

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => {
                    let Some(cmd) = cmd else {
                        info!("Command channel closed, shutting down");
                        break;
                    };

                    if cmd == AppCommand::Shutdown {
                        info!("Shutdown requested");
                        break;
                    }

                    if let Err(e) = self.handle_command(cmd) {
                        debug!(command = ?cmd, error = ?e, "Command rejected");
                    }
                }

                Some(frame) = self.frame_rx.recv() => {
                    self.dispatch_frame(frame);
                }

                Some(outcome) = self.outcome_rx.recv() => {
                    match self.session.handle_detection(outcome, Instant::now()) {
                        FrameDisposition::Applied { hands, recorded } => {
                            trace!(hands, recorded, "Detection applied");
                        }
                        FrameDisposition::Failed => {}
                        FrameDisposition::Discarded(reason) => {
                            debug!(?reason, "Detection discarded");
                        }
                    }
                }
            }

            self.flush_terminal();
        }

        self.session.shutdown();
        self.abort_detection();
        self.flush_terminal();
        info!("Hand tracker shut down successfully");

        Ok(())
    }

    /// Apply one operator command.
    #[instrument(skip(self))]
    fn handle_command(&mut self, cmd: AppCommand) -> AppResult<()> {
        match cmd {
            AppCommand::StartTracking => {
                // Anything still queued belongs to an earlier run.
                while self.frame_rx.try_recv().is_ok() {}
                let on_frame = self.frame_callback();
                self.session.start(on_frame)?;
            }
            AppCommand::StopTracking => {
                self.session.stop()?;
                self.abort_detection();
            }
            AppCommand::ToggleRecording => {
                self.session.toggle_recording()?;
            }
            AppCommand::ClearData => {
                self.session.clear();
            }
            AppCommand::DownloadData => {
                let receipt = self.session.download(&mut self.sink)?;
                info!(path = ?receipt.path, frames = receipt.total_frames, "Recording exported");
            }
            AppCommand::SaveOverlay => {
                self.save_overlay()?;
            }
            AppCommand::ShowStatus => {
                let status = self.session.status();
                self.session.log(format!("> {}", status));
            }
            AppCommand::Shutdown => {}
        }

        Ok(())
    }

    /// Callback handed to the camera. Runs on the camera's thread.
    fn frame_callback(&self) -> FrameCallback {
        let frame_tx = self.frame_tx.clone();
        Box::new(move |frame: Frame| {
            if let Err(e) = frame_tx.try_send(frame) {
                trace!(error = %e, "Camera frame dropped");
            }
        })
    }

    /// Send a frame to the detector on the blocking pool, unless one is
    /// already being processed.
    fn dispatch_frame(&mut self, frame: Frame) {
        let Some(job) = self.session.submit_frame(frame) else {
            return;
        };

        let ticket = job.ticket();
        let outcome_tx = self.outcome_tx.clone();

        self.detection_task = Some(tokio::spawn(async move {
            let outcome = match tokio::task::spawn_blocking(move || job.run()).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(error = ?e, "Detection task panicked");
                    DetectionOutcome {
                        ticket,
                        result: Err(TrackerError::DetectionFailed {
                            reason: format!("Detection task failed: {}", e),
                            location: ErrorLocation::from(Location::caller()),
                        }),
                    }
                }
            };

            if outcome_tx.send(outcome).await.is_err() {
                debug!("Event loop gone, dropping detection result");
            }
        }));
    }

    /// Stop waiting on the in-flight detection. A detector call already
    /// running on the blocking pool finishes, but its result is never
    /// forwarded.
    fn abort_detection(&mut self) {
        if let Some(task) = self.detection_task.take() {
            task.abort();
        }
    }

    /// Write the current overlay to `overlay_<ms>.png`.
    fn save_overlay(&mut self) -> AppResult<()> {
        let file_name = format!("overlay_{}.png", Utc::now().timestamp_millis());
        let path = self.snapshot_dir.join(&file_name);

        match self.session.canvas().save_png(&path) {
            Ok(()) => {
                self.session.log(format!("> OVERLAY SAVED: {}", file_name));
                Ok(())
            }
            Err(e) => {
                self.session.log("> ERROR: Snapshot failed");
                Err(e)
            }
        }
    }

    /// Echo terminal lines appended since the last flush.
    fn flush_terminal(&mut self) {
        let (lines, cursor) = self.session.terminal().lines_since(self.terminal_cursor);
        self.terminal_cursor = cursor;

        for line in lines {
            if let Err(e) = writeln!(self.output, "{}", line) {
                warn!(error = ?e, "Failed to write terminal line");
                return;
            }
        }

        if let Err(e) = self.output.flush() {
            warn!(error = ?e, "Failed to flush terminal output");
        }
    }
}
