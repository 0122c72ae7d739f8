//! Line-oriented operator console.
//!
//! Reads commands from stdin on a dedicated thread and forwards them to the
//! application over an async channel. Each line maps to one [`AppCommand`].

use crate::{AppCommand, AppError, AppResult};

use std::{io::BufRead, panic::Location, thread::JoinHandle};

use error_location::ErrorLocation;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Forwards operator commands from a line reader.
pub struct Console {
    command_tx: mpsc::Sender<AppCommand>,
}

impl Console {
    /// Create a console that sends parsed commands on `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Read stdin on a named OS thread.
    ///
    /// A plain thread rather than `spawn_blocking`: a read blocked on stdin
    /// can never be cancelled, and runtime shutdown must not wait for it.
    #[track_caller]
    pub fn spawn(self) -> AppResult<JoinHandle<()>> {
        let handle = std::thread::Builder::new()
            .name("console".to_string())
            .spawn(move || {
                let stdin = std::io::stdin();
                if let Err(e) = self.run(stdin.lock()) {
                    debug!(error = ?e, "Console stopped");
                }
            })?;

        Ok(handle)
    }

    /// Forward commands until end of input or a quit command.
    ///
    /// End of input is treated as a quit request so the application never
    /// outlives its operator.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ChannelSendFailed`] once the application has
    /// stopped listening, or an IO error from `reader`.
    #[track_caller]
    #[instrument(skip(self, reader))]
    pub fn run(&self, reader: impl BufRead) -> AppResult<()> {
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<AppCommand>() {
                Ok(command) => {
                    self.send(command)?;
                    if command == AppCommand::Shutdown {
                        return Ok(());
                    }
                }
                Err(e) => {
                    warn!(error = ?e, "Ignoring console input");
                    println!("{}", AppCommand::USAGE);
                }
            }
        }

        info!("Console input closed");
        self.send(AppCommand::Shutdown)
    }

    #[track_caller]
    fn send(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .blocking_send(command)
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: {}", command, e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
