use crate::AppError;

use std::{panic::Location, str::FromStr};

use error_location::ErrorLocation;

/// Operator commands sent from the console to the main application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Start the camera and bring tracking online.
    StartTracking,
    /// Stop the camera and end tracking.
    StopTracking,
    /// Start or stop recording landmark snapshots.
    ToggleRecording,
    /// Discard all recorded frames.
    ClearData,
    /// Export recorded frames to a JSON file.
    DownloadData,
    /// Save the current overlay as a PNG.
    SaveOverlay,
    /// Print the status readouts.
    ShowStatus,
    /// Request application shutdown.
    Shutdown,
}

impl AppCommand {
    /// Console help text.
    pub const USAGE: &'static str =
        "Commands: start | stop | record | clear | download | snapshot | status | quit";
}

impl FromStr for AppCommand {
    type Err = AppError;

    #[track_caller]
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(AppCommand::StartTracking),
            "stop" => Ok(AppCommand::StopTracking),
            "record" | "rec" => Ok(AppCommand::ToggleRecording),
            "clear" => Ok(AppCommand::ClearData),
            "download" | "export" => Ok(AppCommand::DownloadData),
            "snapshot" => Ok(AppCommand::SaveOverlay),
            "status" => Ok(AppCommand::ShowStatus),
            "quit" | "exit" => Ok(AppCommand::Shutdown),
            _ => Err(AppError::UnknownCommand {
                input: input.trim().to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
