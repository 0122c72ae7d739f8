//! Hand Tracker: live hand-skeleton overlay with landmark recording and
//! JSON export, driven from a line console.

mod app;
mod app_command;
mod config;
mod console;
mod error;
mod overlay_canvas;
mod replay;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    console::Console,
    error::{AppError, Result as AppResult},
    overlay_canvas::RasterCanvas,
};

use crate::{
    config::Config,
    replay::{ReplayCamera, ReplayDetector, ReplayTrack},
};

use std::sync::Arc;

use hand_tracker_core::{FileSink, HandRenderer, Session};
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hand_tracker=debug,hand_tracker_core=debug"));

    // Stdout carries the operator terminal; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let track = ReplayTrack::new();
    let camera = ReplayCamera::new(&config.capture, track.clone());
    let detector = ReplayDetector::new(config.detector.options(), track);
    let canvas = RasterCanvas::new(config.capture.width, config.capture.height);

    let mut session = Session::new(
        Box::new(camera),
        Arc::new(detector),
        HandRenderer::default(),
        canvas,
    );
    session.log("> SYSTEM READY");
    session.log("> Type 'start' to begin");
    session.log("> Hand tracking v1.0 loaded");

    let (command_tx, command_rx) = mpsc::channel(32);

    if let Err(e) = Console::new(command_tx).spawn() {
        error!("Failed to start console: {:?}", e);
        std::process::exit(1);
    }
    println!("{}", AppCommand::USAGE);

    let output_dir = config.export.output_dir.clone();
    let app = App::new(
        session,
        FileSink::new(output_dir.clone()),
        output_dir,
        command_rx,
        Box::new(std::io::stdout()),
    );

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(app.run()) {
        error!(error = ?e, "App error");
        std::process::exit(1);
    }

    // The console thread may still be parked on stdin; don't wait for it.
    rt.shutdown_background();
    info!("Exiting");
}
