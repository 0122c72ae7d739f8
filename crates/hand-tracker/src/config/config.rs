//! Configuration management for hand-tracker.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths, validation, and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{CaptureConfig, DetectorConfig, ExportConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use crate::config::{
    DEFAULT_CAPTURE_HEIGHT, DEFAULT_CAPTURE_WIDTH, DEFAULT_CONFIDENCE, DEFAULT_FRAME_RATE,
    DEFAULT_MAX_NUM_HANDS, DEFAULT_MODEL_COMPLEXITY,
};
use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Camera capture settings.
    pub capture: CaptureConfig,
    /// Landmark detector thresholds.
    pub detector: DetectorConfig,
    /// Export destination.
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from the platform config directory, creating a
    /// default file if none exists.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("No config found, creating default");
            let config = Self::defaults()?;
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load and validate configuration from an explicit path.
    #[track_caller]
    #[instrument]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config = Self::from_toml(&contents)?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    #[track_caller]
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Reject settings the camera or detector cannot work with.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        let capture = &self.capture;
        if capture.width == 0 || capture.height == 0 {
            return Err(AppError::ConfigError {
                reason: format!(
                    "Capture resolution must be non-zero, got {}x{}",
                    capture.width, capture.height
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if capture.frame_rate == 0 {
            return Err(AppError::ConfigError {
                reason: "Capture frame rate must be non-zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let detector = &self.detector;
        for (name, value) in [
            ("min_detection_confidence", detector.min_detection_confidence),
            ("min_tracking_confidence", detector.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AppError::ConfigError {
                    reason: format!("{} must be within [0, 1], got {}", name, value),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        if detector.max_num_hands == 0 {
            return Err(AppError::ConfigError {
                reason: "max_num_hands must be at least 1".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Save configuration to `path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Default configuration with exports under `output_dir`.
    pub fn with_output_dir(output_dir: PathBuf) -> Self {
        Config {
            capture: CaptureConfig {
                width: DEFAULT_CAPTURE_WIDTH,
                height: DEFAULT_CAPTURE_HEIGHT,
                frame_rate: DEFAULT_FRAME_RATE,
                replay_path: None,
            },
            detector: DetectorConfig {
                max_num_hands: DEFAULT_MAX_NUM_HANDS,
                model_complexity: DEFAULT_MODEL_COMPLEXITY,
                min_detection_confidence: DEFAULT_CONFIDENCE,
                min_tracking_confidence: DEFAULT_CONFIDENCE,
            },
            export: ExportConfig { output_dir },
        }
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "hand-tracker", "Hand-Tracker").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get project directories".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = Self::project_dirs()?;
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn defaults() -> AppResult<Self> {
        let proj_dirs = Self::project_dirs()?;
        Ok(Self::with_output_dir(
            proj_dirs.data_dir().join("recordings"),
        ))
    }
}
