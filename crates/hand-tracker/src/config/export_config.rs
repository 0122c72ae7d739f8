use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where downloads and overlay snapshots are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output directory for `hand_tracking_*.json` and `overlay_*.png` files.
    pub output_dir: PathBuf,
}
