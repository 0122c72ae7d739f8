mod capture_config;
#[allow(clippy::module_inception)]
mod config;
mod detector_config;
mod export_config;

pub(crate) use {
    capture_config::CaptureConfig, config::Config, detector_config::DetectorConfig,
    export_config::ExportConfig,
};

pub(crate) const DEFAULT_CAPTURE_WIDTH: u32 = 640;
pub(crate) const DEFAULT_CAPTURE_HEIGHT: u32 = 480;
pub(crate) const DEFAULT_FRAME_RATE: u32 = 30;
pub(crate) const DEFAULT_MAX_NUM_HANDS: usize = 2;
pub(crate) const DEFAULT_MODEL_COMPLEXITY: u8 = 1;
pub(crate) const DEFAULT_CONFIDENCE: f32 = 0.5;

pub(crate) fn default_capture_width() -> u32 {
    DEFAULT_CAPTURE_WIDTH
}

pub(crate) fn default_capture_height() -> u32 {
    DEFAULT_CAPTURE_HEIGHT
}

pub(crate) fn default_frame_rate() -> u32 {
    DEFAULT_FRAME_RATE
}

pub(crate) fn default_max_num_hands() -> usize {
    DEFAULT_MAX_NUM_HANDS
}

pub(crate) fn default_model_complexity() -> u8 {
    DEFAULT_MODEL_COMPLEXITY
}

pub(crate) fn default_confidence() -> f32 {
    DEFAULT_CONFIDENCE
}
