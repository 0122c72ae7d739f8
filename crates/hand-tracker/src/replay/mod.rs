//! Camera and detector stand-ins that replay an exported recording.

mod camera;
mod detector;
mod track;

pub(crate) use {camera::ReplayCamera, detector::ReplayDetector, track::ReplayTrack};
