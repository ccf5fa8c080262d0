//! One-shot heading calibration and its read-only overlay view

pub mod calibrator;
pub mod overlay;

pub use calibrator::{CalibrationState, OrientationCalibrator};
pub use overlay::{Cardinal, HeadingIndicator};
