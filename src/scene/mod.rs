//! Scene composition: pure placement math over tracker and calibrator state

pub mod composer;

pub use composer::{compose, ScenePose};
