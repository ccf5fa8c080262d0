//! Geodetic projection into the local tangent-plane frame

pub mod projection;

pub use projection::{ground_distance, project};
