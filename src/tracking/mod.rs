//! Geolocation fix tracking and entity-list derivation

pub mod constellation;
pub mod tracker;

pub use constellation::{derive_constellation, ConstellationConfig};
pub use tracker::{AnchorPolicy, PositionTracker};
