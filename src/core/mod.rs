//! Core types and constants for the geospatial anchoring system

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
