//! Session-level types and error taxonomy

use crate::sensors::GeolocationError;
use crate::session::config::ConfigError;
use crate::store::StoreError;
use thiserror::Error;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Session failure taxonomy
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("geolocation failure: {0}")]
    Geolocation(#[from] GeolocationError),
    #[error("configuration failure: {0}")]
    Config(#[from] ConfigError),
    #[error("point store failure: {0}")]
    Store(#[from] StoreError),
}

/// Coarse session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Session constructed, no position request issued yet
    Idle,
    /// Waiting for the first successful fix; no content is placed
    AwaitingLocation,
    /// WorldOrigin established, content placed
    Anchored,
}

/// Snapshot of session state for hosts and overlays
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStatus {
    pub phase: SessionPhase,
    pub calibrated: bool,
    pub heading_deg: Option<f64>,
    pub entity_count: usize,
    pub fixes_ignored: u32,
    pub samples_discarded: u32,
    /// Most recent geolocation failure, cleared by an accepted fix
    pub last_location_error: Option<GeolocationError>,
}

/// What one pump step did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpOutcome {
    /// Orientation samples consumed this step
    pub samples_consumed: usize,
    /// Whether a geolocation fix was accepted this step
    pub fix_accepted: bool,
    /// Whether a recomposed scene was presented this step
    pub presented: bool,
}
