//! Geolocation capability seam

use crate::core::GeoCoordinate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for geolocation operations
pub type GeoResult<T> = Result<T, GeolocationError>;

/// Geolocation failure taxonomy.
///
/// All variants are recoverable: the session stays in its awaiting-location
/// state and waits for an externally triggered retry. No automatic retry
/// happens inside the core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    /// The user or platform denied the location permission
    #[error("location permission denied")]
    PermissionDenied,
    /// No fix arrived within the provider's deadline
    #[error("location request timed out after {waited_ms}ms")]
    Timeout { waited_ms: u32 },
    /// Position unavailable (no signal, hardware fault)
    #[error("position unavailable: {details}")]
    Unavailable { details: String },
}

/// One successful geolocation fix
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFix {
    pub coordinate: GeoCoordinate,
    /// Estimated horizontal accuracy radius, if the platform reports one
    pub accuracy_m: Option<f64>,
    /// Platform timestamp (milliseconds since epoch)
    pub timestamp_ms: u64,
}

impl GeoFix {
    pub fn new(coordinate: GeoCoordinate) -> Self {
        Self {
            coordinate,
            accuracy_m: None,
            timestamp_ms: 0,
        }
    }

    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }

    pub fn with_timestamp(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }
}

/// Options for a single-shot position request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixOptions {
    /// Request the platform's high-accuracy mode (GPS rather than cell/wifi)
    pub high_accuracy: bool,
    /// Deadline the provider may honor as external policy; the core imposes
    /// no timeout of its own
    pub timeout_ms: Option<u32>,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: None,
        }
    }
}

/// Single-shot geolocation capability.
///
/// `request_position` starts one request; the session then polls `poll_fix`
/// until a fix or an error arrives. This models the success/error callback
/// pair of platform geolocation APIs in the crate's single-threaded pump.
pub trait GeolocationProvider {
    /// Begin a single-shot position request
    fn request_position(&mut self, options: &FixOptions) -> GeoResult<()>;

    /// Poll for the outcome of the pending request.
    /// Returns Ok(Some(fix)) when a fix arrived, Ok(None) while still
    /// waiting, Err(error) when the request failed.
    fn poll_fix(&mut self) -> GeoResult<Option<GeoFix>>;

    /// Cancel any pending request. Idempotent and safe during teardown.
    fn cancel(&mut self);
}
