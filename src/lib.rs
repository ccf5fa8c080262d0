//! Geospatial AR anchoring core
//!
//! Anchors virtual 3D content to real-world GPS coordinates and keeps its
//! apparent position stable as the device moves and rotates: geodetic fixes
//! and noisy compass readings become a stable local Euclidean frame with a
//! one-time heading calibration.

pub mod calibration;
pub mod core;
pub mod geometry;
pub mod scene;
pub mod sensors;
pub mod session;
pub mod store;
pub mod tracking;

// Re-export commonly used types
pub use calibration::{CalibrationState, Cardinal, HeadingIndicator, OrientationCalibrator};
pub use core::{
    AnchoredEntity, EntityKind, GeoCoordinate, HeadingSample, LocalOffset, Placement,
    EARTH_RADIUS_M,
};
pub use geometry::{ground_distance, project};
pub use scene::{compose, ScenePose};
pub use sensors::{
    FixOptions, GeoFix, GeolocationError, GeolocationProvider, MockGeolocationProvider,
    MockOrientationSource, OrientationChannel, OrientationSource,
};
pub use session::{
    ArSession, ConfigError, ConsoleSurface, PumpOutcome, RecordingSurface, RenderSurface,
    SessionConfig, SessionError, SessionPhase, SessionResult, SessionStatus,
};
pub use store::{InMemoryPointStore, PointOfInterest, PointStore, StoreError, StoreResult};
pub use tracking::{derive_constellation, AnchorPolicy, ConstellationConfig, PositionTracker};
