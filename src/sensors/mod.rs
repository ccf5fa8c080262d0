//! Sensor capability seams
//!
//! The anchoring core never talks to platform sensors directly. Geolocation
//! and orientation arrive through the traits in this module, which the host
//! application implements over its platform APIs. Mock implementations for
//! tests and demos live in `mock`.

pub mod geolocation;
pub mod mock;
pub mod orientation;

pub use geolocation::{FixOptions, GeoFix, GeolocationError, GeolocationProvider, GeoResult};
pub use mock::{MockGeolocationProvider, MockOrientationSource};
pub use orientation::{OrientationChannel, OrientationSource};
