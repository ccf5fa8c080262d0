//! Equirectangular tangent-plane projection
//!
//! Maps a geodetic target relative to a geodetic origin into local meters.
//! The approximation treats the Earth as locally flat and is accurate to
//! well under a meter for offsets of a few kilometers; error grows smoothly
//! with distance and never produces a fault. This trades geodesic accuracy
//! for simplicity: no ellipsoid model, no great-circle correction.

use crate::core::{GeoCoordinate, LocalOffset, EARTH_RADIUS_M};

/// Project `target` into the local frame centered on `origin`.
///
/// The result is in meters: +x east, +y up (always 0 here), +z south.
/// North-relative displacement therefore lands on -z. Total function,
/// deterministic for identical inputs.
pub fn project(origin: GeoCoordinate, target: GeoCoordinate) -> LocalOffset {
    let d_lat = (target.latitude_deg - origin.latitude_deg).to_radians();
    let d_lon = (target.longitude_deg - origin.longitude_deg).to_radians();

    let x = d_lon * EARTH_RADIUS_M * origin.latitude_deg.to_radians().cos();
    let north = d_lat * EARTH_RADIUS_M;

    LocalOffset::new(x, 0.0, -north)
}

/// Planar ground distance between two coordinates (meters)
pub fn ground_distance(origin: GeoCoordinate, target: GeoCoordinate) -> f64 {
    project(origin, target).distance()
}
