//! Physical constants and frame conventions

/// Mean Earth radius (m), used by the equirectangular tangent-plane projection
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Local frame convention: right-handed, +x east, +y up, +z south.
/// North therefore maps to -z; renderers that treat -z as "forward" face
/// north when the scene yaw is zero.
pub const FRAME_NORTH_IS_NEGATIVE_Z: bool = true;
