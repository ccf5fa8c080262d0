//! Core data types for geospatial anchoring

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Geodetic coordinate in WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoCoordinate {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Check that the coordinate lies inside the valid geodetic ranges
    pub fn is_valid(&self) -> bool {
        self.latitude_deg.abs() <= 90.0 && self.longitude_deg.abs() <= 180.0
    }
}

/// Local tangent-plane offset in meters.
///
/// Right-handed frame: +x east, +y up, +z south (north is -z).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalOffset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LocalOffset {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Straight-line distance from the frame origin (meters)
    pub fn distance(&self) -> f64 {
        self.to_vector3().norm()
    }
}

/// Raw orientation sample as delivered by a platform sensor.
///
/// A sample may carry a device-reported compass heading, a rotation alpha
/// angle, both, or neither (sensors emit partial data while initializing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingSample {
    /// Compass heading in degrees clockwise from north, if reported directly
    pub compass_heading: Option<f64>,
    /// Rotation alpha angle in degrees (counterclockwise sense), if reported
    pub alpha: Option<f64>,
}

impl HeadingSample {
    /// Sample carrying a device-reported compass heading
    pub fn compass(heading_deg: f64) -> Self {
        Self {
            compass_heading: Some(heading_deg),
            alpha: None,
        }
    }

    /// Sample carrying only a rotation alpha angle
    pub fn rotation(alpha_deg: f64) -> Self {
        Self {
            compass_heading: None,
            alpha: Some(alpha_deg),
        }
    }

    /// Sample with no usable angle (sensor still initializing)
    pub fn blank() -> Self {
        Self {
            compass_heading: None,
            alpha: None,
        }
    }

    /// Normalize to compass degrees clockwise from north.
    ///
    /// A direct compass heading wins; otherwise the alpha angle is converted
    /// by `360 - alpha` to correct its rotation sense. Returns `None` when
    /// neither field is populated.
    pub fn resolve(&self) -> Option<f64> {
        if let Some(heading) = self.compass_heading {
            return Some(heading);
        }
        self.alpha.map(|alpha| 360.0 - alpha)
    }
}

/// Kind of anchored entity, matching the points-of-interest wire vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    /// Self-marker placed at the device fix
    User,
    /// Decorative prop with no interaction
    StaticProp,
    /// Entity the user can interact with
    InteractiveButton,
}

/// Virtual entity bound to a real-world coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchoredEntity {
    pub id: String,
    pub kind: EntityKind,
    pub coordinate: GeoCoordinate,
}

/// Render-ready placement of one entity in the local frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub entity_id: String,
    pub offset: LocalOffset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_validity() {
        assert!(GeoCoordinate::new(45.0, -122.0).is_valid());
        assert!(GeoCoordinate::new(-90.0, 180.0).is_valid());
        assert!(!GeoCoordinate::new(90.5, 0.0).is_valid());
        assert!(!GeoCoordinate::new(0.0, -180.1).is_valid());
    }

    #[test]
    fn test_sample_resolution_prefers_compass() {
        let sample = HeadingSample {
            compass_heading: Some(42.0),
            alpha: Some(100.0),
        };
        assert_eq!(sample.resolve(), Some(42.0));
    }

    #[test]
    fn test_sample_resolution_converts_alpha() {
        assert_eq!(HeadingSample::rotation(350.0).resolve(), Some(10.0));
        assert_eq!(HeadingSample::rotation(0.0).resolve(), Some(360.0));
    }

    #[test]
    fn test_blank_sample_resolves_to_none() {
        assert_eq!(HeadingSample::blank().resolve(), None);
    }

    #[test]
    fn test_local_offset_distance() {
        let offset = LocalOffset::new(3.0, 0.0, 4.0);
        assert!((offset.distance() - 5.0).abs() < 1e-12);
        assert_eq!(LocalOffset::zero().distance(), 0.0);
    }
}
