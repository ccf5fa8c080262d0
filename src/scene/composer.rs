//! Scene composer
//!
//! Combines the WorldOrigin, the anchored-entity list, and the calibrated
//! heading into a render-ready pose. `compose` is a free pure function: it
//! retains no state between calls, and the host re-invokes it whenever any
//! input changes.

use crate::core::{AnchoredEntity, GeoCoordinate, Placement};
use crate::geometry::project;
use nalgebra::{Rotation3, Vector3};

/// Render-ready output of one composition pass.
///
/// The yaw is a single rotation applied once at the scene root, never per
/// entity, so all placements stay mutually consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePose {
    /// Yaw of the whole scene graph (degrees about +y)
    pub yaw_degrees: f64,
    pub placements: Vec<Placement>,
}

impl ScenePose {
    /// Scene-root rotation as an nalgebra transform
    pub fn yaw_rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw_degrees.to_radians())
    }

    /// Placement offset after the scene-root yaw, i.e. in device space
    pub fn device_space(&self, placement: &Placement) -> Vector3<f64> {
        self.yaw_rotation() * placement.offset.to_vector3()
    }
}

/// Compose placements for every entity relative to `origin`.
///
/// The scene yaw is `-heading` (or 0 while uncalibrated) so that the
/// projector's north-relative offsets align with the device's calibrated
/// forward direction. Idempotent and side-effect-free.
pub fn compose(
    origin: GeoCoordinate,
    entities: &[AnchoredEntity],
    heading: Option<f64>,
) -> ScenePose {
    let yaw_degrees = heading.map_or(0.0, |heading_deg| -heading_deg);
    let placements = entities
        .iter()
        .map(|entity| Placement {
            entity_id: entity.id.clone(),
            offset: project(origin, entity.coordinate),
        })
        .collect();

    ScenePose {
        yaw_degrees,
        placements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityKind;

    fn entity(id: &str, lat: f64, lon: f64) -> AnchoredEntity {
        AnchoredEntity {
            id: id.to_string(),
            kind: EntityKind::StaticProp,
            coordinate: GeoCoordinate::new(lat, lon),
        }
    }

    #[test]
    fn test_yaw_zero_while_uncalibrated() {
        let pose = compose(GeoCoordinate::new(0.0, 0.0), &[], None);
        assert_eq!(pose.yaw_degrees, 0.0);
        assert!(pose.placements.is_empty());
    }

    #[test]
    fn test_yaw_negates_heading() {
        let pose = compose(GeoCoordinate::new(0.0, 0.0), &[], Some(90.0));
        assert_eq!(pose.yaw_degrees, -90.0);
    }

    #[test]
    fn test_entity_at_origin_places_at_zero() {
        let origin = GeoCoordinate::new(47.6, -122.3);
        let pose = compose(origin, &[entity("self", 47.6, -122.3)], Some(0.0));
        assert_eq!(pose.placements.len(), 1);
        let offset = pose.placements[0].offset;
        assert_eq!(offset.to_vector3(), Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_northward_entity_placement() {
        // ~5.5 m north of the origin lands on -z
        let origin = GeoCoordinate::new(0.0, 0.0);
        let pose = compose(origin, &[entity("north", 0.00005, 0.0)], Some(0.0));
        let offset = pose.placements[0].offset;
        assert!(offset.x.abs() < 0.1);
        assert_eq!(offset.y, 0.0);
        assert!((offset.z + 5.55).abs() < 0.1);
    }

    #[test]
    fn test_composition_is_idempotent() {
        let origin = GeoCoordinate::new(10.0, 20.0);
        let entities = vec![entity("a", 10.0001, 20.0), entity("b", 10.0, 20.0001)];
        let first = compose(origin, &entities, Some(33.0));
        let second = compose(origin, &entities, Some(33.0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_device_space_applies_scene_yaw() {
        // Heading 90 yields yaw -90; under a -90 degree rotation about +y
        // the north offset (0, 0, -5.55) lands on +x.
        let origin = GeoCoordinate::new(0.0, 0.0);
        let pose = compose(origin, &[entity("north", 0.00005, 0.0)], Some(90.0));
        let rotated = pose.device_space(&pose.placements[0]);
        assert!((rotated.x - 5.55).abs() < 0.1);
        assert!(rotated.z.abs() < 0.1);
        assert!(rotated.y.abs() < 1e-9);
    }

    #[test]
    fn test_zero_yaw_rotation_is_identity() {
        let pose = compose(GeoCoordinate::new(0.0, 0.0), &[], None);
        let vector = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(pose.yaw_rotation() * vector, vector);
    }
}
