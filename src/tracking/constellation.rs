//! Default entity constellation around a fix
//!
//! When no points-of-interest store is wired in, the tracker derives a small
//! deterministic constellation from the accepted fix: a self-marker at the
//! fix, decorative props on a ring of small angular radius, and one
//! interactive entity at its own offset. All offsets are pure functions of
//! the fix and the configuration.

use crate::core::{AnchoredEntity, EntityKind, GeoCoordinate};
use serde::{Deserialize, Serialize};

/// Parameters of the default constellation.
///
/// Angular radii are in degrees; the defaults are on the order of 1e-5,
/// which is roughly 5 to 10 meters of ground distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstellationConfig {
    /// Number of decorative props on the ring
    pub prop_count: usize,
    /// Angular radius of the prop ring (degrees)
    pub ring_radius_deg: f64,
    /// Eastward angular offset of the interactive entity (degrees)
    pub button_offset_deg: f64,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            prop_count: 4,
            ring_radius_deg: 5.0e-5,
            button_offset_deg: 8.0e-5,
        }
    }
}

/// Build the constellation for an accepted fix
pub fn derive_constellation(fix: GeoCoordinate, config: &ConstellationConfig) -> Vec<AnchoredEntity> {
    let mut entities = Vec::with_capacity(config.prop_count + 2);

    entities.push(AnchoredEntity {
        id: "user".to_string(),
        kind: EntityKind::User,
        coordinate: fix,
    });

    for index in 0..config.prop_count {
        let angle = std::f64::consts::TAU * index as f64 / config.prop_count as f64;
        entities.push(AnchoredEntity {
            id: format!("prop-{}", index),
            kind: EntityKind::StaticProp,
            coordinate: GeoCoordinate::new(
                fix.latitude_deg + config.ring_radius_deg * angle.cos(),
                fix.longitude_deg + config.ring_radius_deg * angle.sin(),
            ),
        });
    }

    entities.push(AnchoredEntity {
        id: "button".to_string(),
        kind: EntityKind::InteractiveButton,
        coordinate: GeoCoordinate::new(fix.latitude_deg, fix.longitude_deg + config.button_offset_deg),
    });

    entities
}
