//! Position tracker: world-origin ownership and entity-list derivation
//!
//! The tracker owns the session's WorldOrigin. The first accepted fix sets
//! the origin and derives the anchored-entity list wholesale; what later
//! fixes do is governed by [`AnchorPolicy`]. Other components read the
//! origin through an accessor that returns a copy, never a mutable handle.

use crate::core::{AnchoredEntity, EntityKind, GeoCoordinate};
use crate::sensors::GeoFix;
use crate::store::PointOfInterest;
use crate::tracking::constellation::{derive_constellation, ConstellationConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Re-anchor policy for fixes after the first.
///
/// The default freezes the origin on the first fix, trading drift correction
/// for placement stability: content does not jump when later, slightly
/// different fixes arrive. Offset error grows with travel distance under
/// this policy, which is the documented tradeoff. `EveryFix` opts into
/// re-anchoring on each accepted fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnchorPolicy {
    #[default]
    FirstFixOnly,
    EveryFix,
}

/// Entity source for list derivation
enum EntitySource {
    Constellation(ConstellationConfig),
    Points(Vec<PointOfInterest>),
}

/// Tracks accepted fixes and owns the WorldOrigin
pub struct PositionTracker {
    policy: AnchorPolicy,
    source: EntitySource,
    origin: Option<GeoCoordinate>,
    entities: Vec<AnchoredEntity>,
    fixes_ignored: u32,
}

impl PositionTracker {
    pub fn new(policy: AnchorPolicy, constellation: ConstellationConfig) -> Self {
        Self {
            policy,
            source: EntitySource::Constellation(constellation),
            origin: None,
            entities: Vec::new(),
            fixes_ignored: 0,
        }
    }

    /// Source the entity list from store points instead of the default
    /// constellation: a self-marker at the fix plus one entity per point.
    /// If already anchored, the list is rebuilt immediately.
    pub fn set_points(&mut self, points: &[PointOfInterest]) {
        self.source = EntitySource::Points(points.to_vec());
        if let Some(origin) = self.origin {
            self.rebuild_entities(origin);
        }
    }

    /// Feed one geolocation fix. Returns `true` when the fix was accepted
    /// (origin set or re-anchored and entity list rebuilt wholesale).
    pub fn on_fix(&mut self, fix: &GeoFix) -> bool {
        if self.origin.is_some() && self.policy == AnchorPolicy::FirstFixOnly {
            self.fixes_ignored += 1;
            debug!(
                ignored = self.fixes_ignored,
                "fix ignored under first-fix-only policy"
            );
            return false;
        }

        let coordinate = fix.coordinate;
        self.origin = Some(coordinate);
        self.rebuild_entities(coordinate);
        info!(
            latitude_deg = coordinate.latitude_deg,
            longitude_deg = coordinate.longitude_deg,
            entities = self.entities.len(),
            "world origin anchored"
        );
        true
    }

    fn rebuild_entities(&mut self, origin: GeoCoordinate) {
        // List is replaced wholesale, never merged incrementally
        self.entities = match &self.source {
            EntitySource::Constellation(config) => derive_constellation(origin, config),
            EntitySource::Points(points) => {
                let mut entities = Vec::with_capacity(points.len() + 1);
                entities.push(AnchoredEntity {
                    id: "user".to_string(),
                    kind: EntityKind::User,
                    coordinate: origin,
                });
                entities.extend(points.iter().map(|point| AnchoredEntity {
                    id: point.id.clone(),
                    kind: point.kind,
                    coordinate: point.coordinate,
                }));
                entities
            }
        };
    }

    /// Session WorldOrigin, `None` until the first accepted fix
    pub fn origin(&self) -> Option<GeoCoordinate> {
        self.origin
    }

    pub fn entities(&self) -> &[AnchoredEntity] {
        &self.entities
    }

    pub fn is_anchored(&self) -> bool {
        self.origin.is_some()
    }

    /// Count of fixes dropped by the first-fix-only policy
    pub fn fixes_ignored(&self) -> u32 {
        self.fixes_ignored
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new(AnchorPolicy::default(), ConstellationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PointOfInterest;

    fn fix_at(lat: f64, lon: f64) -> GeoFix {
        GeoFix::new(GeoCoordinate::new(lat, lon))
    }

    #[test]
    fn test_first_fix_anchors_and_populates() {
        let mut tracker = PositionTracker::default();
        assert!(!tracker.is_anchored());
        assert!(tracker.entities().is_empty());

        assert!(tracker.on_fix(&fix_at(10.0, 20.0)));
        assert_eq!(tracker.origin(), Some(GeoCoordinate::new(10.0, 20.0)));
        assert!(!tracker.entities().is_empty());
    }

    #[test]
    fn test_second_fix_ignored_under_default_policy() {
        let mut tracker = PositionTracker::default();
        tracker.on_fix(&fix_at(10.0, 20.0));
        let entities_before = tracker.entities().to_vec();

        assert!(!tracker.on_fix(&fix_at(11.0, 21.0)));
        assert_eq!(tracker.origin(), Some(GeoCoordinate::new(10.0, 20.0)));
        assert_eq!(tracker.entities(), entities_before.as_slice());
        assert_eq!(tracker.fixes_ignored(), 1);
    }

    #[test]
    fn test_every_fix_policy_re_anchors() {
        let mut tracker =
            PositionTracker::new(AnchorPolicy::EveryFix, ConstellationConfig::default());
        tracker.on_fix(&fix_at(10.0, 20.0));
        let entities_before = tracker.entities().to_vec();

        assert!(tracker.on_fix(&fix_at(11.0, 21.0)));
        assert_eq!(tracker.origin(), Some(GeoCoordinate::new(11.0, 21.0)));
        assert_ne!(tracker.entities(), entities_before.as_slice());
        assert_eq!(tracker.fixes_ignored(), 0);
    }

    #[test]
    fn test_points_source_replaces_constellation() {
        let mut tracker = PositionTracker::default();
        tracker.set_points(&[PointOfInterest {
            id: "statue".to_string(),
            name: "Statue".to_string(),
            asset_ref: "models/statue.glb".to_string(),
            kind: EntityKind::InteractiveButton,
            coordinate: GeoCoordinate::new(10.0001, 20.0),
        }]);

        tracker.on_fix(&fix_at(10.0, 20.0));
        let entities = tracker.entities();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].kind, EntityKind::User);
        assert_eq!(entities[1].id, "statue");
    }

    #[test]
    fn test_set_points_after_anchor_rebuilds() {
        let mut tracker = PositionTracker::default();
        tracker.on_fix(&fix_at(10.0, 20.0));
        let constellation_len = tracker.entities().len();

        tracker.set_points(&[]);
        // Only the self-marker remains
        assert_eq!(tracker.entities().len(), 1);
        assert_ne!(tracker.entities().len(), constellation_len);
        // Origin is untouched by a source change
        assert_eq!(tracker.origin(), Some(GeoCoordinate::new(10.0, 20.0)));
    }
}
