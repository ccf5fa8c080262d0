//! Points-of-interest store seam
//!
//! The anchoring core is agnostic to how entities are sourced; this module
//! is the seam to the external CRUD store. The in-memory implementation
//! backs tests and the demo binary, loading the same camelCase JSON shape
//! the store's REST collaborator would serve.

use crate::core::{EntityKind, GeoCoordinate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failure taxonomy
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no point of interest with id '{id}'")]
    NotFound { id: String },
    #[error("a point of interest with id '{id}' already exists")]
    DuplicateId { id: String },
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One stored point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterest {
    pub id: String,
    pub name: String,
    /// Reference to the 3D asset the renderer should load
    pub asset_ref: String,
    pub kind: EntityKind,
    pub coordinate: GeoCoordinate,
}

/// CRUD access to the points-of-interest collection
pub trait PointStore {
    fn list(&self) -> StoreResult<Vec<PointOfInterest>>;
    fn create(&mut self, point: PointOfInterest) -> StoreResult<()>;
    fn delete(&mut self, id: &str) -> StoreResult<()>;
}

/// In-memory reference store
pub struct InMemoryPointStore {
    points: Vec<PointOfInterest>,
}

impl InMemoryPointStore {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Load a store from a JSON array of points
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let content = fs::read_to_string(path)?;
        let points: Vec<PointOfInterest> = serde_json::from_str(&content)?;
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for InMemoryPointStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PointStore for InMemoryPointStore {
    fn list(&self) -> StoreResult<Vec<PointOfInterest>> {
        Ok(self.points.clone())
    }

    fn create(&mut self, point: PointOfInterest) -> StoreResult<()> {
        if self.points.iter().any(|existing| existing.id == point.id) {
            return Err(StoreError::DuplicateId { id: point.id });
        }
        self.points.push(point);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> StoreResult<()> {
        let before = self.points.len();
        self.points.retain(|point| point.id != id);
        if self.points.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_point(id: &str) -> PointOfInterest {
        PointOfInterest {
            id: id.to_string(),
            name: format!("point {}", id),
            asset_ref: "models/marker.glb".to_string(),
            kind: EntityKind::StaticProp,
            coordinate: GeoCoordinate::new(47.6, -122.3),
        }
    }

    #[test]
    fn test_create_list_delete() {
        let mut store = InMemoryPointStore::new();
        assert!(store.is_empty());

        store.create(sample_point("a")).unwrap();
        store.create(sample_point("b")).unwrap();
        assert_eq!(store.list().unwrap().len(), 2);

        store.delete("a").unwrap();
        let remaining = store.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "b");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = InMemoryPointStore::new();
        store.create(sample_point("a")).unwrap();
        let result = store.create(sample_point("a"));
        assert!(matches!(result, Err(StoreError::DuplicateId { .. })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_missing_id() {
        let mut store = InMemoryPointStore::new();
        let result = store.delete("ghost");
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let json = r#"[
            {
                "id": "statue",
                "name": "Statue",
                "assetRef": "models/statue.glb",
                "kind": "interactiveButton",
                "coordinate": { "latitude_deg": 47.6, "longitude_deg": -122.3 }
            }
        ]"#;
        let points: Vec<PointOfInterest> = serde_json::from_str(json).unwrap();
        assert_eq!(points[0].asset_ref, "models/statue.glb");
        assert_eq!(points[0].kind, EntityKind::InteractiveButton);
    }
}
