//! In-memory map document implementing [`SceneTarget`].

use brushforge_brush::Brush;
use serde::{Deserialize, Serialize};

use crate::target::{SceneInsertionError, SceneTarget, WorldObject};
use crate::Entity;

/// A level document: the world container plus root-level entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    /// Format version string.
    pub version: String,
    /// Brushes and patches owned by worldspawn, in insertion order.
    pub world: Vec<WorldObject>,
    /// Root-level entities, in insertion order.
    pub entities: Vec<Entity>,
}

impl Default for MapDocument {
    fn default() -> Self {
        Self {
            version: "0.1".to_string(),
            world: Vec::new(),
            entities: Vec::new(),
        }
    }
}

impl MapDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// World brushes, skipping patches.
    pub fn world_brushes(&self) -> impl Iterator<Item = &Brush> {
        self.world.iter().filter_map(|o| match o {
            WorldObject::Brush(b) => Some(b),
            WorldObject::Patch(_) => None,
        })
    }

    /// Number of world objects plus entities.
    pub fn object_count(&self) -> usize {
        self.world.len() + self.entities.len()
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl SceneTarget for MapDocument {
    fn insert_into_world(&mut self, object: WorldObject) -> Result<(), SceneInsertionError> {
        tracing::debug!(kind = object.kind(), index = self.world.len(), "insert into world");
        self.world.push(object);
        Ok(())
    }

    fn insert_into_root(&mut self, entity: Entity) -> Result<(), SceneInsertionError> {
        tracing::debug!(
            classname = entity.classname(),
            brushes = entity.brushes().len(),
            "insert entity at root"
        );
        self.entities.push(entity);
        Ok(())
    }
}
