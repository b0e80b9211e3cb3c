//! Scene mutation seam.

use brushforge_brush::Brush;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Entity, Patch};

/// The host rejected an object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("scene rejected {kind}: {reason}")]
pub struct SceneInsertionError {
    /// What was being inserted (`"brush"`, `"patch"`, `"entity"`).
    pub kind: &'static str,
    /// Host-supplied reason.
    pub reason: String,
}

impl SceneInsertionError {
    /// Create an insertion error.
    pub fn new(kind: &'static str, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

/// A finished primitive that lives directly in the world container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorldObject {
    /// A convex brush.
    Brush(Brush),
    /// A curved-surface patch.
    Patch(Patch),
}

impl WorldObject {
    /// Short kind name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            WorldObject::Brush(_) => "brush",
            WorldObject::Patch(_) => "patch",
        }
    }
}

/// The host document a generator writes into.
///
/// Every call transfers ownership of a fully built object; nothing is
/// mutated after insertion.
pub trait SceneTarget {
    /// Insert into the active world container (worldspawn).
    fn insert_into_world(&mut self, object: WorldObject) -> Result<(), SceneInsertionError>;

    /// Insert an entity, with its brushes attached, at the scene root.
    fn insert_into_root(&mut self, entity: Entity) -> Result<(), SceneInsertionError>;
}

impl<T: SceneTarget + ?Sized> SceneTarget for &mut T {
    fn insert_into_world(&mut self, object: WorldObject) -> Result<(), SceneInsertionError> {
        (**self).insert_into_world(object)
    }

    fn insert_into_root(&mut self, entity: Entity) -> Result<(), SceneInsertionError> {
        (**self).insert_into_root(entity)
    }
}
