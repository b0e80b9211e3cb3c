#![warn(missing_docs)]

//! Parametric architectural brush generators.
//!
//! Each generator takes an axis-aligned box plus a few shape parameters,
//! builds one or more convex [`Brush`](brushforge_brush::Brush)es from direction-keyed face tables
//! and hands them to a
//! [`SceneTarget`](brushforge_scene::SceneTarget). All validation happens before the
//! first insertion.
//!
//! # Example
//!
//! ```
//! use brushforge_math::{Aabb, Point3};
//! use brushforge_scene::MapDocument;
//! use brushforge_shapes::{build_wedge, Direction, ShapeConfig};
//!
//! let bounds = Aabb::new(Point3::origin(), Point3::new(64.0, 64.0, 32.0)).unwrap();
//! let mut doc = MapDocument::new();
//! build_wedge(&mut doc, &ShapeConfig::default(), Direction::East, &bounds, true).unwrap();
//! assert_eq!(doc.world_brushes().next().unwrap().len(), 5);
//! ```

mod config;
mod direction;
mod door;
mod rules;
mod stairs;
mod wedge;

pub use config::ShapeConfig;
pub use direction::{Direction, DoorAxis};
pub use door::{build_door_pair, door_brushes, DoorParams};
pub use rules::{
    assemble, FaceRule, FaceTemplate, RoleTextures, TextureRole, STAIR_STEP, STAIR_STEP_WEDGE,
    WEDGE_DOWN, WEDGE_UP,
};
pub use stairs::{
    build_corner_stairs, build_stair_step, build_stair_step_wedge, corner_arc,
    corner_stair_brushes, make_bevel, stair_step_brush, stair_step_wedge_brush, ArcPoint,
    CornerStairs, StairTextures,
};
pub use wedge::{build_wedge, wedge_brush};

use brushforge_brush::BrushError;
use brushforge_math::{Aabb, Tolerance};
use brushforge_scene::SceneInsertionError;
use thiserror::Error;

/// Errors from the shape generators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A parameter is out of range or the box is degenerate.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A face or brush could not be built.
    #[error(transparent)]
    Brush(#[from] BrushError),

    /// The scene refused an object.
    #[error(transparent)]
    Scene(#[from] SceneInsertionError),
}

/// Reject boxes with no volume.
pub(crate) fn require_volume(bounds: &Aabb) -> Result<(), ShapeError> {
    if bounds.is_flat(&Tolerance::DEFAULT) {
        return Err(ShapeError::InvalidParameter(format!(
            "box has no volume: {bounds:?}"
        )));
    }
    Ok(())
}
