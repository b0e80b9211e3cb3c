#![warn(missing_docs)]

//! Parametric brush generation for Quake 3 style level editors.
//!
//! Re-exports the kernel crates and adds [`BrushforgeConfig`], the TOML
//! settings file shared by front ends.
//!
//! # Example
//!
//! ```
//! use brushforge::{build_stair_step, Aabb, Direction, MapDocument, Point3, StairTextures};
//!
//! let config = brushforge::BrushforgeConfig::default();
//! let bounds = Aabb::new(Point3::origin(), Point3::new(64.0, 32.0, 16.0)).unwrap();
//! let textures = StairTextures { main: "textures/base/floor", riser: "textures/base/trim" };
//!
//! let mut doc = MapDocument::new();
//! build_stair_step(&mut doc, &config.shapes, Direction::North, &bounds, &textures).unwrap();
//! assert!(doc.to_map_string().contains("base/trim"));
//! ```

pub use brushforge_brush;
pub use brushforge_math;
pub use brushforge_scene;
pub use brushforge_shapes;

pub use brushforge_brush::{
    build_axis_aligned_brush, build_bounding_cube, make_face, make_face_scaled, Brush,
    BrushBuilder, BrushError, Face, FaceMask, ScaleAxes, ShaderLookup, TexelRange,
    TextureProjection,
};
pub use brushforge_math::{Aabb, Point3};
pub use brushforge_scene::{
    save_map, Entity, MapDocument, Patch, SceneInsertionError, SceneTarget, TextureCatalog,
    WorldObject,
};
pub use brushforge_shapes::{
    build_corner_stairs, build_door_pair, build_stair_step, build_stair_step_wedge, build_wedge,
    make_bevel, Direction, DoorAxis, DoorParams, ShapeConfig, ShapeError, StairTextures,
};

mod config;

pub use config::{BrushforgeConfig, ConfigError};
