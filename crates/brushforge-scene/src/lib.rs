#![warn(missing_docs)]

//! Scene-side types for brushforge.
//!
//! Generators talk to the host editor through two narrow seams:
//! [`SceneTarget`] for inserting finished objects and
//! [`brushforge_brush::ShaderLookup`] for texture dimensions.
//! [`MapDocument`] and [`TextureCatalog`] are in-memory implementations
//! used by the CLI and by tests; documents can be saved as JSON or as
//! `.map` text.

mod catalog;
mod document;
mod entity;
mod map_format;
mod patch;
mod target;

pub use catalog::TextureCatalog;
pub use document::MapDocument;
pub use entity::Entity;
pub use map_format::{save_map, write_map};
pub use patch::{ControlPoint, Patch, PatchPrefab};
pub use target::{SceneInsertionError, SceneTarget, WorldObject};
