#![warn(missing_docs)]

//! Faces and convex brushes for brushforge.
//!
//! A [`Face`] is three ordered points plus a [`TextureProjection`]; a
//! [`Brush`] is a validated set of faces whose half-spaces intersect in a
//! convex solid. Brushes are only obtainable through [`BrushBuilder::build`].
//!
//! # Example
//!
//! ```
//! use brushforge_brush::build_bounding_cube;
//! use brushforge_math::{Aabb, Point3};
//!
//! let bounds = Aabb::new(Point3::origin(), Point3::new(64.0, 64.0, 16.0)).unwrap();
//! let brush = build_bounding_cube(&bounds, "textures/common/caulk").unwrap();
//! assert_eq!(brush.len(), 6);
//! assert!(brush.contains_point(&bounds.center()));
//! ```

mod brush;
mod cube;
mod face;
mod texture;

pub use brush::{Brush, BrushBuilder};
pub use cube::{
    axis_aligned_builder, build_axis_aligned_brush, build_bounding_cube, Corner, Corners,
    CubeFace, FaceMask,
};
pub use face::{make_face, make_face_scaled, Face, FacePlane, ScaleAxes, TexelRange};
pub use texture::{
    ShaderLookup, TextureInfo, TextureLookupError, TextureProjection, CONTENTS_DETAIL,
    DEFAULT_SCALE,
};

use thiserror::Error;

/// Errors from building faces and brushes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrushError {
    /// The brush has no faces.
    #[error("brush has no faces")]
    Empty,

    /// A face's three points are collinear and define no plane.
    #[error("face {0} has collinear points")]
    CollinearPoints(usize),

    /// Two faces lie on the same oriented plane.
    #[error("faces {0} and {1} share a plane")]
    DuplicatePlane(usize, usize),

    /// A scaled texture axis spans less than one whole unit.
    #[error("texture extent along {axis} truncates to zero")]
    DegenerateExtent {
        /// `'u'` or `'v'`.
        axis: char,
    },

    /// Texture resolution failed.
    #[error(transparent)]
    Texture(#[from] TextureLookupError),
}
