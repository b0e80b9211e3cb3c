//! Box corner convention and the axis-aligned brush assembler.
//!
//! Corner labels used by every generator (v4 is never used):
//!
//! ```text
//!         v6 ------- v5
//!        /|         /|
//!      v4 ------- v7 |       z
//!       | v3 ------|- v8     | y
//!       | /        | /       |/
//!      v1 ------- v2         +---x
//! ```
//!
//! v1 = min, v5 = max, v2/v3 are min with x/y taken from max, v6/v7 are max
//! with x/y taken from min, v8 is max with z taken from min.

use brushforge_math::{Aabb, Point3};
use serde::{Deserialize, Serialize};

use crate::brush::{Brush, BrushBuilder};
use crate::face::make_face;
use crate::BrushError;

/// A named corner of an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// (min.x, min.y, min.z)
    V1,
    /// (max.x, min.y, min.z)
    V2,
    /// (min.x, max.y, min.z)
    V3,
    /// (max.x, max.y, max.z)
    V5,
    /// (min.x, max.y, max.z)
    V6,
    /// (max.x, min.y, max.z)
    V7,
    /// (max.x, max.y, min.z)
    V8,
}

/// The seven named corners of a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    bounds: Aabb,
}

impl Corners {
    /// Corners of `bounds`.
    pub fn new(bounds: &Aabb) -> Self {
        Self { bounds: *bounds }
    }

    /// Position of one corner.
    pub fn get(&self, corner: Corner) -> Point3 {
        let (lo, hi) = (self.bounds.min, self.bounds.max);
        match corner {
            Corner::V1 => lo,
            Corner::V2 => Point3::new(hi.x, lo.y, lo.z),
            Corner::V3 => Point3::new(lo.x, hi.y, lo.z),
            Corner::V5 => hi,
            Corner::V6 => Point3::new(lo.x, hi.y, hi.z),
            Corner::V7 => Point3::new(hi.x, lo.y, hi.z),
            Corner::V8 => Point3::new(hi.x, hi.y, lo.z),
        }
    }

    /// Positions of a corner triad, in order.
    pub fn triad(&self, corners: [Corner; 3]) -> [Point3; 3] {
        corners.map(|c| self.get(c))
    }
}

/// One of the six faces of an axis-aligned box, in assembler order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeFace {
    /// z = min.z, normal -Z.
    Bottom,
    /// x = min.x, normal -X.
    MinX,
    /// y = min.y, normal -Y.
    MinY,
    /// y = max.y, normal +Y.
    MaxY,
    /// x = max.x, normal +X.
    MaxX,
    /// z = max.z, normal +Z.
    Top,
}

impl CubeFace {
    /// All faces in emission order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Bottom,
        CubeFace::MinX,
        CubeFace::MinY,
        CubeFace::MaxY,
        CubeFace::MaxX,
        CubeFace::Top,
    ];

    /// Index into a [`FaceMask`].
    pub fn index(self) -> usize {
        match self {
            CubeFace::Bottom => 0,
            CubeFace::MinX => 1,
            CubeFace::MinY => 2,
            CubeFace::MaxY => 3,
            CubeFace::MaxX => 4,
            CubeFace::Top => 5,
        }
    }

    /// Corner triad whose winding gives this face an outward normal.
    pub fn triad(self) -> [Corner; 3] {
        use Corner::*;
        match self {
            CubeFace::Bottom => [V1, V2, V3],
            CubeFace::MinX => [V1, V3, V6],
            CubeFace::MinY => [V1, V7, V2],
            CubeFace::MaxY => [V5, V6, V3],
            CubeFace::MaxX => [V5, V2, V7],
            CubeFace::Top => [V5, V7, V6],
        }
    }
}

/// Selects which of the six box faces the assembler emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceMask(pub [bool; 6]);

impl FaceMask {
    /// Every face: a closed box.
    pub const ALL: Self = Self([true; 6]);

    /// Only the listed faces.
    pub fn only(faces: &[CubeFace]) -> Self {
        let mut mask = [false; 6];
        for f in faces {
            mask[f.index()] = true;
        }
        Self(mask)
    }

    /// True if `face` is enabled.
    pub fn contains(&self, face: CubeFace) -> bool {
        self.0[face.index()]
    }
}

impl Default for FaceMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Start a brush with the masked faces of `bounds`, all sharing `texture`.
///
/// The result is left open so callers can add further faces.
pub fn axis_aligned_builder(bounds: &Aabb, texture: &str, mask: FaceMask) -> BrushBuilder {
    let corners = Corners::new(bounds);
    let mut builder = BrushBuilder::new();
    for face in CubeFace::ALL.into_iter().filter(|f| mask.contains(*f)) {
        let [a, b, c] = corners.triad(face.triad());
        builder.push(make_face(a, b, c, texture, false));
    }
    builder
}

/// Build a brush from the masked faces of `bounds`.
pub fn build_axis_aligned_brush(
    bounds: &Aabb,
    texture: &str,
    mask: FaceMask,
) -> Result<Brush, BrushError> {
    axis_aligned_builder(bounds, texture, mask).build()
}

/// Build the closed six-sided box `bounds`.
pub fn build_bounding_cube(bounds: &Aabb, texture: &str) -> Result<Brush, BrushError> {
    build_axis_aligned_brush(bounds, texture, FaceMask::ALL)
}
