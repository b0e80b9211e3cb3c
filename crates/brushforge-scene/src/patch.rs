//! Curved-surface patches built from host prefabs.

use brushforge_math::{Aabb, Point3};
use serde::{Deserialize, Serialize};

/// Prefab shapes the host patch subsystem can construct from a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchPrefab {
    /// Quarter-round bevel filling one vertical corner of the box.
    Bevel,
}

/// One patch control vertex with texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Position.
    pub position: Point3,
    /// Texture coordinates.
    pub st: [f64; 2],
}

/// A biquadratic patch: a row-major grid of control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    /// Prefab it was built from.
    pub prefab: PatchPrefab,
    /// Box the prefab was fitted to.
    pub bounds: Aabb,
    /// Shader name.
    pub texture: String,
    /// Columns in the control grid.
    pub width: usize,
    /// Rows in the control grid.
    pub height: usize,
    /// Control points, `height` rows of `width`.
    pub control: Vec<ControlPoint>,
}

impl Patch {
    /// Bevel prefab for `bounds`, as constructed in the top-down (XY) view.
    ///
    /// Rows run bottom to top; each row walks (min.x, min.y) ->
    /// (max.x, min.y) -> (max.x, max.y).
    pub fn bevel(bounds: &Aabb, texture: &str) -> Self {
        let (lo, hi) = (bounds.min, bounds.max);
        let mid_z = (lo.z + hi.z) * 0.5;
        let columns = [(lo.x, lo.y), (hi.x, lo.y), (hi.x, hi.y)];

        let mut control = Vec::with_capacity(9);
        for (row, z) in [lo.z, mid_z, hi.z].into_iter().enumerate() {
            for (col, &(x, y)) in columns.iter().enumerate() {
                control.push(ControlPoint {
                    position: Point3::new(x, y, z),
                    st: [col as f64 * 0.5, row as f64 * 0.5],
                });
            }
        }

        Self {
            prefab: PatchPrefab::Bevel,
            bounds: *bounds,
            texture: texture.to_string(),
            width: 3,
            height: 3,
            control,
        }
    }

    /// Control point at `(row, col)`.
    pub fn control_at(&self, row: usize, col: usize) -> Option<&ControlPoint> {
        if col >= self.width {
            return None;
        }
        self.control.get(row * self.width + col)
    }
}
