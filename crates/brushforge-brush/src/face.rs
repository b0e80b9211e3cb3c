//! Brush faces and the face builder.

use brushforge_math::{Point3, Tolerance, Vec3};
use serde::{Deserialize, Serialize};

use crate::texture::{ShaderLookup, TextureLookupError, TextureProjection, CONTENTS_DETAIL};
use crate::BrushError;

/// An oriented plane `normal · p = distance` with a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePlane {
    /// Outward unit normal.
    pub normal: Vec3,
    /// Signed distance from the origin along `normal`.
    pub distance: f64,
}

impl FacePlane {
    /// Signed distance of `p` from the plane (positive = outside the brush).
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) - self.distance
    }

    /// True if both planes are the same oriented plane within tolerance.
    pub fn coincides(&self, other: &FacePlane, tol: &Tolerance) -> bool {
        (self.normal - other.normal).norm() < tol.linear
            && tol.is_zero(self.distance - other.distance)
    }
}

/// One bounding plane of a brush: three ordered points plus a projection.
///
/// The outward normal is `(c - a) × (b - a)`; the solid lies on the
/// negative side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Plane points in winding order.
    pub points: [Point3; 3],
    /// Texture projection for the face.
    pub texture: TextureProjection,
}

impl Face {
    /// The face's oriented plane, or `None` when the points are collinear.
    pub fn plane(&self) -> Option<FacePlane> {
        let [a, b, c] = self.points;
        let n = (c - a).cross(&(b - a));
        let len = n.norm();
        if len < Tolerance::DEFAULT.linear {
            return None;
        }
        let normal = n / len;
        Some(FacePlane {
            normal,
            distance: normal.dot(&a.coords),
        })
    }
}

/// Build a face with a default projection, optionally flagged as detail.
pub fn make_face(a: Point3, b: Point3, c: Point3, texture: &str, detail: bool) -> Face {
    let mut projection = TextureProjection::new(texture);
    if detail {
        projection.contents |= CONTENTS_DETAIL;
    }
    Face {
        points: [a, b, c],
        texture: projection,
    }
}

/// Which texture axes [`make_face_scaled`] fits to the face extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleAxes {
    /// Fit the texture horizontally (u).
    pub horizontal: bool,
    /// Fit the texture vertically (v).
    pub vertical: bool,
}

impl ScaleAxes {
    /// Scale along both axes.
    pub const BOTH: Self = Self {
        horizontal: true,
        vertical: true,
    };
}

/// World-space extent a scaled texture is fitted to.
///
/// Swapping `min_u`/`max_u` yields a negative scale, which mirrors the
/// texture horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexelRange {
    /// Start of the horizontal extent.
    pub min_u: f64,
    /// Start of the vertical extent.
    pub min_v: f64,
    /// End of the horizontal extent.
    pub max_u: f64,
    /// End of the vertical extent.
    pub max_v: f64,
}

impl TexelRange {
    /// Create a range from `(min_u, min_v)` to `(max_u, max_v)`.
    pub fn new(min_u: f64, min_v: f64, max_u: f64, max_v: f64) -> Self {
        Self {
            min_u,
            min_v,
            max_u,
            max_v,
        }
    }
}

/// Integer modulus for a texture shift: both sides truncated toward zero,
/// remainder takes the sign of `anchor`.
fn truncated_rem(anchor: f64, extent: f64) -> f64 {
    (anchor.trunc() as i64 % extent.trunc() as i64) as f64
}

fn check_extent(extent: f64, axis: char) -> Result<(), BrushError> {
    if extent.trunc() as i64 == 0 {
        return Err(BrushError::DegenerateExtent { axis });
    }
    Ok(())
}

/// Build a face whose texture is scaled to tile exactly once across `range`.
///
/// Horizontal shift anchors to `max_u`, vertical shift to `min_v`. Shifts use
/// truncating integer remainders, so negative anchors keep their sign.
///
/// # Errors
///
/// - [`BrushError::DegenerateExtent`] when a requested axis truncates to a
///   zero-width extent.
/// - [`BrushError::Texture`] when the texture cannot be resolved or has no
///   pixel dimensions; callers usually fall back to [`make_face`].
pub fn make_face_scaled(
    shaders: &impl ShaderLookup,
    points: [Point3; 3],
    texture: &str,
    axes: ScaleAxes,
    range: TexelRange,
) -> Result<Face, BrushError> {
    let width = range.max_u - range.min_u;
    let height = range.max_v - range.min_v;
    if axes.horizontal {
        check_extent(width, 'u')?;
    }
    if axes.vertical {
        check_extent(height, 'v')?;
    }

    let info = shaders.resolve(texture)?;
    if info.width == 0 || info.height == 0 {
        return Err(TextureLookupError::NoDimensions(texture.to_string()).into());
    }

    let [a, b, c] = points;
    let mut face = make_face(a, b, c, texture, false);

    if axes.horizontal {
        let scale = width / f64::from(info.width);
        face.texture.scale[0] = scale;
        face.texture.shift[0] = -truncated_rem(range.max_u, width) / scale;
    }

    if axes.vertical {
        let scale = height / f64::from(info.height);
        face.texture.scale[1] = scale;
        face.texture.shift[1] = truncated_rem(range.min_v, height) / scale;
    }

    Ok(face)
}
