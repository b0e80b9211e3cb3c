//! Convex brushes and their builder.

use brushforge_math::{Point3, Tolerance};
use serde::{Deserialize, Serialize};

use crate::face::{Face, FacePlane};
use crate::BrushError;

/// Accumulates faces for a brush under construction.
///
/// A builder can be extended freely; only [`BrushBuilder::build`] yields a
/// [`Brush`], so a half-built brush can never reach a scene.
#[derive(Debug, Clone, Default)]
pub struct BrushBuilder {
    faces: Vec<Face>,
}

impl BrushBuilder {
    /// Start an empty brush.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a face.
    pub fn push(&mut self, face: Face) -> &mut Self {
        self.faces.push(face);
        self
    }

    /// Append a face, builder style.
    pub fn with_face(mut self, face: Face) -> Self {
        self.faces.push(face);
        self
    }

    /// Number of faces added so far.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// True if no faces were added.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Validate the faces and freeze them into a [`Brush`].
    ///
    /// Only per-face checks are made. Whether the half-spaces enclose any
    /// volume is up to the caller: every generator derives its faces from
    /// the corners of a box with volume, which guarantees a non-empty solid.
    ///
    /// # Errors
    ///
    /// - [`BrushError::Empty`] if no face was added.
    /// - [`BrushError::CollinearPoints`] if a face's points define no plane.
    /// - [`BrushError::DuplicatePlane`] if two faces share an oriented plane.
    pub fn build(self) -> Result<Brush, BrushError> {
        if self.faces.is_empty() {
            return Err(BrushError::Empty);
        }

        let tol = Tolerance::DEFAULT;
        let mut planes: Vec<FacePlane> = Vec::with_capacity(self.faces.len());
        for (i, face) in self.faces.iter().enumerate() {
            let plane = face.plane().ok_or(BrushError::CollinearPoints(i))?;
            if let Some(j) = planes.iter().position(|p| p.coincides(&plane, &tol)) {
                return Err(BrushError::DuplicatePlane(j, i));
            }
            planes.push(plane);
        }

        Ok(Brush {
            faces: self.faces,
            planes,
        })
    }
}

/// A convex solid: the intersection of its faces' half-spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Face>", into = "Vec<Face>")]
pub struct Brush {
    faces: Vec<Face>,
    planes: Vec<FacePlane>,
}

impl Brush {
    /// Faces in emission order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Oriented planes, parallel to [`Brush::faces`].
    pub fn planes(&self) -> &[FacePlane] {
        &self.planes
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Always false for a built brush.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// True if `p` lies inside or on every face plane.
    pub fn contains_point(&self, p: &Point3) -> bool {
        let tol = Tolerance::DEFAULT;
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(p) <= tol.linear)
    }

    /// Texture names of all faces, in order.
    pub fn texture_names(&self) -> Vec<&str> {
        self.faces.iter().map(|f| f.texture.name.as_str()).collect()
    }
}

impl TryFrom<Vec<Face>> for Brush {
    type Error = BrushError;

    fn try_from(faces: Vec<Face>) -> Result<Self, Self::Error> {
        BrushBuilder { faces }.build()
    }
}

impl From<Brush> for Vec<Face> {
    fn from(brush: Brush) -> Self {
        brush.faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::make_face;

    fn tetra() -> BrushBuilder {
        let o = Point3::new(0.0, 0.0, 0.0);
        let x = Point3::new(8.0, 0.0, 0.0);
        let y = Point3::new(0.0, 8.0, 0.0);
        let z = Point3::new(0.0, 0.0, 8.0);
        BrushBuilder::new()
            .with_face(make_face(o, x, y, "t", false))
            .with_face(make_face(o, z, x, "t", false))
            .with_face(make_face(o, y, z, "t", false))
            .with_face(make_face(x, z, y, "t", false))
    }

    #[test]
    fn test_build_tetrahedron() {
        let brush = tetra().build().unwrap();
        assert_eq!(brush.len(), 4);
        assert!(brush.contains_point(&Point3::new(1.0, 1.0, 1.0)));
        assert!(!brush.contains_point(&Point3::new(8.0, 8.0, 8.0)));
        assert!(!brush.contains_point(&Point3::new(-1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(BrushBuilder::new().build(), Err(BrushError::Empty)));
    }

    #[test]
    fn test_collinear_rejected() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let b = tetra().with_face(make_face(p, p * 2.0, p * 3.0, "t", false));
        assert!(matches!(b.build(), Err(BrushError::CollinearPoints(4))));
    }

    #[test]
    fn test_duplicate_plane_rejected() {
        // same floor plane as face 0, different triad
        let f = make_face(
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(5.0, 1.0, 0.0),
            Point3::new(1.0, 3.0, 0.0),
            "other",
            false,
        );
        let mut b = tetra();
        b.push(f);
        assert!(matches!(b.build(), Err(BrushError::DuplicatePlane(0, 4))));
    }

    #[test]
    fn test_volume_is_not_checked() {
        // below z = 0 and above z = 4 at once
        let o = Point3::new(0.0, 0.0, 0.0);
        let x = Point3::new(8.0, 0.0, 0.0);
        let y = Point3::new(0.0, 8.0, 0.0);
        let up = Point3::new(0.0, 0.0, 4.0);
        let brush = BrushBuilder::new()
            .with_face(make_face(o, y, x, "t", false))
            .with_face(make_face(up, up + x.coords, up + y.coords, "t", false))
            .build()
            .unwrap();
        for z in [-1.0, 2.0, 5.0] {
            assert!(!brush.contains_point(&Point3::new(1.0, 1.0, z)));
        }
    }

    #[test]
    fn test_serde_roundtrip_revalidates() {
        let brush = tetra().build().unwrap();
        let json = serde_json::to_string(&brush).unwrap();
        let back: Brush = serde_json::from_str(&json).unwrap();
        assert_eq!(brush.faces(), back.faces());

        let bad = serde_json::to_string(&Vec::<Face>::new()).unwrap();
        assert!(serde_json::from_str::<Brush>(&bad).is_err());
    }
}
