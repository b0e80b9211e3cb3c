#![warn(missing_docs)]

//! Math types for brushforge.
//!
//! Thin wrappers around nalgebra providing the handful of domain types the
//! brush generators need: points, vectors, axis-aligned boxes, tolerance
//! constants and arc placement.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A point in 3D world space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D world space.
pub type Vec3 = Vector3<f64>;

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis (up).
    Z,
}

impl Axis {
    /// Component index of this axis (0, 1 or 2).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Convert an angle in degrees to radians.
pub fn deg_to_rad(angle: f64) -> f64 {
    angle.to_radians()
}

/// Place a point on a horizontal arc around `centre`.
///
/// Angle zero sits at `+radius` along Y and the arc sweeps towards `-X`
/// as the angle grows, so `π/2` lands at `-radius` along X. Z is copied
/// from `centre`.
pub fn arc_point(centre: &Point3, radius: f64, angle: f64) -> Point3 {
    let (s, c) = angle.sin_cos();
    Point3::new(centre.x - radius * s, centre.y + radius * c, centre.z)
}

/// An axis-aligned box with `min[i] <= max[i]` on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb {
    /// Create a box from its corners, or `None` when `min > max` on any axis.
    pub fn new(min: Point3, max: Point3) -> Option<Self> {
        if (0..3).all(|i| min[i] <= max[i]) {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Size along one axis.
    pub fn extent(&self, axis: Axis) -> f64 {
        self.max[axis.index()] - self.min[axis.index()]
    }

    /// Centre point.
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// True when the box has (near) zero thickness along any axis.
    pub fn is_flat(&self, tol: &Tolerance) -> bool {
        [Axis::X, Axis::Y, Axis::Z]
            .iter()
            .any(|&a| tol.is_zero(self.extent(a)))
    }

    /// The same box moved by `dz` along Z.
    pub fn raised(&self, dz: f64) -> Self {
        let offset = Vec3::new(0.0, 0.0, dz);
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// Tolerance for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in world units.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-6 units).
    pub const DEFAULT: Self = Self { linear: 1e-6 };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
