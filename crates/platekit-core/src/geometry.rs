//! Planar footprint geometry.
//!
//! All objects are axis-aligned to the platform, so every collision and
//! boundary question reduces to comparing centred rectangles with a
//! per-axis clearance margin.

use nalgebra::{Matrix3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Planar vector in platform coordinates (mm, origin at platform centre).
pub type Vec2 = Vector2<f64>;

/// Spatial vector: width (x), depth (y), height (z).
pub type Vec3 = Vector3<f64>;

/// A centred, axis-aligned rectangle on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub center: Vec2,
    pub size: Vec2,
}

impl Footprint {
    /// Create a footprint from its centre and full extents
    pub fn new(center: Vec2, size: Vec2) -> Self {
        debug_assert!(
            size.x.is_finite() && size.y.is_finite(),
            "footprint size must be finite, got {size:?}"
        );
        Self { center, size }
    }

    /// Half extents on each axis
    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Lower-left corner
    pub fn min(&self) -> Vec2 {
        self.center - self.half_size()
    }

    /// Upper-right corner
    pub fn max(&self) -> Vec2 {
        self.center + self.half_size()
    }

    /// Grow the footprint by `margin` on every side of each axis
    pub fn expanded(&self, margin: Vec2) -> Self {
        Self {
            center: self.center,
            size: self.size + margin * 2.0,
        }
    }

    /// True iff the two rectangles, kept apart by `clearance` per axis,
    /// still intersect on both axes.
    ///
    /// The comparison is strict: rectangles separated by exactly the
    /// clearance do not overlap.
    pub fn overlaps(&self, other: &Footprint, clearance: Vec2) -> bool {
        let diff = self.center - other.center;
        diff.x.abs() < (self.size.x + other.size.x) / 2.0 + clearance.x
            && diff.y.abs() < (self.size.y + other.size.y) / 2.0 + clearance.y
    }

    /// True iff `self` lies completely inside `other` (edges may touch)
    pub fn within(&self, other: &Footprint) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x >= b_min.x && a_max.x <= b_max.x && a_min.y >= b_min.y && a_max.y <= b_max.y
    }
}

/// Axis-aligned bounds of one mesh part in object-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl PartBounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Bounds of a box with the given extents, centred on the local origin
    pub fn centered(size: Vec3) -> Self {
        Self {
            min: -size / 2.0,
            max: size / 2.0,
        }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Smallest bounds containing both
    pub fn union(&self, other: &PartBounds) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Bounds of the eight corners after applying `matrix`
    pub fn transformed(&self, matrix: &Matrix3<f64>) -> Self {
        let mut min = Vec3::repeat(f64::INFINITY);
        let mut max = Vec3::repeat(f64::NEG_INFINITY);
        for corner in 0..8 {
            let p = Vec3::new(
                if corner & 1 == 0 { self.min.x } else { self.max.x },
                if corner & 2 == 0 { self.min.y } else { self.max.y },
                if corner & 4 == 0 { self.min.z } else { self.max.z },
            );
            let q = matrix * p;
            min = min.inf(&q);
            max = max.sup(&q);
        }
        Self { min, max }
    }
}
