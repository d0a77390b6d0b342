//! Objects on the build platform.
//!
//! The layout engine never touches mesh data. It only needs the accessor
//! and mutator surface described by [`Placeable`]; the host mesh layer
//! implements it for its own object type. [`PlacedObject`] is the
//! implementation used by the driver binary and the tests.

use crate::error::{LayoutError, Result};
use crate::geometry::{Footprint, PartBounds, Vec2, Vec3};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of an object in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(Uuid);

impl ObjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accessor/mutator contract between the layout engine and the host's
/// object model.
pub trait Placeable {
    /// Identity used for "is this the same object" checks
    fn id(&self) -> ObjectId;

    /// Centre of the object on the platform
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);

    /// Bounding extents: width, depth, height
    fn size(&self) -> Vec3;

    /// Schematic objects follow a parent instead of being placed freely
    fn is_schematic(&self) -> bool;

    /// Anchor offset of a schematic object. x/y are in units of the
    /// parent's half size; z is a fixed vertical offset.
    fn relative(&self) -> Vec3;
    fn set_relative_xy(&mut self, relative: Vec2);

    /// Offset applied when rendering the object
    fn set_draw_offset(&mut self, offset: Vec3);

    /// Anchoring was triggered by an overlap with the parent
    fn record_hit(&mut self);

    /// Anchoring happened without an overlap
    fn record_no_hit(&mut self);

    /// Uniformly scale the object about its own centre
    fn apply_scale(&mut self, factor: f64);

    /// Take over every mesh part of `other`
    fn absorb(&mut self, other: Self)
    where
        Self: Sized;

    /// Planar footprint at the current position
    fn footprint(&self) -> Footprint {
        let size = self.size();
        Footprint::new(self.position(), Vec2::new(size.x, size.y))
    }
}

/// One mesh of an object, reduced to its local bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshPart {
    pub name: String,
    pub bounds: PartBounds,
}

impl MeshPart {
    pub fn new(name: impl Into<String>, bounds: PartBounds) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}

/// Reference implementation of [`Placeable`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedObject {
    id: ObjectId,
    pub name: String,
    parts: Vec<MeshPart>,
    matrix: Matrix3<f64>,
    size: Vec3,
    position: Vec2,
    schematic: bool,
    relative: Vec3,
    draw_offset: Vec3,
    hit_count: u32,
    no_hit_count: u32,
}

impl PlacedObject {
    /// Create a single-part object with the given extents
    pub fn new(name: impl Into<String>, size: Vec3) -> Self {
        debug_assert!(
            size.iter().all(|v| v.is_finite() && *v >= 0.0),
            "size must be finite and non-negative, got {size:?}"
        );
        let name = name.into();
        let part = MeshPart::new(name.clone(), PartBounds::centered(size));
        Self::assemble(name, vec![part])
    }

    /// Create an object from one or more mesh parts
    pub fn from_parts(name: impl Into<String>, parts: Vec<MeshPart>) -> Result<Self> {
        let name = name.into();
        if parts.is_empty() {
            return Err(LayoutError::EmptyObject { name });
        }
        for part in &parts {
            let size = part.bounds.size();
            if size.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(LayoutError::InvalidSize {
                    name,
                    reason: format!("part '{}' has extents {:?}", part.name, size),
                });
            }
        }
        Ok(Self::assemble(name, parts))
    }

    fn assemble(name: String, parts: Vec<MeshPart>) -> Self {
        let mut obj = Self {
            id: ObjectId::new(),
            name,
            parts,
            matrix: Matrix3::identity(),
            size: Vec3::zeros(),
            position: Vec2::zeros(),
            schematic: false,
            relative: Vec3::zeros(),
            draw_offset: Vec3::zeros(),
            hit_count: 0,
            no_hit_count: 0,
        };
        obj.process_matrix();
        obj
    }

    /// Turn this object into a schematic child with the given anchor offset
    pub fn into_schematic(mut self, relative: Vec3) -> Self {
        self.schematic = true;
        self.relative = relative;
        self
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn parts(&self) -> &[MeshPart] {
        &self.parts
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn draw_offset(&self) -> Vec3 {
        self.draw_offset
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn no_hit_count(&self) -> u32 {
        self.no_hit_count
    }

    /// Multiply the object matrix by `matrix` and refresh the size
    pub fn apply_matrix(&mut self, matrix: &Matrix3<f64>) {
        self.matrix *= matrix;
        self.process_matrix();
    }

    fn process_matrix(&mut self) {
        self.size = self
            .parts
            .iter()
            .map(|p| p.bounds.transformed(&self.matrix))
            .reduce(|a, b| a.union(&b))
            .map(|b| b.size())
            .unwrap_or_else(Vec3::zeros);
    }
}

impl Placeable for PlacedObject {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn size(&self) -> Vec3 {
        self.size
    }

    fn is_schematic(&self) -> bool {
        self.schematic
    }

    fn relative(&self) -> Vec3 {
        self.relative
    }

    fn set_relative_xy(&mut self, relative: Vec2) {
        self.relative.x = relative.x;
        self.relative.y = relative.y;
    }

    fn set_draw_offset(&mut self, offset: Vec3) {
        self.draw_offset = offset;
    }

    fn record_hit(&mut self) {
        self.hit_count += 1;
    }

    fn record_no_hit(&mut self) {
        self.no_hit_count += 1;
    }

    fn apply_scale(&mut self, factor: f64) {
        self.apply_matrix(&Matrix3::from_diagonal_element(factor));
    }

    fn absorb(&mut self, other: Self) {
        self.parts.extend(other.parts);
        self.process_matrix();
    }
}
