//! # PlateKit Core
//!
//! Core types shared by the PlateKit crates: planar geometry, the
//! [`Placeable`] contract the layout engine consumes from the host's
//! mesh layer, a reference [`PlacedObject`], and the error type.

pub mod error;
pub mod geometry;
pub mod object;

pub use error::{LayoutError, Result};
pub use geometry::{Footprint, PartBounds, Vec2, Vec3};
pub use object::{MeshPart, ObjectId, Placeable, PlacedObject};
