//! Error handling for PlateKit
//!
//! Layout operations never fail because of geometry: an unplaceable object
//! stays where it is and an unsolvable print order is `None`. The errors
//! here cover misuse of the scene API, such as addressing an object that is
//! not in the scene.

use crate::object::ObjectId;
use thiserror::Error;

/// Layout error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The object is not part of the scene
    #[error("Object {0} not found in scene")]
    ObjectNotFound(ObjectId),

    /// An object cannot be merged into itself
    #[error("Cannot merge object {0} into itself")]
    SelfMerge(ObjectId),

    /// An object has no mesh parts to measure
    #[error("Object '{name}' has no mesh parts")]
    EmptyObject {
        /// Display name of the offending object.
        name: String,
    },

    /// A dimension is not a finite, non-negative number
    #[error("Invalid size for '{name}': {reason}")]
    InvalidSize {
        /// Display name of the offending object.
        name: String,
        /// Why the size was rejected.
        reason: String,
    },
}

/// Result type using LayoutError
pub type Result<T> = std::result::Result<T, LayoutError>;
