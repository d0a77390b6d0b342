//! # PlateKit Layout
//!
//! Automatic object placement and sequential print ordering for a single
//! build platform.
//!
//! ## Pipeline
//!
//! ```text
//! Scene::add
//!   ├── placement   (candidate spots around existing objects)
//!   └── resolver    (push colliding pairs apart, re-anchor schematics)
//!
//! merge / arrange_all / center_all  ── re-run the resolver as needed
//!
//! Scene::print_order
//!   └── PrintOrderFinder (directional hit map + depth-first search)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use platekit_core::{PlacedObject, Vec3};
//! use platekit_layout::Scene;
//!
//! let mut scene: Scene = Scene::new();
//! scene.add(PlacedObject::new("bracket", Vec3::new(20.0, 10.0, 5.0)));
//! scene.add(PlacedObject::new("clip", Vec3::new(8.0, 8.0, 3.0)));
//!
//! let order = scene.print_order();
//! assert!(order.is_some());
//! ```

pub mod print_order;
pub mod scene;

pub use print_order::PrintOrderFinder;
pub use scene::{BedClips, Scene};
