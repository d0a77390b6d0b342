//! Schematic anchoring.
//!
//! A schematic object (a fixture, an indicator LED, ...) is not placed on
//! its own. Its x/y anchor is stored in units of the parent's half size, so
//! `(1, 0)` sits on the parent's right edge whatever the parent's scale.

use platekit_core::{Placeable, Vec2, Vec3};

/// Absolute position of `child`'s anchor on `parent`.
pub(crate) fn anchored_position<O: Placeable>(child: &O, parent: &O) -> Vec2 {
    let relative = child.relative();
    let half = parent.size() / 2.0;
    parent.position() + Vec2::new(relative.x * half.x, relative.y * half.y)
}

/// Anchor offset that reproduces `child`'s current position on `parent`.
/// Axes where the parent has no extent keep their previous value.
pub(crate) fn relative_from_position<O: Placeable>(child: &O, parent: &O) -> Vec2 {
    let diff = child.position() - parent.position();
    let size = parent.size();
    let previous = child.relative();
    let axis = |d: f64, extent: f64, prev: f64| if extent != 0.0 { d * 2.0 / extent } else { prev };
    Vec2::new(
        axis(diff.x, size.x, previous.x),
        axis(diff.y, size.y, previous.y),
    )
}

/// The child does not touch the parent: move it back onto its anchor.
pub(crate) fn follow_parent<O: Placeable>(child: &mut O, parent: &O) {
    let position = anchored_position(child, parent);
    child.set_position(position);
    child.record_no_hit();
}

/// The child overlaps the parent: rest it on the parent's top surface and
/// remember where it was dropped, so free drags update the anchor. After a
/// scale the stored anchor wins over the current position.
pub(crate) fn settle_on_parent<O: Placeable>(child: &mut O, parent: &O, call_from_scale: bool) {
    if call_from_scale {
        let position = anchored_position(child, parent);
        child.set_position(position);
    }

    let lift = -parent.size().z - child.relative().z;
    child.set_draw_offset(Vec3::new(0.0, 0.0, lift));

    let relative = relative_from_position(child, parent);
    child.set_relative_xy(relative);
    child.record_hit();
}
