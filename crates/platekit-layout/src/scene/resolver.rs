//! Overlap relaxation.
//!
//! Each pass scans ordered object pairs and fixes the first colliding pair
//! it finds by pushing both objects apart along the axis where they are
//! already furthest apart. Schematic objects are re-anchored on the way and
//! never pushed. The scan restarts after every push, so the iteration is
//! bounded by [`MAX_RESOLVE_PASSES`] rather than proven to converge.

use super::schematic::{follow_parent, settle_on_parent};
use super::Scene;
use platekit_core::{Placeable, Vec2};
use tracing::{debug, warn};

/// Upper bound on push passes per relaxation
pub const MAX_RESOLVE_PASSES: usize = 1000;

/// Extra gap left between two objects after a push
pub const SEPARATION_GAP: f64 = 0.1;

impl<O: Placeable> Scene<O> {
    /// Relaxes the layout until no two objects collide.
    ///
    /// Returns `false` when the pass cap was reached first; the layout is
    /// then left as it is.
    pub fn resolve(&mut self) -> bool {
        for pass in 0..MAX_RESOLVE_PASSES {
            if !self.resolve_one_pair() {
                debug!("Layout settled after {} push passes", pass);
                return true;
            }
        }
        warn!(
            "Layout of {} objects still overlapping after {} passes",
            self.objects.len(),
            MAX_RESOLVE_PASSES
        );
        false
    }

    /// One relaxation pass. Returns `true` if a pair was pushed apart.
    pub fn resolve_one_pair(&mut self) -> bool {
        let extent = self.object_extent();
        let call_from_scale = self.call_from_scale;
        let count = self.objects.len();

        for i in 0..count {
            for j in 0..count {
                if i == j {
                    continue;
                }
                let (a, b) = pair_mut(&mut self.objects, i, j);
                if a.id() == b.id() {
                    continue;
                }

                let hit = a.footprint().overlaps(&b.footprint(), extent);
                match (hit, a.is_schematic(), b.is_schematic()) {
                    (false, true, _) => follow_parent(a, b),
                    (false, false, true) => follow_parent(b, a),
                    (false, false, false) => {}
                    (true, true, _) => settle_on_parent(a, b, call_from_scale),
                    (true, false, true) => settle_on_parent(b, a, call_from_scale),
                    (true, false, false) => {
                        separate(a, b, extent);
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// Moves `a` and `b` symmetrically apart on the dominant axis so that
/// exactly the required clearance remains between them.
fn separate<O: Placeable>(a: &mut O, b: &mut O, extent: Vec2) {
    let mut a_pos = a.position();
    let mut b_pos = b.position();

    let mut diff = a_pos - b_pos;
    if diff.x == 0.0 && diff.y == 0.0 {
        diff.y = 1.0;
    }
    let axis = if diff.x.abs() > diff.y.abs() { 0 } else { 1 };

    let center = (a_pos[axis] + b_pos[axis]) / 2.0;
    let mut distance = (a.size()[axis] + b.size()[axis]) / 2.0 + SEPARATION_GAP + extent[axis];
    if diff[axis] < 0.0 {
        distance = -distance;
    }

    a_pos[axis] = center + distance / 2.0;
    b_pos[axis] = center - distance / 2.0;
    a.set_position(a_pos);
    b.set_position(b_pos);
}

fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
