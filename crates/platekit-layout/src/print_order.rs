//! Sequential print ordering.
//!
//! When objects are printed one after another, the head must never sweep
//! over an object that is already finished. `hits[a][b]` records whether
//! printing `a` brings the head's clearance zone over `b`, looking only at
//! the side the head approaches from. A valid order never prints an object
//! after one it would hit.
//!
//! The search is a depth-first walk over partial orders with an explicit
//! stack. Candidates with fewer interactions are tried first; the first
//! complete order wins.

use crate::scene::Scene;
use platekit_core::{Placeable, Vec2};
use tracing::debug;

/// Subtracted from the swept clearance so touching zones do not count
pub const SWEEP_EPSILON: f64 = 0.1;

/// Partial search state: objects ordered so far and objects left.
#[derive(Debug, Clone)]
struct OrderingState {
    order: Vec<usize>,
    todo: Vec<usize>,
}

/// Computes a collision-free print sequence for a scene.
pub struct PrintOrderFinder<'a, O: Placeable> {
    objects: &'a [O],
    candidates: Vec<usize>,
    offset: Vec2,
    left_to_right: bool,
    front_to_back: bool,
    too_tall: bool,
}

impl<'a, O: Placeable> PrintOrderFinder<'a, O> {
    /// Collects the objects that are on the platform.
    pub fn new(scene: &'a Scene<O>) -> Self {
        let objects = scene.objects();
        let candidates: Vec<usize> = (0..objects.len())
            .filter(|&n| scene.on_platform(&objects[n]))
            .collect();
        let too_tall = candidates.len() > 1
            && candidates
                .iter()
                .any(|&n| objects[n].size().z > scene.gantry_height());

        Self {
            objects,
            candidates,
            offset: scene.object_extent() - Vec2::repeat(SWEEP_EPSILON),
            left_to_right: scene.left_to_right(),
            front_to_back: scene.front_to_back(),
            too_tall,
        }
    }

    /// Whether printing `add` makes the head sweep over `idx`.
    pub fn check_hit(&self, add: usize, idx: usize) -> bool {
        let add_pos = self.objects[add].position();
        let add_size = self.objects[add].size();
        let pos = self.objects[idx].position();
        let size = self.objects[idx].size();

        let clear_x = if self.left_to_right {
            add_pos.x - add_size.x / 2.0 - self.offset.x >= pos.x + size.x / 2.0
        } else {
            add_pos.x + add_size.x / 2.0 + self.offset.x <= pos.x - size.x / 2.0
        };
        if clear_x {
            return false;
        }

        let clear_y = if self.front_to_back {
            add_pos.y - add_size.y / 2.0 - self.offset.y >= pos.y + size.y / 2.0
        } else {
            add_pos.y + add_size.y / 2.0 + self.offset.y <= pos.y - size.y / 2.0
        };
        !clear_y
    }

    /// Runs the search.
    ///
    /// Returns `None` when no order exists or when a tall object shares the
    /// platform with others. Indices refer to the scene's object list.
    pub fn find(&self) -> Option<Vec<usize>> {
        if self.too_tall {
            debug!("Object taller than the gantry shares the platform, no print order");
            return None;
        }
        if self.candidates.is_empty() {
            return Some(Vec::new());
        }

        let hits = self.hit_map();
        let degree = |n: usize| self.candidates.iter().filter(|&&b| hits[n][b]).count();

        let mut initial = self.candidates.clone();
        initial.sort_by_key(|&n| degree(n));

        let hits_any = |add: usize, others: &[usize]| others.iter().any(|&idx| hits[add][idx]);
        let blocked = |add: usize, others: &[usize]| {
            others.iter().any(|&idx| idx != add && hits[idx][add])
        };

        let mut stack = vec![OrderingState {
            order: Vec::new(),
            todo: initial,
        }];
        let mut expanded = 0usize;

        while let Some(current) = stack.pop() {
            expanded += 1;
            for &add in &current.todo {
                if hits_any(add, &current.order) || blocked(add, &current.todo) {
                    continue;
                }
                let todo: Vec<usize> = current.todo.iter().copied().filter(|&n| n != add).collect();
                let mut order = current.order.clone();
                order.push(add);
                if todo.is_empty() {
                    debug!("Print order found after expanding {} states", expanded);
                    return Some(order);
                }
                stack.push(OrderingState { order, todo });
            }
        }

        debug!("No print order after expanding {} states", expanded);
        None
    }

    /// Pairwise hit relation over the candidate objects.
    pub fn hit_map(&self) -> Vec<Vec<bool>> {
        let n = self.objects.len();
        let mut hits = vec![vec![false; n]; n];
        for &a in &self.candidates {
            for &b in &self.candidates {
                hits[a][b] = self.check_hit(a, b);
            }
        }
        hits
    }

    /// Indices of the objects taking part in the ordering
    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }
}
