//! Initial placement of a new object.
//!
//! Candidates hug each existing object on its eight compass sides, exactly
//! one clearance away. The free candidate closest to the platform centre
//! wins; candidates off the platform are penalised but still allowed so a
//! full platform keeps accepting objects.

use super::Scene;
use platekit_core::{Footprint, Placeable, Vec2};
use tracing::debug;

/// Score multiplier for candidates that fail the platform check
pub(crate) const OFF_PLATFORM_PENALTY: f64 = 3.0;

const COMPASS: [(f64, f64); 8] = [
    (1.0, 1.0),
    (0.0, 1.0),
    (-1.0, 1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, -1.0),
    (0.0, -1.0),
    (-1.0, -1.0),
];

impl<O: Placeable> Scene<O> {
    /// Candidate centres for an object of planar `size`.
    pub fn candidate_positions(&self, size: Vec2) -> Vec<Vec2> {
        if self.objects.is_empty() {
            return vec![Vec2::zeros()];
        }
        let extent = self.object_extent();
        self.objects
            .iter()
            .flat_map(|a| {
                let fp = a.footprint();
                let reach = (fp.size + size) / 2.0 + extent;
                COMPASS
                    .iter()
                    .map(move |&(sx, sy)| fp.center + reach.component_mul(&Vec2::new(sx, sy)))
            })
            .collect()
    }

    /// Moves `obj` to the best free candidate position. Leaves it where it
    /// is when no candidate is usable.
    ///
    /// With finite geometry some candidate is always free: the object whose
    /// edge reaches furthest out on an axis has nothing beyond it on that
    /// side.
    pub(crate) fn find_free_position_for(&self, obj: &mut O) {
        let size = obj.footprint().size;
        let extent = self.object_extent();

        let mut best: Option<(Vec2, f64)> = None;
        for candidate in self.candidate_positions(size) {
            // Neighbours with a corrupt position or size yield unusable spots
            if !candidate.iter().all(|v| v.is_finite()) {
                continue;
            }
            let fp = Footprint::new(candidate, size);
            let blocked = self
                .objects
                .iter()
                .filter(|a| a.id() != obj.id())
                .any(|a| a.footprint().overlaps(&fp, extent));
            if blocked {
                continue;
            }

            let mut score = candidate.norm();
            if !self.check_platform(&fp) {
                score *= OFF_PLATFORM_PENALTY;
            }
            if best.is_none_or(|(_, best_score)| score < best_score) {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((position, score)) => {
                debug!(
                    "Placing {} at ({:.2}, {:.2}), score {:.2}",
                    obj.id(),
                    position.x,
                    position.y,
                    score
                );
                obj.set_position(position);
            }
            None => debug!("No free position for {}, leaving it in place", obj.id()),
        }
    }
}
