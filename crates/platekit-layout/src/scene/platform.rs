//! Platform bounds and machine-specific bed clip zones.

use super::Scene;
use platekit_core::{Footprint, Placeable, Vec2};

/// Clip zone width along x for machines with corner clips
pub const CLIP_ZONE_WIDTH: f64 = 25.0;
/// Clip zone depth along y for machines with corner clips
pub const CLIP_ZONE_DEPTH: f64 = 10.0;

/// Regions of the bed occupied by clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BedClips {
    /// Whole platform is usable
    None,
    /// A clip of the given size sits in each of the four corners
    Corners { width: f64, depth: f64 },
}

impl BedClips {
    /// Clip rule for a machine identifier
    pub fn for_machine_type(machine_type: &str) -> Self {
        match machine_type {
            "ultimaker2" => BedClips::Corners {
                width: CLIP_ZONE_WIDTH,
                depth: CLIP_ZONE_DEPTH,
            },
            _ => BedClips::None,
        }
    }
}

impl<O: Placeable> Scene<O> {
    /// Whether `obj`, grown by the size offsets, fits on the platform and
    /// clears the bed clips.
    pub fn on_platform(&self, obj: &O) -> bool {
        self.check_platform(&obj.footprint())
    }

    /// Footprint form of [`Scene::on_platform`]. Head offsets are not
    /// applied here.
    pub fn check_platform(&self, footprint: &Footprint) -> bool {
        let grown = footprint.expanded(self.size_offsets);
        let platform = Footprint::new(
            Vec2::zeros(),
            Vec2::new(self.machine_size.x, self.machine_size.y),
        );
        if !grown.within(&platform) {
            return false;
        }

        let (min, max) = (grown.min(), grown.max());
        let half = platform.half_size();

        match self.bed_clips {
            BedClips::None => true,
            BedClips::Corners { width, depth } => {
                let near_side = min.x < -half.x + width || max.x > half.x - width;
                let near_edge = min.y < -half.y + depth || max.y > half.y - depth;
                !(near_side && near_edge)
            }
        }
    }
}
