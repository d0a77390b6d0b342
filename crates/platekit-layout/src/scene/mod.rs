//! Build-plate scene.
//!
//! Owns the ordered list of objects and the machine values the layout
//! engine works with. The behaviour is split across submodules:
//! - `placement`: choosing a free spot for a new object
//! - `resolver`: pushing overlapping objects apart
//! - `schematic`: keeping schematic children anchored to their parent
//! - `platform`: platform bounds and bed clip zones
//!
//! Host operations (add, remove, merge, arrange, center, print order) live
//! here.

mod placement;
mod platform;
mod resolver;
mod schematic;

pub use platform::BedClips;

use crate::print_order::PrintOrderFinder;
use platekit_core::{LayoutError, ObjectId, Placeable, PlacedObject, Result, Vec2, Vec3};
use platekit_settings::LayoutConfig;
use tracing::{debug, warn};

/// Objects larger than this multiple of the platform are scaled down on insert
pub const OVERSIZE_FACTOR: f64 = 2.5;

/// Objects on the build platform plus the machine description.
#[derive(Debug, Clone)]
pub struct Scene<O: Placeable = PlacedObject> {
    objects: Vec<O>,
    machine_size: Vec3,
    size_offsets: Vec2,
    head_offsets: Vec2,
    left_to_right: bool,
    front_to_back: bool,
    gantry_height: f64,
    bed_clips: BedClips,
    call_from_scale: bool,
}

impl<O: Placeable> Default for Scene<O> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            machine_size: Vec3::new(100.0, 100.0, 100.0),
            size_offsets: Vec2::zeros(),
            head_offsets: Vec2::new(18.0, 18.0),
            left_to_right: false,
            front_to_back: true,
            gantry_height: 60.0,
            bed_clips: BedClips::None,
            call_from_scale: false,
        }
    }
}

impl<O: Placeable> Scene<O> {
    /// Creates an empty scene with the default 100mm machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scene configured from settings.
    pub fn from_config(config: &LayoutConfig) -> Self {
        let mut scene = Self::new();
        scene.apply_config(config);
        scene
    }

    /// Applies machine, head and margin settings to this scene.
    pub fn apply_config(&mut self, config: &LayoutConfig) {
        self.set_machine_size(Vec3::new(
            config.machine.width,
            config.machine.depth,
            config.machine.height,
        ));
        self.set_machine_type(&config.machine.machine_type);
        self.set_size_offsets(config.size_offsets.as_vec());
        let head = &config.head;
        self.set_head_size(
            head.x_min,
            head.x_max,
            head.y_min,
            head.y_max,
            head.gantry_height,
        );
    }

    /// Physical platform size; the platform is centred on the origin.
    pub fn set_machine_size(&mut self, size: Vec3) {
        self.machine_size = size;
    }

    pub fn machine_size(&self) -> Vec3 {
        self.machine_size
    }

    /// Selects the bed clip rule for the given machine identifier.
    pub fn set_machine_type(&mut self, machine_type: &str) {
        self.bed_clips = BedClips::for_machine_type(machine_type);
    }

    pub fn bed_clips(&self) -> BedClips {
        self.bed_clips
    }

    /// Margins caused by brim, skirt and similar.
    pub fn set_size_offsets(&mut self, offsets: Vec2) {
        self.size_offsets = offsets;
    }

    pub fn size_offsets(&self) -> Vec2 {
        self.size_offsets
    }

    /// Print-head extents around the nozzle and the gantry height.
    ///
    /// The side with the smaller extent is the clearance used for layout,
    /// and its sign decides the head travel direction per axis.
    pub fn set_head_size(
        &mut self,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        gantry_height: f64,
    ) {
        self.left_to_right = x_min < x_max;
        self.front_to_back = y_min < y_max;
        self.head_offsets = Vec2::new(x_min.min(x_max), y_min.min(y_max));
        self.gantry_height = gantry_height;
    }

    pub fn head_offsets(&self) -> Vec2 {
        self.head_offsets
    }

    pub fn left_to_right(&self) -> bool {
        self.left_to_right
    }

    pub fn front_to_back(&self) -> bool {
        self.front_to_back
    }

    pub fn gantry_height(&self) -> f64 {
        self.gantry_height
    }

    /// Clearance kept around every object: size offsets plus head offsets.
    pub fn object_extent(&self) -> Vec2 {
        self.size_offsets + self.head_offsets
    }

    /// Set by the host after a scale so that anchored children are first
    /// moved back to their stored relative spot. The resolver never clears it.
    pub fn set_call_from_scale(&mut self, value: bool) {
        self.call_from_scale = value;
    }

    pub fn is_call_from_scale(&self) -> bool {
        self.call_from_scale
    }

    pub fn objects(&self) -> &[O] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id() == id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&O> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut O> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// Whether two objects collide once the clearance is taken into account.
    /// An object never collides with itself.
    pub fn check_hit(&self, a: &O, b: &O) -> bool {
        a.id() != b.id() && a.footprint().overlaps(&b.footprint(), self.object_extent())
    }

    /// Adds an object: picks a free position, relaxes the layout and
    /// clamps absurdly large objects to the platform scale.
    pub fn add(&mut self, mut obj: O) -> ObjectId {
        self.find_free_position_for(&mut obj);
        let id = obj.id();
        self.objects.push(obj);
        self.resolve();

        let platform_max = self.machine_size.x.max(self.machine_size.y);
        if let Some(obj) = self.objects.iter_mut().find(|o| o.id() == id) {
            let size = obj.size();
            let object_max = size.x.max(size.y);
            if object_max > platform_max * OVERSIZE_FACTOR {
                let scale = platform_max * OVERSIZE_FACTOR / object_max;
                warn!("Object {} is {:.1}mm wide, scaling by {:.4}", id, object_max, scale);
                obj.apply_scale(scale);
            }
        }
        id
    }

    /// Appends an object at its current position without placement or
    /// relaxation, e.g. when restoring a saved plate.
    pub fn insert_unplaced(&mut self, obj: O) -> ObjectId {
        let id = obj.id();
        self.objects.push(obj);
        id
    }

    /// Removes an object, returning it.
    pub fn remove(&mut self, id: ObjectId) -> Option<O> {
        let index = self.index_of(id)?;
        Some(self.objects.remove(index))
    }

    /// Merges `absorb` into `keep` (dual extrusion): `keep` takes over the
    /// mesh parts, moves to the midpoint of both, and the layout is relaxed.
    pub fn merge(&mut self, keep: ObjectId, absorb: ObjectId) -> Result<()> {
        if keep == absorb {
            return Err(LayoutError::SelfMerge(keep));
        }
        if self.index_of(keep).is_none() {
            return Err(LayoutError::ObjectNotFound(keep));
        }
        let other = self.remove(absorb).ok_or(LayoutError::ObjectNotFound(absorb))?;
        let other_position = other.position();

        let target = self.get_mut(keep).ok_or(LayoutError::ObjectNotFound(keep))?;
        target.absorb(other);
        let midpoint = (target.position() + other_position) / 2.0;
        target.set_position(midpoint);
        debug!("Merged {} into {} at ({:.2}, {:.2})", absorb, keep, midpoint.x, midpoint.y);

        self.resolve();
        Ok(())
    }

    /// Resets every object to the origin and adds them again in order.
    pub fn arrange_all(&mut self) {
        let old = std::mem::take(&mut self.objects);
        for mut obj in old {
            obj.set_position(Vec2::zeros());
            self.add(obj);
        }
    }

    /// Translates the whole layout so its bounding box is centred on the origin.
    pub fn center_all(&mut self) {
        if self.objects.is_empty() {
            return;
        }
        let mut min = Vec2::repeat(f64::INFINITY);
        let mut max = Vec2::repeat(f64::NEG_INFINITY);
        for obj in &self.objects {
            let fp = obj.footprint();
            min = min.inf(&fp.min());
            max = max.sup(&fp.max());
        }
        let offset = -(max + min) / 2.0;
        for obj in &mut self.objects {
            let pos = obj.position();
            obj.set_position(pos + offset);
        }
    }

    /// Sequence in which objects can be printed one at a time without the
    /// head hitting a finished object. Indices refer to [`Scene::objects`].
    pub fn print_order(&self) -> Option<Vec<usize>> {
        PrintOrderFinder::new(self).find()
    }
}
