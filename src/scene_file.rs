//! Scene description files for the driver binary.
//!
//! A scene file is JSON listing the objects to lay out:
//!
//! ```json
//! { "objects": [
//!     { "name": "case", "size": [40, 40, 10] },
//!     { "name": "led", "size": [4, 4, 2], "schematic": true, "relative": [0.5, 0.5, 0] },
//!     { "name": "stand", "size": [20, 20, 30], "position": [60, 0] }
//! ] }
//! ```
//!
//! Objects with a `position` are restored where they are; the others go
//! through automatic placement.

use anyhow::Context;
use platekit_core::{MeshPart, PartBounds, Placeable, PlacedObject, Vec2, Vec3};
use platekit_layout::Scene;
use platekit_settings::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One object in a scene file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSpec {
    pub name: String,
    /// Width, depth, height in mm
    pub size: [f64; 3],
    #[serde(default)]
    pub position: Option<[f64; 2]>,
    #[serde(default)]
    pub schematic: bool,
    /// Anchor offset of a schematic object
    #[serde(default)]
    pub relative: [f64; 3],
}

impl ObjectSpec {
    fn to_object(&self) -> platekit_core::Result<PlacedObject> {
        let size = Vec3::from(self.size);
        let part = MeshPart::new(self.name.clone(), PartBounds::centered(size));
        let mut obj = PlacedObject::from_parts(self.name.clone(), vec![part])?;
        if self.schematic {
            obj = obj.into_schematic(Vec3::from(self.relative));
        }
        if let Some(position) = self.position {
            obj = obj.with_position(Vec2::from(position));
        }
        Ok(obj)
    }
}

/// Contents of a scene file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    pub objects: Vec<ObjectSpec>,
}

impl SceneFile {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid scene file {}", path.display()))
    }

    /// Builds and lays out a scene: positioned objects are restored, the
    /// rest are placed automatically, then the plate is centred.
    pub fn build_scene(&self, config: &LayoutConfig) -> anyhow::Result<Scene> {
        let mut scene: Scene = Scene::from_config(config);
        let mut restored = false;
        for entry in &self.objects {
            let obj = entry
                .to_object()
                .with_context(|| format!("Invalid object '{}'", entry.name))?;
            if entry.position.is_some() {
                scene.insert_unplaced(obj);
                restored = true;
            } else {
                scene.add(obj);
            }
        }
        if restored {
            scene.resolve();
        }
        scene.center_all();
        info!("Laid out {} objects", scene.len());
        Ok(scene)
    }
}

/// Human-readable summary of a laid-out scene
pub fn render_report(scene: &Scene) -> String {
    let mut out = String::new();
    for (index, obj) in scene.objects().iter().enumerate() {
        let position = obj.position();
        let size = obj.size();
        out.push_str(&format!(
            "{:>3}  {:<20} at ({:>8.2}, {:>8.2})  size {:.1} x {:.1} x {:.1}{}\n",
            index,
            obj.name,
            position.x,
            position.y,
            size.x,
            size.y,
            size.z,
            if scene.on_platform(obj) { "" } else { "  [off platform]" }
        ));
    }
    match scene.print_order() {
        Some(order) => {
            let order: Vec<String> = order.iter().map(|n| n.to_string()).collect();
            out.push_str(&format!("print order: {}\n", order.join(" -> ")));
        }
        None => out.push_str("print order: no collision-free order\n"),
    }
    out
}
