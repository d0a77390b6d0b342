//! # PlateKit
//!
//! Automatic object placement and sequential print ordering for 3D printer
//! build plates.
//!
//! ## Architecture
//!
//! PlateKit is organized as a workspace with multiple crates:
//!
//! 1. **platekit-core** - Footprint geometry, the `Placeable` contract, errors
//! 2. **platekit-settings** - Machine, print-head and margin configuration
//! 3. **platekit-layout** - Scene, placement, overlap relaxation, print order
//! 4. **platekit** - Driver binary that lays out a scene file

pub mod scene_file;

pub use platekit_core::{
    Footprint, LayoutError, MeshPart, ObjectId, PartBounds, Placeable, PlacedObject, Result, Vec2,
    Vec3,
};
pub use platekit_layout::{BedClips, PrintOrderFinder, Scene};
pub use platekit_settings::{
    default_config_path, HeadSettings, LayoutConfig, MachineSettings, SettingsError, SizeOffsets,
};
pub use scene_file::{render_report, ObjectSpec, SceneFile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - stderr output, so stdout stays free for the layout report
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
