use anyhow::{bail, Context};
use platekit::{default_config_path, init_logging, render_report, LayoutConfig, SceneFile};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const USAGE: &str = "usage: platekit <scene-file> [config-file]";

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut args = std::env::args_os().skip(1);
    let Some(scene_path) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let config_path = args.next().map(PathBuf::from);
    if args.next().is_some() {
        bail!(USAGE);
    }

    info!("PlateKit {} ({})", platekit::VERSION, platekit::BUILD_DATE);

    let config = load_config(config_path.as_deref())?;
    let scene = SceneFile::load(&scene_path)?.build_scene(&config)?;
    print!("{}", render_report(&scene));

    Ok(())
}

/// Explicit config file, else the user's default file if present, else defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    if let Some(path) = explicit {
        return LayoutConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }
    match default_config_path() {
        Ok(path) if path.exists() => LayoutConfig::load_from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        Ok(_) | Err(_) => {
            debug!("No layout config found, using defaults");
            Ok(LayoutConfig::new())
        }
    }
}
