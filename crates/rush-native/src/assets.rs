//! Startup asset loading: manifest JSON + atlas PNG, decoded once.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rush_engine::{AtlasManifest, SpriteRegistry};

/// The decoded atlas, kept around for texture upload.
pub struct AtlasPixels {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub struct LoadedAssets {
    pub registry: SpriteRegistry,
    pub pixels: AtlasPixels,
    /// Sound name → resolved file path.
    pub sounds: HashMap<String, PathBuf>,
}

/// Load `atlas.json` and the atlas PNG from `dir`. Any failure here is
/// fatal; the game loop never starts on broken assets.
pub fn load_assets(dir: &Path) -> Result<LoadedAssets> {
    let manifest_path = dir.join("atlas.json");
    let text = fs::read_to_string(&manifest_path)
        .with_context(|| format!("reading {}", manifest_path.display()))?;
    let manifest = AtlasManifest::from_json(&text)
        .with_context(|| format!("parsing {}", manifest_path.display()))?;

    let image_path = dir.join(&manifest.image);
    let image = image::open(&image_path)
        .with_context(|| format!("decoding {}", image_path.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    let rgba = image.into_raw();

    let registry = SpriteRegistry::from_manifest(&manifest, &rgba, width, height)
        .context("building sprite registry")?;

    let sounds = manifest
        .sounds
        .iter()
        .map(|(name, rel)| (name.clone(), dir.join(rel)))
        .collect();

    log::info!(
        "loaded atlas {} ({}x{}, {} cutouts)",
        image_path.display(),
        width,
        height,
        registry.len()
    );

    Ok(LoadedAssets {
        registry,
        pixels: AtlasPixels { rgba, width, height },
        sounds,
    })
}
