use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Atlas manifest describing the sprite sheet and its named cutouts.
/// Loaded from a JSON file at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasManifest {
    /// Relative path to the atlas PNG.
    pub image: String,
    /// Named cutout lookup: name → pixel rectangle in the atlas.
    pub regions: HashMap<String, Region>,
    /// Optional sound effects: name → relative file path.
    #[serde(default)]
    pub sounds: HashMap<String, String>,
}

/// A pixel rectangle inside the atlas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl AtlasManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
