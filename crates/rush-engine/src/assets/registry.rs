use std::collections::HashMap;
use std::fmt;

use crate::assets::manifest::AtlasManifest;
use crate::core::mask::Mask;
use crate::core::rect::Rect;
use crate::sprite::SpriteDef;

/// Fatal asset problems, all surfaced before the game loop starts.
#[derive(Debug)]
pub enum AssetError {
    /// A manifest region pokes outside the decoded atlas.
    RegionOutOfBounds {
        name: String,
        atlas_w: u32,
        atlas_h: u32,
    },
    /// The RGBA buffer does not match the declared atlas dimensions.
    PixelBufferSize { expected: usize, actual: usize },
    /// The game asked for a cutout the manifest does not define.
    MissingSprite(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::RegionOutOfBounds { name, atlas_w, atlas_h } => {
                write!(f, "region {name:?} lies outside the {atlas_w}x{atlas_h} atlas")
            }
            AssetError::PixelBufferSize { expected, actual } => {
                write!(f, "atlas pixel buffer is {actual} bytes, expected {expected}")
            }
            AssetError::MissingSprite(name) => {
                write!(f, "sprite {name:?} is not defined in the atlas manifest")
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// Registry of named sprites, built from a manifest plus the decoded atlas
/// pixels. Each sprite carries its source rectangle and the collision mask
/// derived from the cutout's opaque pixels.
#[derive(Debug)]
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteDef>,
}

impl SpriteRegistry {
    pub fn from_manifest(
        manifest: &AtlasManifest,
        rgba: &[u8],
        atlas_w: u32,
        atlas_h: u32,
    ) -> Result<Self, AssetError> {
        let expected = (atlas_w * atlas_h * 4) as usize;
        if rgba.len() != expected {
            return Err(AssetError::PixelBufferSize {
                expected,
                actual: rgba.len(),
            });
        }

        let mut sprites = HashMap::with_capacity(manifest.regions.len());
        for (name, region) in &manifest.regions {
            if region.x + region.w > atlas_w || region.y + region.h > atlas_h {
                return Err(AssetError::RegionOutOfBounds {
                    name: name.clone(),
                    atlas_w,
                    atlas_h,
                });
            }
            let mask = Mask::from_rgba_region(rgba, atlas_w, region.x, region.y, region.w, region.h);
            let src = Rect::new(region.x as f32, region.y as f32, region.w as f32, region.h as f32);
            sprites.insert(name.clone(), SpriteDef::new(src, mask));
        }
        log::debug!("sprite registry built: {} cutouts", sprites.len());
        Ok(Self { sprites })
    }

    /// Look up a sprite by name.
    pub fn get(&self, name: &str) -> Option<&SpriteDef> {
        self.sprites.get(name)
    }

    /// Look up a sprite by name, failing loudly for startup validation.
    pub fn require(&self, name: &str) -> Result<SpriteDef, AssetError> {
        self.sprites
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::MissingSprite(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(json: &str) -> AtlasManifest {
        AtlasManifest::from_json(json).unwrap()
    }

    fn opaque_atlas(w: u32, h: u32) -> Vec<u8> {
        vec![255u8; (w * h * 4) as usize]
    }

    #[test]
    fn builds_sprites_with_masks() {
        let m = manifest(
            r#"{
                "image": "sprites.png",
                "regions": { "cloud": { "x": 2, "y": 1, "w": 3, "h": 2 } }
            }"#,
        );
        let reg = SpriteRegistry::from_manifest(&m, &opaque_atlas(8, 4), 8, 4).unwrap();
        let cloud = reg.get("cloud").expect("cloud should exist");
        assert_eq!(cloud.src, Rect::new(2.0, 1.0, 3.0, 2.0));
        assert!(cloud.mask.solid(0, 0));
        assert_eq!(cloud.mask.width(), 3);
    }

    #[test]
    fn rejects_out_of_bounds_region() {
        let m = manifest(
            r#"{
                "image": "sprites.png",
                "regions": { "bad": { "x": 6, "y": 0, "w": 4, "h": 2 } }
            }"#,
        );
        let err = SpriteRegistry::from_manifest(&m, &opaque_atlas(8, 4), 8, 4).unwrap_err();
        assert!(matches!(err, AssetError::RegionOutOfBounds { .. }));
    }

    #[test]
    fn rejects_wrong_buffer_size() {
        let m = manifest(r#"{ "image": "sprites.png", "regions": {} }"#);
        let err = SpriteRegistry::from_manifest(&m, &[0u8; 7], 8, 4).unwrap_err();
        assert!(matches!(err, AssetError::PixelBufferSize { .. }));
    }

    #[test]
    fn require_reports_missing_sprites() {
        let m = manifest(r#"{ "image": "sprites.png", "regions": {} }"#);
        let reg = SpriteRegistry::from_manifest(&m, &opaque_atlas(2, 2), 2, 2).unwrap();
        let err = reg.require("trex_dead").unwrap_err();
        assert!(matches!(err, AssetError::MissingSprite(_)));
    }
}
