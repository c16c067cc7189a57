use std::sync::Arc;

use crate::core::mask::Mask;
use crate::core::rect::Rect;
use glam::Vec2;

/// A named atlas cutout: source rectangle in atlas pixels plus the
/// collision mask derived from the cutout's opaque pixels.
///
/// Cloning is cheap; the mask is shared.
#[derive(Debug, Clone)]
pub struct SpriteDef {
    /// Source rectangle, atlas pixel coordinates.
    pub src: Rect,
    pub mask: Arc<Mask>,
}

impl SpriteDef {
    pub fn new(src: Rect, mask: Mask) -> Self {
        Self {
            src,
            mask: Arc::new(mask),
        }
    }

    /// A fully opaque sprite of the given size, with no real atlas backing.
    /// Useful as a stand-in where pixel data is unavailable.
    pub fn opaque(w: f32, h: f32) -> Self {
        Self::new(
            Rect::new(0.0, 0.0, w, h),
            Mask::filled(w as u32, h as u32),
        )
    }

    pub fn size(&self) -> Vec2 {
        self.src.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_sprite_is_fully_solid() {
        let s = SpriteDef::opaque(4.0, 3.0);
        assert_eq!(s.size(), Vec2::new(4.0, 3.0));
        assert!(s.mask.solid(0, 0));
        assert!(s.mask.solid(3, 2));
    }
}
