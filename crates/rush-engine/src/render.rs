//! The layered draw list the core fills and the shell blits.

use crate::core::rect::Rect;
use crate::sprite::SpriteDef;

/// Render layer, controls draw order.
///
/// Layers are drawn back-to-front: Sky first, Hud last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum RenderLayer {
    Sky = 0,
    Ground = 1,
    Enemies = 2,
    Player = 3,
    Messages = 4,
    Hud = 5,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 6;
}

/// One blit: a source rectangle in the atlas and a destination rectangle
/// on screen, already rounded to whole pixels.
#[derive(Debug, Clone, Copy)]
pub struct DrawCommand {
    pub src: Rect,
    pub dst: Rect,
}

/// Per-frame list of blit commands, bucketed by layer.
#[derive(Debug, Default)]
pub struct DrawList {
    layers: [Vec<DrawCommand>; RenderLayer::COUNT],
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        for layer in &mut self.layers {
            layer.clear();
        }
    }

    /// Queue a sprite blit. The destination position is rounded to integer
    /// pixels; the simulation keeps the float coordinates.
    pub fn push(&mut self, layer: RenderLayer, sprite: &SpriteDef, dst: Rect) {
        self.layers[layer as usize].push(DrawCommand {
            src: sprite.src,
            dst: Rect::new(dst.x.round(), dst.y.round(), dst.w, dst.h),
        });
    }

    /// All commands, back-to-front.
    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.layers.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of commands on one layer.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.layers[layer as usize].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_come_out_back_to_front() {
        let mut list = DrawList::new();
        let sprite = SpriteDef::opaque(4.0, 4.0);
        list.push(RenderLayer::Hud, &sprite, Rect::new(3.0, 0.0, 4.0, 4.0));
        list.push(RenderLayer::Sky, &sprite, Rect::new(1.0, 0.0, 4.0, 4.0));
        list.push(RenderLayer::Player, &sprite, Rect::new(2.0, 0.0, 4.0, 4.0));
        let xs: Vec<f32> = list.iter().map(|c| c.dst.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn destination_is_rounded_to_pixels() {
        let mut list = DrawList::new();
        let sprite = SpriteDef::opaque(4.0, 4.0);
        list.push(RenderLayer::Ground, &sprite, Rect::new(10.6, 2.4, 4.0, 4.0));
        let cmd = list.iter().next().unwrap();
        assert_eq!((cmd.dst.x, cmd.dst.y), (11.0, 2.0));
    }

    #[test]
    fn clear_empties_every_layer() {
        let mut list = DrawList::new();
        let sprite = SpriteDef::opaque(4.0, 4.0);
        list.push(RenderLayer::Sky, &sprite, Rect::new(0.0, 0.0, 4.0, 4.0));
        list.push(RenderLayer::Hud, &sprite, Rect::new(0.0, 0.0, 4.0, 4.0));
        assert_eq!(list.len(), 2);
        list.clear();
        assert!(list.is_empty());
    }
}
