//! The scrolling ground strip.

use glam::Vec2;
use rush_engine::{Anchor, Body, DrawList, Rect, RenderLayer, SpriteDef};

use crate::sprites::Sprites;
use crate::world::World;

pub struct GroundTile {
    pub body: Body,
    pub sprite: SpriteDef,
}

impl GroundTile {
    pub fn rect(&self) -> Rect {
        self.body.rect(self.sprite.size())
    }
}

/// A fixed pool of tiles covering the viewport plus one buffer tile.
/// Tiles that scroll off the left edge are recycled to the right end of
/// the strip, so the ground is gapless and infinite with O(n) tiles.
pub struct Ground {
    pub enabled: bool,
    tiles: Vec<GroundTile>,
}

impl Ground {
    pub fn new(world: &mut World, sprites: &Sprites) -> Self {
        let tile_w = sprites.ground[0].size().x;
        let count = (world.bounds.w / tile_w).ceil() as usize + 1;
        let mut tiles = Vec::with_capacity(count);
        let mut x = world.bounds.left();
        for _ in 0..count {
            let sprite = world.rng.pick(&sprites.ground).clone();
            let mut body = Body::new(Anchor::TopLeft, Vec2::new(x, world.floor));
            body.vel.x = -world.scroll_speed;
            x += sprite.size().x;
            tiles.push(GroundTile { body, sprite });
        }
        Self {
            enabled: true,
            tiles,
        }
    }

    pub fn update(&mut self, world: &World) {
        if !self.enabled {
            return;
        }
        for tile in &mut self.tiles {
            tile.body.step();
        }
        self.recycle(world);
    }

    fn recycle(&mut self, world: &World) {
        if self.tiles.is_empty() {
            debug_assert!(false, "ground pool is empty");
            log::error!("ground pool is empty, skipping recycle");
            return;
        }
        for i in 0..self.tiles.len() {
            if self.tiles[i].rect().right() < world.bounds.left() {
                // re-read the rightmost edge per tile so chained recycles in
                // one tick stay gapless
                let right = self.rightmost_edge();
                let mut rect = self.tiles[i].rect();
                rect.x = right;
                self.tiles[i].body.snap_to(rect);
            }
        }
    }

    fn rightmost_edge(&self) -> f32 {
        self.tiles
            .iter()
            .map(|t| t.rect().right())
            .fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn tiles(&self) -> &[GroundTile] {
        &self.tiles
    }

    pub fn draw(&self, out: &mut DrawList) {
        for tile in &self.tiles {
            out.push(RenderLayer::Ground, &tile.sprite, tile.rect());
        }
    }
}
