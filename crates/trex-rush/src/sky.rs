//! Drifting background clouds.

use glam::Vec2;
use rush_engine::{Anchor, Body, DrawList, Rect, RenderLayer, SpriteDef};

use crate::sprites::Sprites;
use crate::world::World;

/// Candidate spawn delays, ms. Resampled with replacement after each spawn.
const SPAWN_DELAYS: [f32; 4] = [500.0, 1000.0, 2000.0, 5000.0];
/// Clouds stay in the upper band, this far above the vertical center.
const BAND_MARGIN: f32 = 50.0;

pub struct Cloud {
    pub body: Body,
    pub sprite: SpriteDef,
}

impl Cloud {
    pub fn rect(&self) -> Rect {
        self.body.rect(self.sprite.size())
    }
}

/// Spawns clouds on a randomized timer; each drifts left at its own speed
/// for a little depth parallax and is destroyed once fully off-screen.
pub struct Sky {
    pub enabled: bool,
    clouds: Vec<Cloud>,
    elapsed: f32,
    delay: f32,
}

impl Sky {
    pub fn new(world: &mut World) -> Self {
        Self {
            enabled: true,
            clouds: Vec::new(),
            elapsed: 0.0,
            delay: *world.rng.pick(&SPAWN_DELAYS),
        }
    }

    pub fn update(&mut self, world: &mut World, sprites: &Sprites, dt: f32) {
        if !self.enabled {
            return;
        }
        for cloud in &mut self.clouds {
            cloud.body.step();
        }

        self.elapsed += dt;
        if self.elapsed >= self.delay {
            self.elapsed %= self.delay;
            self.delay = *world.rng.pick(&SPAWN_DELAYS);
            self.spawn(world, sprites);
        }

        let left = world.bounds.left();
        self.clouds.retain(|c| c.rect().right() >= left);
    }

    fn spawn(&mut self, world: &mut World, sprites: &Sprites) {
        let top = world.bounds.top() as i32;
        let lowest = (world.bounds.centery() - BAND_MARGIN) as i32;
        let y = world.rng.range(top, lowest) as f32;
        let mut body = Body::new(Anchor::MidLeft, Vec2::new(world.bounds.right(), y));
        body.vel.x = -(world.rng.range(1, 10) as f32);
        self.clouds.push(Cloud {
            body,
            sprite: sprites.cloud.clone(),
        });
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn draw(&self, out: &mut DrawList) {
        for cloud in &self.clouds {
            out.push(RenderLayer::Sky, &cloud.sprite, cloud.rect());
        }
    }
}
