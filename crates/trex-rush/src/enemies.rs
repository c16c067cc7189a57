//! Obstacle spawning, culling and the collision check.

use glam::Vec2;
use rush_engine::{Anchor, Animation, Body, DrawList, Rect, RenderLayer, SpriteDef};

use crate::player::Player;
use crate::sprites::Sprites;
use crate::world::World;

/// Candidate spawn delays, ms. Resampled with replacement after each spawn.
const SPAWN_DELAYS: [f32; 2] = [750.0, 1000.0];
/// Enemies are destroyed once their right edge passes this far beyond the
/// viewport's left edge.
const CULL_MARGIN: f32 = 25.0;
/// Dactyl wings flap every 8 ticks at the 60 fps baseline.
const WING_FRAME_MS: f32 = 8.0 * 1000.0 / 60.0;

enum Look {
    Static(SpriteDef),
    Animated(Animation),
}

pub struct Enemy {
    pub body: Body,
    look: Look,
}

impl Enemy {
    pub fn cactus(sprite: SpriteDef, point: Vec2) -> Self {
        Self {
            body: Body::new(Anchor::BottomLeft, point),
            look: Look::Static(sprite),
        }
    }

    pub fn dactyl(frames: Vec<SpriteDef>, anchor: Anchor, point: Vec2) -> Self {
        Self {
            body: Body::new(anchor, point),
            look: Look::Animated(Animation::new(frames, WING_FRAME_MS)),
        }
    }

    pub fn sprite(&self) -> &SpriteDef {
        match &self.look {
            Look::Static(sprite) => sprite,
            Look::Animated(animation) => animation.frame(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect(self.sprite().size())
    }

    fn step(&mut self, dt: f32) {
        self.body.step();
        if let Look::Animated(animation) = &mut self.look {
            animation.tick(dt);
        }
    }
}

/// The enemy group: spawns obstacle formations on a randomized timer,
/// culls what scrolled away and reports collisions with the player.
pub struct Enemies {
    pub enabled: bool,
    pub(crate) members: Vec<Enemy>,
    elapsed: f32,
    delay: f32,
}

impl Enemies {
    pub fn new(world: &mut World) -> Self {
        Self {
            enabled: true,
            members: Vec::new(),
            elapsed: 0.0,
            delay: *world.rng.pick(&SPAWN_DELAYS),
        }
    }

    /// Move, spawn, cull, then report whether any member's opaque pixels
    /// overlap the player's. Only the first overlap counts.
    pub fn update(&mut self, world: &mut World, sprites: &Sprites, player: &Player, dt: f32) -> bool {
        if !self.enabled {
            return false;
        }
        for enemy in &mut self.members {
            enemy.step(dt);
        }

        self.elapsed += dt;
        if self.elapsed >= self.delay {
            self.elapsed %= self.delay;
            self.delay = *world.rng.pick(&SPAWN_DELAYS);
            self.spawn(world, sprites);
        }

        let cull_edge = world.bounds.left() - CULL_MARGIN;
        self.members.retain(|e| e.rect().right() >= cull_edge);

        self.first_collision(player)
    }

    /// One in three spawns is a triple dactyl stack at player height; the
    /// rest are a flush pair of cacti on the floor.
    fn spawn(&mut self, world: &mut World, sprites: &Sprites) {
        if !world.enemies_enabled {
            return;
        }
        if world.rng.chance(3) {
            let y = world.floor - sprites.running[0].size().y;
            let mut dactyl = Enemy::dactyl(
                sprites.dactyl.to_vec(),
                Anchor::MidLeft,
                Vec2::new(world.bounds.right(), y),
            );
            dactyl.body.vel.x = -world.scroll_speed;
            let mut perch = dactyl.rect().midtop();
            self.members.push(dactyl);
            for _ in 0..2 {
                let mut dactyl = Enemy::dactyl(sprites.dactyl.to_vec(), Anchor::MidBottom, perch);
                dactyl.body.vel.x = -world.scroll_speed;
                perch = dactyl.rect().midtop();
                self.members.push(dactyl);
            }
        } else {
            let first = Enemy::cactus(
                world.rng.pick(&sprites.cacti).clone(),
                Vec2::new(world.bounds.right(), world.floor),
            );
            let second = Enemy::cactus(world.rng.pick(&sprites.cacti).clone(), first.rect().bottomright());
            for mut cactus in [first, second] {
                cactus.body.vel.x = -world.scroll_speed;
                self.members.push(cactus);
            }
        }
    }

    /// Two-phase test: rectangle pre-filter, then pixel masks.
    fn first_collision(&self, player: &Player) -> bool {
        let pr = player.rect();
        for enemy in &self.members {
            let er = enemy.rect();
            if !er.intersects(&pr) {
                continue;
            }
            let dx = pr.x.round() as i32 - er.x.round() as i32;
            let dy = pr.y.round() as i32 - er.y.round() as i32;
            if enemy.sprite().mask.overlaps(player.mask(), dx, dy) {
                return true;
            }
        }
        false
    }

    pub fn members(&self) -> &[Enemy] {
        &self.members
    }

    pub fn draw(&self, out: &mut DrawList) {
        for enemy in &self.members {
            out.push(RenderLayer::Enemies, enemy.sprite(), enemy.rect());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::test_sprites;
    use rush_engine::{EngineContext, InputState};

    const DT: f32 = 1000.0 / 60.0;

    fn world() -> World {
        World::new(1024.0, 400.0, true, 11)
    }

    fn player(sprites: &Sprites) -> Player {
        Player::new(sprites, 350.0)
    }

    #[test]
    fn spawns_pairs_and_triple_stacks() {
        let mut world = world();
        let sprites = test_sprites();
        let mut enemies = Enemies::new(&mut world);
        let p = player(&sprites);

        let mut saw_pair = false;
        let mut saw_stack = false;
        for _ in 0..20_000 {
            let before = enemies.members().len();
            enemies.update(&mut world, &sprites, &p, DT);
            let spawned = enemies.members().len().saturating_sub(before);
            match spawned {
                2 => saw_pair = true,
                3 => saw_stack = true,
                _ => {}
            }
            if saw_pair && saw_stack {
                break;
            }
        }
        assert!(saw_pair, "no cactus pair in 20000 ticks");
        assert!(saw_stack, "no dactyl stack in 20000 ticks");
    }

    #[test]
    fn cactus_pair_is_flush() {
        let mut world = world();
        let sprites = test_sprites();
        let mut enemies = Enemies::new(&mut world);

        loop {
            let before = enemies.members().len();
            enemies.spawn(&mut world, &sprites);
            if enemies.members().len() == before + 2 {
                let all = enemies.members();
                let first = &all[all.len() - 2];
                let second = &all[all.len() - 1];
                assert_eq!(second.rect().left(), first.rect().right());
                assert_eq!(second.rect().bottom(), first.rect().bottom());
                assert_eq!(first.rect().bottom(), world.floor);
                assert_eq!(first.rect().left(), world.bounds.right());
                return;
            }
        }
    }

    #[test]
    fn dactyl_stack_geometry() {
        let mut world = world();
        let sprites = test_sprites();
        let mut enemies = Enemies::new(&mut world);

        loop {
            let before = enemies.members().len();
            enemies.spawn(&mut world, &sprites);
            if enemies.members().len() == before + 3 {
                let all = enemies.members();
                let stack = &all[all.len() - 3..];
                assert_eq!(stack[1].rect().midbottom(), stack[0].rect().midtop());
                assert_eq!(stack[2].rect().midbottom(), stack[1].rect().midtop());
                // base dactyl flies at player height above the floor
                let base = &stack[0];
                assert_eq!(
                    base.rect().centery(),
                    world.floor - sprites.running[0].size().y
                );
                assert_eq!(base.rect().left(), world.bounds.right());
                return;
            }
        }
    }

    #[test]
    fn culled_exactly_past_the_margin() {
        let mut world = world();
        world.enemies_enabled = false; // no new spawns during the check
        let sprites = test_sprites();
        let mut enemies = Enemies::new(&mut world);
        let p = player(&sprites);

        let cactus_w = sprites.cacti[0].size().x;
        let mut cactus = Enemy::cactus(sprites.cacti[0].clone(), Vec2::new(30.0, world.floor));
        cactus.body.vel.x = -world.scroll_speed;
        enemies.members.push(cactus);

        let mut last_right = 30.0 + cactus_w;
        while !enemies.members().is_empty() {
            last_right -= world.scroll_speed;
            enemies.update(&mut world, &sprites, &p, DT);
            if !enemies.members().is_empty() {
                assert!(
                    enemies.members()[0].rect().right() >= world.bounds.left() - CULL_MARGIN,
                    "culled too early"
                );
            } else {
                assert!(last_right < world.bounds.left() - CULL_MARGIN, "culled too late");
            }
        }
    }

    #[test]
    fn touching_rects_without_pixel_overlap_do_not_collide() {
        let mut world = world();
        world.enemies_enabled = false;
        let sprites = test_sprites();
        let mut enemies = Enemies::new(&mut world);
        let mut p = player(&sprites);
        let mut ctx = EngineContext::new();
        p.update(&mut ctx, &InputState::new(), DT);

        // a cactus far to the right never collides
        let far = Enemy::cactus(sprites.cacti[0].clone(), Vec2::new(900.0, world.floor));
        enemies.members.push(far);
        assert!(!enemies.update(&mut world, &sprites, &p, DT));

        // rects flush against each other share no pixels
        let flush = Enemy::cactus(sprites.cacti[0].clone(), p.rect().bottomright());
        enemies.members.push(flush);
        assert!(!enemies.update(&mut world, &sprites, &p, DT));

        // overlapping opaque pixels collide
        let on_top = Enemy::cactus(sprites.cacti[0].clone(), p.rect().midbottom());
        enemies.members.push(on_top);
        assert!(enemies.update(&mut world, &sprites, &p, DT));
    }
}
