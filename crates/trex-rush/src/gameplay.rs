//! The run itself: world, groups, collision handling and game-over.

use rush_engine::{DrawList, EngineContext, InputState, Key, SoundEvent};

use crate::banner::Banner;
use crate::enemies::Enemies;
use crate::game::GameOptions;
use crate::ground::Ground;
use crate::player::Player;
use crate::score::Score;
use crate::sky::Sky;
use crate::sprites::Sprites;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameplayAction {
    None,
    Restart,
}

pub struct Gameplay {
    pub world: World,
    pub player: Player,
    pub ground: Ground,
    pub sky: Sky,
    pub enemies: Enemies,
    pub score: Score,
    pub messages: Vec<Banner>,
    state: PlayState,
}

impl Gameplay {
    pub fn new(sprites: &Sprites, options: &GameOptions, seed: u64) -> Self {
        let mut world = World::new(options.width, options.height, options.enemies, seed);
        let player = Player::new(sprites, world.floor);
        let ground = Ground::new(&mut world, sprites);
        let sky = Sky::new(&mut world);
        let enemies = Enemies::new(&mut world);
        let score = Score::new(sprites);
        Self {
            world,
            player,
            ground,
            sky,
            enemies,
            score,
            messages: Vec::new(),
            state: PlayState::Playing,
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn update(
        &mut self,
        ctx: &mut EngineContext,
        input: &InputState,
        sprites: &Sprites,
        dt: f32,
    ) -> GameplayAction {
        if self.state == PlayState::GameOver && input.was_pressed(Key::Restart) {
            return GameplayAction::Restart;
        }

        // fixed group order: messages, player, ground, sky, enemies, score
        for banner in &mut self.messages {
            banner.update(&self.world.bounds, dt);
        }
        self.messages.retain(|banner| !banner.is_done());

        self.player.update(ctx, input, dt);
        self.ground.update(&self.world);
        self.sky.update(&mut self.world, sprites, dt);
        let hit = self.enemies.update(&mut self.world, sprites, &self.player, dt);
        self.score.update(sprites, dt);

        if hit && self.state == PlayState::Playing {
            self.game_over(ctx, sprites);
        }
        GameplayAction::None
    }

    /// First true collision: kill the player, freeze every scrolling group
    /// and slide the game-over message in.
    fn game_over(&mut self, ctx: &mut EngineContext, sprites: &Sprites) {
        self.player.kill();
        self.ground.enabled = false;
        self.sky.enabled = false;
        self.enemies.enabled = false;
        self.score.enabled = false;
        self.messages.push(Banner::slide_in(
            sprites.game_over.clone(),
            &self.world.bounds,
            self.world.bounds.centery(),
            None,
        ));
        ctx.emit_sound(SoundEvent::GameOver);
        self.state = PlayState::GameOver;
        log::info!("game over at score {:04}", self.score.value());
    }

    pub fn draw(&self, out: &mut DrawList) {
        // back-to-front: sky, ground, enemies, player, messages, score
        self.sky.draw(out);
        self.ground.draw(out);
        self.enemies.draw(out);
        self.player.draw(out);
        for banner in &self.messages {
            banner.draw(out);
        }
        self.score.draw(&self.world.bounds, out);
    }
}
