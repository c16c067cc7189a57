//! The top-level game: scene switching between menu and gameplay.

use rush_engine::{
    AssetError, DrawList, EngineContext, Game, GameConfig, InputState, Key, Rect, SpriteRegistry,
};

use crate::gameplay::{Gameplay, GameplayAction};
use crate::menu::{Menu, MenuAction};
use crate::sprites::Sprites;

#[derive(Debug, Clone)]
pub struct GameOptions {
    pub width: f32,
    pub height: f32,
    pub framerate: u32,
    /// Global enemy-spawn switch (`--no-enemies` clears it).
    pub enemies: bool,
    pub seed: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 400.0,
            framerate: 60,
            enemies: true,
            seed: 0x7e_c0de,
        }
    }
}

enum Mode {
    Menu(Menu),
    Playing(Gameplay),
}

enum Transition {
    None,
    StartRun(u64),
}

pub struct TrexRush {
    sprites: Sprites,
    options: GameOptions,
    mode: Mode,
}

impl TrexRush {
    pub fn new(registry: &SpriteRegistry, options: GameOptions) -> Result<Self, AssetError> {
        let sprites = Sprites::load(registry)?;
        Ok(Self::from_parts(sprites, options))
    }

    pub(crate) fn from_parts(sprites: Sprites, options: GameOptions) -> Self {
        let bounds = Rect::new(0.0, 0.0, options.width, options.height);
        let mode = Mode::Menu(Menu::new(&sprites, &bounds));
        Self {
            sprites,
            options,
            mode,
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.options.width, self.options.height)
    }

    fn start_run(&mut self, seed: u64) {
        log::debug!("starting run, seed {seed:#x}");
        self.mode = Mode::Playing(Gameplay::new(&self.sprites, &self.options, seed));
    }

    pub fn current_run(&self) -> Option<&Gameplay> {
        match &self.mode {
            Mode::Playing(run) => Some(run),
            Mode::Menu(_) => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn current_run_mut(&mut self) -> Option<&mut Gameplay> {
        match &mut self.mode {
            Mode::Playing(run) => Some(run),
            Mode::Menu(_) => None,
        }
    }
}

impl Game for TrexRush {
    fn config(&self) -> GameConfig {
        GameConfig {
            title: "T-Rex Rush".to_string(),
            width: self.options.width,
            height: self.options.height,
            framerate: self.options.framerate,
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, dt: f32) {
        if input.was_pressed(Key::Quit) {
            ctx.request_quit();
            return;
        }

        let bounds = self.bounds();
        let transition = match &mut self.mode {
            Mode::Menu(menu) => match menu.update(&self.sprites, &bounds, input, dt) {
                MenuAction::Start => Transition::StartRun(self.options.seed),
                MenuAction::None => Transition::None,
            },
            Mode::Playing(run) => match run.update(ctx, input, &self.sprites, dt) {
                // reseed from the running stream so every run differs
                GameplayAction::Restart => Transition::StartRun(run.world.rng.next_u64()),
                GameplayAction::None => Transition::None,
            },
        };

        if let Transition::StartRun(seed) = transition {
            self.start_run(seed);
        }
    }

    fn draw(&self, out: &mut DrawList) {
        match &self.mode {
            Mode::Menu(menu) => menu.draw(&self.sprites, &self.bounds(), out),
            Mode::Playing(run) => run.draw(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::Enemy;
    use crate::gameplay::PlayState;
    use crate::player::Locomotion;
    use crate::sprites::test_sprites;
    use rush_engine::InputEvent;

    const DT: f32 = 1000.0 / 60.0;

    fn new_game() -> TrexRush {
        TrexRush::from_parts(
            test_sprites(),
            GameOptions {
                enemies: false,
                ..GameOptions::default()
            },
        )
    }

    fn press(game: &mut TrexRush, ctx: &mut EngineContext, key: Key) {
        let mut input = InputState::new();
        input.apply(InputEvent::KeyDown(key));
        game.update(ctx, &input, DT);
    }

    #[test]
    fn boots_into_the_menu() {
        let game = new_game();
        assert!(game.current_run().is_none());
    }

    #[test]
    fn enter_leaves_the_menu() {
        let mut game = new_game();
        let mut ctx = EngineContext::new();
        press(&mut game, &mut ctx, Key::Confirm);
        assert!(game.current_run().is_some());
    }

    #[test]
    fn quit_key_requests_quit_from_any_scene() {
        let mut game = new_game();
        let mut ctx = EngineContext::new();
        press(&mut game, &mut ctx, Key::Quit);
        assert!(ctx.quit_requested());

        let mut game = new_game();
        let mut ctx = EngineContext::new();
        press(&mut game, &mut ctx, Key::Confirm);
        press(&mut game, &mut ctx, Key::Quit);
        assert!(ctx.quit_requested());
    }

    #[test]
    fn restart_builds_a_fresh_run() {
        let mut game = new_game();
        let mut ctx = EngineContext::new();
        let idle = InputState::new();

        press(&mut game, &mut ctx, Key::Confirm);

        // let the run age a little, then crash it
        for _ in 0..200 {
            game.update(&mut ctx, &idle, DT);
        }
        {
            let run = game.current_run_mut().unwrap();
            let sprite = run.player.sprite().clone();
            let on_top = Enemy::cactus(sprite, run.player.rect().midbottom());
            run.enemies.members.push(on_top);
        }
        game.update(&mut ctx, &idle, DT);
        let run = game.current_run().unwrap();
        assert_eq!(run.state(), PlayState::GameOver);
        assert!(run.score.value() >= 3);

        press(&mut game, &mut ctx, Key::Restart);

        let run = game.current_run().unwrap();
        assert_eq!(run.state(), PlayState::Playing);
        assert_eq!(run.score.value(), 0);
        assert_eq!(run.player.state(), Locomotion::Running);
        assert!(run.messages.is_empty(), "game-over banner is gone");
        assert!(run.ground.enabled && run.sky.enabled);
        assert!(run.enemies.enabled && run.score.enabled);
        assert_eq!(run.ground.tiles().len(), 17);
    }
}
