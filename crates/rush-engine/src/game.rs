//! The game contract and the fixed-step runner that drives it.

use crate::core::timestep::FixedTimestep;
use crate::input::{InputEvent, InputQueue, InputState};
use crate::render::DrawList;

/// Configuration for the shell, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window title.
    pub title: String,
    /// Screen width in pixels.
    pub width: f32,
    /// Screen height in pixels.
    pub height: f32,
    /// Simulation ticks (and target frames) per second.
    pub framerate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "rush-engine".to_string(),
            width: 1024.0,
            height: 400.0,
            framerate: 60,
        }
    }
}

/// A sound effect emitted by game logic, played fire-and-forget by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Jump,
    GameOver,
}

impl SoundEvent {
    pub const ALL: [SoundEvent; 2] = [SoundEvent::Jump, SoundEvent::GameOver];

    /// The manifest key for this effect.
    pub fn name(self) -> &'static str {
        match self {
            SoundEvent::Jump => "jump",
            SoundEvent::GameOver => "gameover",
        }
    }
}

/// Per-frame state the game writes into: sound events and the cooperative
/// quit flag.
#[derive(Debug, Default)]
pub struct EngineContext {
    pub sounds: Vec<SoundEvent>,
    quit: bool,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Ask the shell to end the loop after the in-flight frame.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Clear per-frame transient data. The quit flag persists.
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return shell configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state. Called once before the first tick.
    fn init(&mut self, _ctx: &mut EngineContext) {}

    /// One fixed simulation tick. `dt` is the fixed delta in milliseconds.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, dt: f32);

    /// Emit the frame's blit commands, back-to-front by layer.
    fn draw(&self, out: &mut DrawList);
}

/// Generic runner that wires up the engine loop: input draining, fixed-step
/// accumulation, draw-list rebuilding. The shell feeds it real elapsed time
/// and consumes its draw list and sound events.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    queue: InputQueue,
    input: InputState,
    timestep: FixedTimestep,
    draw_list: DrawList,
    config: GameConfig,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::for_framerate(config.framerate);
        Self {
            game,
            ctx: EngineContext::new(),
            queue: InputQueue::new(),
            input: InputState::new(),
            timestep,
            draw_list: DrawList::new(),
            config,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
    }

    /// Push an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Run one frame: apply queued input, run the due fixed steps, rebuild
    /// the draw list.
    pub fn tick(&mut self, frame_ms: f32) {
        self.ctx.clear_frame_data();

        for event in self.queue.drain() {
            self.input.apply(event);
        }

        let steps = self.timestep.accumulate(frame_ms);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input, self.timestep.step_ms());
            // edge-detected keys are visible to the first step only
            self.input.end_tick();
        }

        self.draw_list.clear();
        self.game.draw(&mut self.draw_list);
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Sound events emitted during the last `tick`.
    pub fn sounds(&self) -> &[SoundEvent] {
        &self.ctx.sounds
    }

    pub fn quit_requested(&self) -> bool {
        self.ctx.quit_requested()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::render::RenderLayer;
    use crate::sprite::SpriteDef;
    use crate::core::rect::Rect;

    /// Counts ticks and reports whether Up was held on the first one.
    struct Probe {
        ticks: u32,
        pressed_edges: u32,
        quit_on: Option<u32>,
    }

    impl Game for Probe {
        fn config(&self) -> GameConfig {
            // framerate 50 gives an exact 20ms step
            GameConfig {
                framerate: 50,
                ..GameConfig::default()
            }
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputState, dt: f32) {
            assert_eq!(dt, 20.0);
            self.ticks += 1;
            if input.was_pressed(Key::Up) {
                self.pressed_edges += 1;
            }
            if Some(self.ticks) == self.quit_on {
                ctx.request_quit();
                ctx.emit_sound(SoundEvent::Jump);
            }
        }

        fn draw(&self, out: &mut DrawList) {
            let sprite = SpriteDef::opaque(2.0, 2.0);
            out.push(RenderLayer::Hud, &sprite, Rect::new(0.0, 0.0, 2.0, 2.0));
        }
    }

    fn probe(quit_on: Option<u32>) -> GameRunner<Probe> {
        GameRunner::new(Probe {
            ticks: 0,
            pressed_edges: 0,
            quit_on,
        })
    }

    #[test]
    fn fixed_steps_follow_real_time() {
        let mut runner = probe(None);
        runner.tick(60.0);
        assert_eq!(runner.game().ticks, 3);
        assert_eq!(runner.draw_list().len(), 1);
    }

    #[test]
    fn pressed_edge_reaches_exactly_one_step() {
        let mut runner = probe(None);
        runner.push_input(InputEvent::KeyDown(Key::Up));
        runner.tick(80.0);
        assert_eq!(runner.game().pressed_edges, 1);
    }

    #[test]
    fn quit_flag_survives_frames() {
        let mut runner = probe(Some(1));
        runner.tick(20.0);
        assert!(runner.quit_requested());
        assert_eq!(runner.sounds(), &[SoundEvent::Jump]);
        runner.tick(20.0);
        assert!(runner.quit_requested());
        assert!(runner.sounds().is_empty(), "sounds are per-frame");
    }
}
