//! The player character and its locomotion state machine.

use glam::Vec2;
use rush_engine::{
    Anchor, Animation, Body, DrawList, EngineContext, InputState, Key, Mask, Rect, RenderLayer,
    SoundEvent, SpriteDef,
};

use crate::sprites::Sprites;

/// Where the player stands, px from the left edge.
pub const PLAYER_X: f32 = 200.0;
/// Locomotion frames hold for 8 ticks at the 60 fps baseline.
const FRAME_DELAY_MS: f32 = 8.0 * 1000.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locomotion {
    Running,
    Crouching,
    Jumping,
    Dead,
}

struct Frames {
    running: Vec<SpriteDef>,
    crouching: Vec<SpriteDef>,
    jumping: Vec<SpriteDef>,
    dead: SpriteDef,
}

pub struct Player {
    pub body: Body,
    state: Locomotion,
    animation: Animation,
    /// Bounding rect saved at crouch entry, restored at crouch exit because
    /// the crouch frames have a different bounding box.
    restore: Option<Rect>,
    floor: f32,
    frames: Frames,
}

impl Player {
    pub fn new(sprites: &Sprites, floor: f32) -> Self {
        let frames = Frames {
            running: sprites.running.to_vec(),
            crouching: sprites.crouching.to_vec(),
            jumping: sprites.jumping.to_vec(),
            dead: sprites.dead.clone(),
        };
        // anchored at the bottom-left so frame-size changes keep the ground
        // contact point stable
        let body = Body::new(Anchor::BottomLeft, Vec2::new(PLAYER_X, floor));
        let animation = Animation::new(frames.running.clone(), FRAME_DELAY_MS);
        Self {
            body,
            state: Locomotion::Running,
            animation,
            restore: None,
            floor,
            frames,
        }
    }

    pub fn state(&self) -> Locomotion {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state == Locomotion::Dead
    }

    pub fn sprite(&self) -> &SpriteDef {
        self.animation.frame()
    }

    pub fn rect(&self) -> Rect {
        self.body.rect(self.animation.frame().size())
    }

    pub fn mask(&self) -> &Mask {
        &self.animation.frame().mask
    }

    pub fn update(&mut self, ctx: &mut EngineContext, input: &InputState, dt: f32) {
        match self.state {
            // terminal: frozen in place, animation stopped, input ignored
            Locomotion::Dead => return,
            Locomotion::Running => {
                if input.is_down(Key::Up) {
                    self.start_jump(ctx);
                } else if input.is_down(Key::Down) {
                    self.start_crouch();
                }
            }
            Locomotion::Crouching => {
                if input.is_down(Key::Up) {
                    self.exit_crouch();
                    self.start_jump(ctx);
                } else if !input.is_down(Key::Down) {
                    self.exit_crouch();
                    self.enter(Locomotion::Running);
                }
            }
            Locomotion::Jumping => {}
        }

        self.body.step();

        if self.state == Locomotion::Jumping && self.body.vel.y >= 0.0 {
            let rect = self.rect();
            if rect.bottom() >= self.floor {
                // falling and at (or through) the floor: snap the rect to the
                // ground and resync the simulation position from it
                let mut rect = rect;
                rect.y = self.floor - rect.h;
                self.body.land();
                self.body.snap_to(rect);
                self.enter(Locomotion::Running);
            }
        }

        self.animation.tick(dt);
    }

    /// Terminal transition used by collision handling.
    pub fn kill(&mut self) {
        self.body.land();
        self.enter(Locomotion::Dead);
    }

    pub fn draw(&self, out: &mut DrawList) {
        out.push(RenderLayer::Player, self.sprite(), self.rect());
    }

    fn start_jump(&mut self, ctx: &mut EngineContext) {
        if self.body.jump() {
            ctx.emit_sound(SoundEvent::Jump);
            self.enter(Locomotion::Jumping);
        }
    }

    fn start_crouch(&mut self) {
        self.restore = Some(self.rect());
        self.enter(Locomotion::Crouching);
    }

    fn exit_crouch(&mut self) {
        if let Some(rect) = self.restore.take() {
            self.body.snap_to(rect);
        }
    }

    fn enter(&mut self, state: Locomotion) {
        self.state = state;
        self.animation = match state {
            Locomotion::Running => Animation::new(self.frames.running.clone(), FRAME_DELAY_MS),
            Locomotion::Crouching => Animation::new(self.frames.crouching.clone(), FRAME_DELAY_MS),
            Locomotion::Jumping => Animation::new(self.frames.jumping.clone(), FRAME_DELAY_MS),
            Locomotion::Dead => Animation::still(self.frames.dead.clone()),
        };
    }
}
