//! The main menu: looping logo banner plus the start prompt.

use glam::Vec2;
use rush_engine::{Anchor, DrawList, InputState, Key, Rect, RenderLayer};

use crate::banner::Banner;
use crate::sprites::Sprites;

/// How long the logo holds center screen before sliding off again.
const LOGO_DWELL_MS: f32 = 1000.0;
/// Logo track height above the vertical center.
const LOGO_LIFT: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start,
}

pub struct Menu {
    logo: Banner,
}

impl Menu {
    pub fn new(sprites: &Sprites, bounds: &Rect) -> Self {
        Self {
            logo: Self::spawn_logo(sprites, bounds),
        }
    }

    fn spawn_logo(sprites: &Sprites, bounds: &Rect) -> Banner {
        Banner::slide_in(
            sprites.logo.clone(),
            bounds,
            bounds.centery() - LOGO_LIFT,
            Some(LOGO_DWELL_MS),
        )
    }

    pub fn update(
        &mut self,
        sprites: &Sprites,
        bounds: &Rect,
        input: &InputState,
        dt: f32,
    ) -> MenuAction {
        if input.was_pressed(Key::Confirm) {
            return MenuAction::Start;
        }
        self.logo.update(bounds, dt);
        if self.logo.is_done() {
            // keep the logo cycling while the menu is open
            self.logo = Self::spawn_logo(sprites, bounds);
        }
        MenuAction::None
    }

    pub fn draw(&self, sprites: &Sprites, bounds: &Rect, out: &mut DrawList) {
        self.logo.draw(out);
        let prompt = &sprites.press_start;
        let dst = Rect::anchored(
            Anchor::MidTop,
            Vec2::new(bounds.centerx(), bounds.centery() + 10.0),
            prompt.size(),
        );
        out.push(RenderLayer::Hud, prompt, dst);
    }
}
