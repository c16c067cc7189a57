//! Sliding message banners (menu logo, game-over message).

use glam::Vec2;
use rush_engine::{Anchor, Body, DrawList, Rect, RenderLayer, SpriteDef};

/// Slide-on entry velocity, px per tick.
const SLIDE_ON_VX: f32 = 80.0;
/// Constant deceleration during both slides.
const SLIDE_ACCEL: f32 = -3.0;
/// Slide-off exit velocity, px per tick.
const SLIDE_OFF_VX: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    SlideOn,
    Idle,
    SlideOff,
    Done,
}

/// A message that slides in from off-screen left, settles on the screen
/// center, optionally dwells and slides back off. One state machine covers
/// both the menu logo and the game-over message; only parameters differ.
pub struct Banner {
    pub body: Body,
    sprite: SpriteDef,
    target_x: f32,
    /// Idle hold time, ms. None idles indefinitely.
    dwell: Option<f32>,
    elapsed: f32,
    phase: BannerPhase,
}

impl Banner {
    pub fn slide_in(sprite: SpriteDef, bounds: &Rect, centery: f32, dwell: Option<f32>) -> Self {
        let size = sprite.size();
        // start fully off-screen: right edge on the viewport's left edge
        let mut body = Body::new(
            Anchor::Center,
            Vec2::new(bounds.left() - size.x / 2.0, centery),
        );
        body.vel.x = SLIDE_ON_VX;
        body.acc.x = SLIDE_ACCEL;
        Self {
            body,
            sprite,
            target_x: bounds.centerx(),
            dwell,
            elapsed: 0.0,
            phase: BannerPhase::SlideOn,
        }
    }

    pub fn update(&mut self, bounds: &Rect, dt: f32) {
        match self.phase {
            BannerPhase::SlideOn => {
                // deceleration has reversed the motion and the center is at
                // (or already past) the target
                if self.body.vel.x < 0.0 && self.body.pos.x <= self.target_x {
                    self.body.land();
                    self.body.pos.x = self.target_x;
                    self.phase = BannerPhase::Idle;
                }
            }
            BannerPhase::Idle => {
                if let Some(dwell) = self.dwell {
                    self.elapsed += dt;
                    if self.elapsed > dwell {
                        self.phase = BannerPhase::SlideOff;
                        self.body.vel.x = SLIDE_OFF_VX;
                        self.body.acc.x = SLIDE_ACCEL;
                    }
                }
            }
            BannerPhase::SlideOff => {
                if self.rect().right() < bounds.left() {
                    self.phase = BannerPhase::Done;
                }
            }
            BannerPhase::Done => return,
        }
        self.body.step();
    }

    pub fn rect(&self) -> Rect {
        self.body.rect(self.sprite.size())
    }

    pub fn phase(&self) -> BannerPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == BannerPhase::Done
    }

    pub fn draw(&self, out: &mut DrawList) {
        if self.phase != BannerPhase::Done {
            out.push(RenderLayer::Messages, &self.sprite, self.rect());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1000.0 / 60.0;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 1024.0, 400.0)
    }

    fn banner(dwell: Option<f32>) -> Banner {
        Banner::slide_in(SpriteDef::opaque(190.0, 20.0), &bounds(), 200.0, dwell)
    }

    #[test]
    fn slide_on_settles_exactly_on_center() {
        let b = bounds();
        let mut banner = banner(None);
        assert!(banner.rect().right() <= b.left());

        for _ in 0..300 {
            banner.update(&b, DT);
            if banner.phase() == BannerPhase::Idle {
                break;
            }
        }
        assert_eq!(banner.phase(), BannerPhase::Idle);
        assert_eq!(banner.rect().centerx(), b.centerx());
        assert_eq!(banner.body.vel, Vec2::ZERO);
    }

    #[test]
    fn idle_without_dwell_is_forever() {
        let b = bounds();
        let mut banner = banner(None);
        for _ in 0..2000 {
            banner.update(&b, DT);
        }
        assert_eq!(banner.phase(), BannerPhase::Idle);
    }

    #[test]
    fn dwell_expires_into_slide_off_and_done() {
        let b = bounds();
        let mut banner = banner(Some(1000.0));
        let mut ticks = 0u32;
        while !banner.is_done() {
            banner.update(&b, DT);
            ticks += 1;
            assert!(ticks < 2000, "banner never slid off");
        }
        // once done it stays put
        let rect = banner.rect();
        banner.update(&b, DT);
        assert_eq!(banner.rect(), rect);
        assert!(banner.rect().right() < b.left());
    }

    #[test]
    fn done_banners_draw_nothing() {
        let b = bounds();
        let mut banner = banner(Some(0.0));
        while !banner.is_done() {
            banner.update(&b, DT);
        }
        let mut out = DrawList::new();
        banner.draw(&mut out);
        assert!(out.is_empty());
    }
}
