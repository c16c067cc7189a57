//! Entity physics base.
//!
//! A body carries the authoritative floating-point simulation position;
//! the drawing rectangle is always derived from it through the anchor and
//! the current frame size, never stored.

use crate::core::rect::{Anchor, Rect};
use glam::Vec2;

/// Gravity added to vertical acceleration each airborne tick.
pub const GRAVITY: f32 = 0.115;
/// Vertical acceleration set by a jump.
pub const JUMP_ACCEL: f32 = -1.56;

#[derive(Debug, Clone)]
pub struct Body {
    /// Simulation position of the anchor point.
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Set by `jump()`, cleared by `land()`.
    pub airborne: bool,
    pub anchor: Anchor,
}

impl Body {
    pub fn new(anchor: Anchor, point: Vec2) -> Self {
        Self {
            pos: point,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            airborne: false,
            anchor,
        }
    }

    /// Advance one simulation tick.
    ///
    /// Position integrates velocity before velocity integrates acceleration;
    /// the ordering is part of the movement contract.
    pub fn step(&mut self) {
        if self.airborne {
            self.acc.y += GRAVITY;
        }
        self.pos += self.vel;
        self.vel += self.acc;
    }

    /// Start a jump. Returns false (and does nothing) if already airborne.
    pub fn jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.acc.y = JUMP_ACCEL;
        self.airborne = true;
        true
    }

    /// Stop all motion and return to grounded state. Idempotent.
    pub fn land(&mut self) {
        self.airborne = false;
        self.vel = Vec2::ZERO;
        self.acc = Vec2::ZERO;
    }

    /// The bounding rectangle for the current frame size.
    pub fn rect(&self, size: Vec2) -> Rect {
        Rect::anchored(self.anchor, self.pos, size)
    }

    /// Re-derive the simulation position from a repositioned rectangle.
    ///
    /// Required after any direct rectangle placement (floor snap, tile
    /// recycling); without it the next `step` would move from a stale
    /// position.
    pub fn snap_to(&mut self, rect: Rect) {
        self.pos = rect.point(self.anchor);
    }
}
