//! Survival-time score and its glyph composite.

use std::collections::HashMap;

use rush_engine::{DrawList, Rect, RenderLayer, SpriteDef};

use crate::sprites::Sprites;

/// One point per second of survival.
const TICK_DELAY_MS: f32 = 1000.0;
/// Displayed zero-padded width.
const DIGITS: usize = 4;
/// Distance from the screen's top-right corner.
const MARGIN: f32 = 16.0;

/// Digit sprites with their x offsets inside the composite.
type Layout = Vec<(f32, SpriteDef)>;

pub struct Score {
    pub enabled: bool,
    value: u32,
    elapsed: f32,
    /// Composites are a pure function of the value, so they are memoized;
    /// consecutive ticks mostly redraw the same number.
    cache: HashMap<u32, Layout>,
}

impl Score {
    pub fn new(sprites: &Sprites) -> Self {
        let mut score = Self {
            enabled: true,
            value: 0,
            elapsed: 0.0,
            cache: HashMap::new(),
        };
        score.memoize(sprites);
        score
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn update(&mut self, sprites: &Sprites, dt: f32) {
        if !self.enabled {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= TICK_DELAY_MS {
            self.value += 1;
            self.elapsed %= TICK_DELAY_MS;
            self.memoize(sprites);
        }
    }

    fn memoize(&mut self, sprites: &Sprites) {
        if self.cache.contains_key(&self.value) {
            return;
        }
        let text = format!("{:0width$}", self.value, width = DIGITS);
        let mut layout = Vec::with_capacity(text.len());
        let mut x = 0.0;
        for ch in text.chars() {
            let digit = ch.to_digit(10).unwrap_or(0) as usize;
            let sprite = sprites.digits[digit].clone();
            let w = sprite.size().x;
            layout.push((x, sprite));
            x += w;
        }
        self.cache.insert(self.value, layout);
    }

    pub fn draw(&self, bounds: &Rect, out: &mut DrawList) {
        let Some(layout) = self.cache.get(&self.value) else {
            return;
        };
        let total: f32 = layout.iter().map(|(_, s)| s.size().x).sum();
        let origin = bounds.right() - MARGIN - total;
        for (dx, sprite) in layout {
            let size = sprite.size();
            out.push(
                RenderLayer::Hud,
                sprite,
                Rect::new(origin + dx, MARGIN, size.x, size.y),
            );
        }
    }
}
