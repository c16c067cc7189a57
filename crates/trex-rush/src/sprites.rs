//! The named atlas cutouts the game uses, resolved once at startup.
//!
//! Resolving everything up front turns a missing manifest entry into a
//! fatal startup error instead of an in-loop surprise.

use rush_engine::{AssetError, SpriteDef, SpriteRegistry};

pub struct Sprites {
    pub running: [SpriteDef; 2],
    pub crouching: [SpriteDef; 2],
    pub jumping: [SpriteDef; 2],
    pub dead: SpriteDef,
    pub cacti: [SpriteDef; 3],
    pub dactyl: [SpriteDef; 2],
    pub ground: [SpriteDef; 3],
    pub cloud: SpriteDef,
    pub digits: [SpriteDef; 10],
    pub logo: SpriteDef,
    pub game_over: SpriteDef,
    pub press_start: SpriteDef,
}

impl Sprites {
    pub fn load(registry: &SpriteRegistry) -> Result<Self, AssetError> {
        let digit = |d: usize| registry.require(&format!("digit{d}"));
        Ok(Self {
            running: [
                registry.require("trex_running1")?,
                registry.require("trex_running2")?,
            ],
            crouching: [
                registry.require("trex_crouching1")?,
                registry.require("trex_crouching2")?,
            ],
            jumping: [
                registry.require("trex_jumping1")?,
                registry.require("trex_jumping2")?,
            ],
            dead: registry.require("trex_dead")?,
            cacti: [
                registry.require("cactus1")?,
                registry.require("cactus2")?,
                registry.require("cactus3")?,
            ],
            dactyl: [registry.require("dactyl1")?, registry.require("dactyl2")?],
            ground: [
                registry.require("ground1")?,
                registry.require("ground2")?,
                registry.require("ground3")?,
            ],
            cloud: registry.require("cloud")?,
            digits: [
                digit(0)?,
                digit(1)?,
                digit(2)?,
                digit(3)?,
                digit(4)?,
                digit(5)?,
                digit(6)?,
                digit(7)?,
                digit(8)?,
                digit(9)?,
            ],
            logo: registry.require("logo")?,
            game_over: registry.require("gameover")?,
            press_start: registry.require("pressstart")?,
        })
    }
}

/// Fully opaque stand-in sprites with the real frame sizes, so game logic
/// can be exercised without the atlas.
#[cfg(test)]
pub fn test_sprites() -> Sprites {
    let s = SpriteDef::opaque;
    Sprites {
        running: [s(44.0, 47.0), s(44.0, 47.0)],
        crouching: [s(59.0, 30.0), s(59.0, 30.0)],
        jumping: [s(44.0, 47.0), s(44.0, 47.0)],
        dead: s(44.0, 47.0),
        cacti: [s(25.0, 50.0), s(17.0, 35.0), s(25.0, 50.0)],
        dactyl: [s(46.0, 40.0), s(46.0, 40.0)],
        ground: [s(64.0, 16.0), s(64.0, 16.0), s(64.0, 16.0)],
        cloud: s(46.0, 14.0),
        digits: [
            s(10.0, 13.0),
            s(10.0, 13.0),
            s(10.0, 13.0),
            s(10.0, 13.0),
            s(10.0, 13.0),
            s(10.0, 13.0),
            s(10.0, 13.0),
            s(10.0, 13.0),
            s(10.0, 13.0),
            s(10.0, 13.0),
        ],
        logo: s(191.0, 44.0),
        game_over: s(190.0, 20.0),
        press_start: s(160.0, 20.0),
    }
}
