pub mod animation;
pub mod assets;
pub mod core;
pub mod game;
pub mod input;
pub mod render;
pub mod sprite;

// Re-export key types at crate root for convenience
pub use animation::Animation;
pub use assets::manifest::{AtlasManifest, Region};
pub use assets::registry::{AssetError, SpriteRegistry};
pub use crate::core::body::{Body, GRAVITY, JUMP_ACCEL};
pub use crate::core::mask::Mask;
pub use crate::core::rect::{Anchor, Rect};
pub use crate::core::rng::Rng;
pub use crate::core::timestep::FixedTimestep;
pub use game::{EngineContext, Game, GameConfig, GameRunner, SoundEvent};
pub use input::{InputEvent, InputQueue, InputState, Key};
pub use render::{DrawCommand, DrawList, RenderLayer};
pub use sprite::SpriteDef;
