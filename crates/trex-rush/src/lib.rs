pub mod banner;
pub mod enemies;
pub mod game;
pub mod gameplay;
pub mod ground;
pub mod menu;
pub mod player;
pub mod score;
pub mod sky;
pub mod sprites;
pub mod world;

pub use game::{GameOptions, TrexRush};
