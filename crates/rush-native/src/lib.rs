pub mod assets;
pub mod audio;
pub mod clock;
pub mod shell;

pub use assets::{load_assets, AtlasPixels, LoadedAssets};
pub use clock::FrameLimiter;
pub use shell::run;
