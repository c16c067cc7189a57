pub mod body;
pub mod mask;
pub mod rect;
pub mod rng;
pub mod timestep;
