//! Core engine types: seats, direction, RNG, configuration.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{Direction, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::GameConfig;
