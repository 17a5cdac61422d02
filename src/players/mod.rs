//! Players and their decision policies.

pub mod player;
pub mod strategy;

pub use player::Player;
pub use strategy::{BalancedStrategy, FirstPlayableStrategy, Strategy};
