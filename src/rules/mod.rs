//! Game rules plumbing.
//!
//! - `GameMediator`: the only door card effects use to reach game state
//! - `GamePhase`: round/game lifecycle
//! - `RoundOutcome` / `GameResult`: what rounds and games produce

pub mod mediator;
pub mod outcome;

pub use mediator::{GameMediator, GamePhase};
pub use outcome::{GameResult, RoundOutcome};
