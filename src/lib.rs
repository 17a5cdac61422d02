//! # duo-cards
//!
//! A deterministic simulation engine for Duo, a shedding card game in the
//! family of Uno.
//!
//! ## Design Principles
//!
//! 1. **Mediated Effects**: Cards never hold references to the table. An
//!    action card resolves against the `GameMediator` it is handed, and
//!    the game is the only mediator.
//!
//! 2. **All-or-Nothing Draws**: Penalty draws work on a copy of the deck
//!    and commit only when every card could be drawn.
//!
//! 3. **Seeded Randomness**: Every shuffle and every decision comes from a
//!    `GameRng` derived from one seed, so a seed replays a game exactly.
//!
//! ## Architecture
//!
//! - **Persistent Piles**: Draw and discard piles are `im` vectors, so a
//!   working copy of the deck costs O(1).
//!
//! - **Pluggable Policies**: Card and color choices go through the
//!   `Strategy` trait; scores leave the engine through `SnapshotSink`.
//!
//! ## Modules
//!
//! - `core`: Player IDs, turn direction, RNG, configuration
//! - `cards`: Card model, playability, and action effects
//! - `zones`: The draw and discard piles
//! - `rules`: The mediator trait, phases, and outcomes
//! - `players`: Hands, scores, and decision strategies
//! - `games`: The Duo round and game driver
//! - `export`: Per-round score snapshots and the CSV log

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod players;
pub mod games;
pub mod export;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Direction, GameConfig, GameRng, PlayerId, PlayerMap};

pub use crate::cards::{ActionType, Card, CardColor, CardId, CardKind};

pub use crate::zones::{Deck, STANDARD_DECK_SIZE};

pub use crate::rules::{GameMediator, GamePhase, GameResult, RoundOutcome};

pub use crate::players::{BalancedStrategy, FirstPlayableStrategy, Player, Strategy};

pub use crate::games::duo::{DuoGame, DuoGameBuilder};

pub use crate::export::{CsvLogger, GameSummary, MemorySink, RoundSnapshot, SnapshotSink};

pub use crate::error::{GameError, Result};
