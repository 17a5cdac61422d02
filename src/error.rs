//! Error types for the Duo engine.

use thiserror::Error;

use crate::cards::{CardColor, CardKind};
use crate::rules::GamePhase;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid card value: {0} (number cards must be 0-9)")]
    InvalidCardValue(u8),

    #[error("Invalid card color: {kind} cannot be {color}")]
    InvalidCardColor { color: CardColor, kind: CardKind },

    #[error("Deck exhausted: no cards left to draw")]
    DeckExhausted,

    #[error("Invalid phase: expected {expected:?}, found {actual:?}")]
    InvalidPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
