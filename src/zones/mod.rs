//! Shared card zones.
//!
//! The only shared zone in Duo is the deck (draw pile + discard pile).
//! Hands are owned by players.

pub mod deck;

pub use deck::{Deck, STANDARD_DECK_SIZE};
