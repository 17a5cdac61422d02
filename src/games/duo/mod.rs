//! Duo: the shedding card game.
//!
//! - 2-10 players, 7 cards each from a 109-card deck
//! - Play a card matching the top discard by color, number, or action;
//!   wild cards match anything
//! - With nothing playable, draw one card and play it if it matches
//! - Emptying your hand wins the round and scores every card left in the
//!   other hands
//! - First to 500 points wins the game
//!
//! ```
//! use duo_cards::games::duo::DuoGameBuilder;
//!
//! let mut game = DuoGameBuilder::new().player_count(3).build(42);
//! let result = game.play_to_completion().unwrap();
//! assert!(result.score >= 500);
//! ```

mod game;

pub use game::{DuoGame, DuoGameBuilder};
