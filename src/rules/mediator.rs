//! The boundary through which card effects reach shared game state.
//!
//! Cards never hold references into the game. When a card resolves, the
//! game hands itself to `Card::execute_effect` as a `&mut dyn GameMediator`,
//! and the effect mutates turn order, direction, color, hands and the deck
//! only through these methods.
//!
//! ## Deck ownership
//!
//! `deck()` returns an owned working copy and `set_deck()` commits one back.
//! An effect that fails halfway simply drops its copy, leaving the
//! authoritative deck as it was.

use crate::cards::CardColor;
use crate::core::PlayerId;
use crate::players::Player;
use crate::zones::Deck;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GamePhase {
    /// Built but `start_game` not yet called.
    NotStarted,
    /// Cards dealt, turns in progress.
    InRound,
    /// A round finished; the next one has not been dealt.
    RoundEnded,
    /// A player reached the win score.
    GameOver,
}

/// Mediator operations available to card effects.
pub trait GameMediator {
    /// Seat whose turn it is.
    fn current_player_id(&self) -> PlayerId;

    fn current_player(&self) -> &Player;

    fn current_player_mut(&mut self) -> &mut Player;

    /// Advance one seat in the current direction.
    fn move_to_next_player(&mut self);

    /// Flip the direction of play.
    fn reverse_direction(&mut self);

    fn set_current_color(&mut self, color: CardColor);

    /// Pool every hand, shuffle, and deal back round-robin from seat 0.
    fn shuffle_hands(&mut self);

    /// Working copy of the deck.
    fn deck(&self) -> Deck;

    /// Commit a working copy as the authoritative deck.
    fn set_deck(&mut self, deck: Deck);

    /// Ask the current player's strategy for a color.
    fn choose_color_for_current_player(&mut self) -> CardColor;
}
