//! A seated player: name, hand, cumulative score and decision policy.

use crate::cards::{Card, CardColor, CardId};
use crate::core::GameRng;

use super::strategy::{BalancedStrategy, Strategy};

/// A player at the table.
///
/// The hand is owned exclusively by the player; the game and card effects
/// change it only through `add_card`, `play_card` and friends.
#[derive(Debug)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    score: u32,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            score: 0,
            strategy,
        }
    }

    /// A player using `BalancedStrategy`.
    pub fn balanced(name: impl Into<String>) -> Self {
        Self::new(name, Box::new(BalancedStrategy))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in hand, in the order they were received.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cumulative score for the game.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Points the cards in hand are worth to a round winner.
    #[must_use]
    pub fn hand_score(&self) -> u32 {
        self.hand.iter().map(Card::score).sum()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Remove a card from hand by id.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let index = self.hand.iter().position(|card| card.id() == id)?;
        Some(self.hand.remove(index))
    }

    /// Take a card out of hand to play it. The caller places it on the
    /// discard pile.
    pub fn play_card(&mut self, id: CardId) -> Option<Card> {
        self.remove_card(id)
    }

    /// Empty the hand, returning its cards.
    pub fn clear_hand(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.hand)
    }

    /// Pick a card to play on `top`, per this player's strategy.
    pub fn choose_playable_card(&self, top: &Card, rng: &mut GameRng) -> Option<CardId> {
        let index = self.strategy.choose_playable_card(&self.hand, top, rng)?;
        self.hand.get(index).map(Card::id)
    }

    /// Pick a color for a Wild-family card, per this player's strategy.
    pub fn choose_color(&self, rng: &mut GameRng) -> CardColor {
        self.strategy.choose_color(&self.hand, rng)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [", self.name)?;
        for (i, card) in self.hand.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
