//! The shared deck: draw pile and discard pile.
//!
//! Both piles are `im::Vector`s, so cloning a whole deck (which the
//! mediator does every time an effect asks for a working copy) is O(1).
//! The deck owns its own RNG stream; a working copy that is dropped
//! without being committed leaves the authoritative shuffle sequence alone.
//!
//! ## Pile orientation
//!
//! - Draw pile: top is index 0, cards are drawn from the front.
//! - Discard pile: top is the last element.

use im::Vector;
use tracing::debug;

use crate::cards::{ActionType, Card, CardColor, CardId};
use crate::core::GameRng;
use crate::error::{GameError, Result};
use crate::players::Player;

/// Cards in a standard Duo deck.
pub const STANDARD_DECK_SIZE: usize = 109;

/// Draw pile plus discard pile.
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vector<Card>,
    discard_pile: Vector<Card>,
    rng: GameRng,
}

impl Deck {
    /// Build and shuffle the standard 109-card deck.
    ///
    /// Per concrete color: one 0, two each of 1-9, two each of DrawTwo,
    /// Reverse and Skip. Plus four Wild, four WildDrawFour and one
    /// ShuffleHands.
    ///
    /// ```
    /// use duo_cards::core::GameRng;
    /// use duo_cards::zones::{Deck, STANDARD_DECK_SIZE};
    ///
    /// let deck = Deck::standard(GameRng::new(7));
    /// assert_eq!(deck.draw_pile_len(), STANDARD_DECK_SIZE);
    /// assert!(deck.top_discard_pile_card().is_none());
    /// ```
    #[must_use]
    pub fn standard(rng: GameRng) -> Self {
        let mut deck = Self::stacked(standard_cards(), rng);
        deck.shuffle();
        deck
    }

    /// An empty deck.
    #[must_use]
    pub fn empty(rng: GameRng) -> Self {
        Self {
            draw_pile: Vector::new(),
            discard_pile: Vector::new(),
            rng,
        }
    }

    /// A deck whose draw pile is exactly `cards`, top first, unshuffled.
    ///
    /// Cards are stamped with ids in order. Used to set up fixed scenarios.
    #[must_use]
    pub fn stacked(cards: impl IntoIterator<Item = Card>, rng: GameRng) -> Self {
        let draw_pile = cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| card.with_id(CardId::new(i as u32)))
            .collect();
        Self {
            draw_pile,
            discard_pile: Vector::new(),
            rng,
        }
    }

    /// Shuffle the draw pile.
    pub fn shuffle(&mut self) {
        let mut cards: Vec<Card> = self.draw_pile.iter().cloned().collect();
        self.rng.shuffle(&mut cards);
        self.draw_pile = cards.into_iter().collect();
    }

    /// Move all but the top discard back into the draw pile and shuffle.
    ///
    /// No-op unless the discard pile holds more than one card.
    pub fn reshuffle(&mut self) {
        if self.discard_pile.len() <= 1 {
            return;
        }
        let top = self.discard_pile.pop_back();
        let reclaimed = std::mem::take(&mut self.discard_pile);
        debug!(cards = reclaimed.len(), "reshuffling discard pile into draw pile");
        self.draw_pile.append(reclaimed);
        self.discard_pile.extend(top);
        self.shuffle();
    }

    /// Draw the top card, reshuffling the discard pile first if needed.
    ///
    /// Returns `DeckExhausted` when neither pile can supply a card.
    pub fn draw_card(&mut self) -> Result<Card> {
        if self.draw_pile.is_empty() {
            self.reshuffle();
        }
        self.draw_pile.pop_front().ok_or(GameError::DeckExhausted)
    }

    /// Draw `count` cards, or none at all.
    ///
    /// Fails with `DeckExhausted` without touching either pile when fewer
    /// than `count` cards can be reached.
    pub fn draw_cards(&mut self, count: usize) -> Result<Vec<Card>> {
        if count > self.drawable() {
            return Err(GameError::DeckExhausted);
        }
        (0..count).map(|_| self.draw_card()).collect()
    }

    /// Deal `count` cards to each player, one at a time in seat order.
    pub fn deal_cards(&mut self, players: &mut [Player], count: usize) -> Result<()> {
        for _ in 0..count {
            for player in players.iter_mut() {
                let card = self.draw_card()?;
                player.add_card(card);
            }
        }
        Ok(())
    }

    pub fn put_card_to_discard_pile(&mut self, card: Card) {
        self.discard_pile.push_back(card);
    }

    /// The visible top of the discard pile.
    #[must_use]
    pub fn top_discard_pile_card(&self) -> Option<&Card> {
        self.discard_pile.back()
    }

    /// Put a card at the bottom of the draw pile.
    pub fn add_card_to_draw_pile(&mut self, card: Card) {
        self.draw_pile.push_back(card);
    }

    /// Cards reachable by drawing: the draw pile plus everything under the
    /// discard top.
    #[must_use]
    pub fn drawable(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len().saturating_sub(1)
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Total cards in both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draw pile, top first.
    pub fn draw_pile(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile.iter()
    }

    /// Discard pile, bottom first.
    pub fn discard_pile(&self) -> impl Iterator<Item = &Card> {
        self.discard_pile.iter()
    }
}

fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);

    for color in CardColor::CONCRETE {
        cards.push(numbered(color, 0));
        for n in 1..=9 {
            cards.push(numbered(color, n));
            cards.push(numbered(color, n));
        }
    }

    for color in CardColor::CONCRETE {
        for action in [ActionType::DrawTwo, ActionType::Reverse, ActionType::Skip] {
            cards.push(printed(color, action));
            cards.push(printed(color, action));
        }
    }

    for _ in 0..4 {
        cards.push(printed(CardColor::Wild, ActionType::Wild));
        cards.push(printed(CardColor::Wild, ActionType::WildDrawFour));
    }
    cards.push(printed(CardColor::Wild, ActionType::ShuffleHands));

    cards
}

// The standard composition only uses valid color/value pairs.
fn numbered(color: CardColor, n: u8) -> Card {
    match Card::number(color, n) {
        Ok(card) => card,
        Err(err) => unreachable!("standard deck card: {err}"),
    }
}

fn printed(color: CardColor, action: ActionType) -> Card {
    match Card::action(color, action) {
        Ok(card) => card,
        Err(err) => unreachable!("standard deck card: {err}"),
    }
}
