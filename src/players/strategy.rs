//! Decision policies.
//!
//! A `Strategy` answers the only two questions the engine ever asks a
//! player: which playable card to put down, and which color to name for
//! a Wild-family card. All randomness comes from the `GameRng` passed in.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Card, CardColor};
use crate::core::GameRng;

/// Hand indices; hands rarely grow past a dozen cards.
type Picks = SmallVec<[usize; 8]>;

/// A replaceable player decision policy.
pub trait Strategy: std::fmt::Debug {
    /// Index into `hand` of the card to play on `top`, or `None` if no
    /// card in hand is playable.
    ///
    /// Implementations must only return indices of cards for which
    /// `is_playable(top)` holds.
    fn choose_playable_card(&self, hand: &[Card], top: &Card, rng: &mut GameRng) -> Option<usize>;

    /// Color to name for a Wild-family card. Never `CardColor::Wild`.
    fn choose_color(&self, hand: &[Card], rng: &mut GameRng) -> CardColor;
}

/// Counts of each concrete color in a hand. Wild cards are ignored.
fn color_tally(hand: &[Card]) -> FxHashMap<CardColor, usize> {
    let mut tally: FxHashMap<CardColor, usize> =
        CardColor::CONCRETE.iter().map(|&color| (color, 0)).collect();
    for card in hand {
        if let Some(count) = tally.get_mut(&card.color()) {
            *count += 1;
        }
    }
    tally
}

/// Colors with the highest tally, in `CardColor` order.
fn most_common_colors(hand: &[Card]) -> SmallVec<[CardColor; 4]> {
    let tally = color_tally(hand);
    let max = tally.values().copied().max().unwrap_or(0);
    let mut best: SmallVec<[CardColor; 4]> = tally
        .into_iter()
        .filter(|&(_, count)| count == max)
        .map(|(color, _)| color)
        .collect();
    best.sort();
    best
}

/// The default policy.
///
/// Playable cards are split into same-color-as-top, other-color and
/// unresolved wild cards. A coin flip decides whether to lead with the
/// highest-scoring same-color card; otherwise a random other-color card is
/// played, falling back to the best same-color card, then a random wild.
///
/// Colors are named after the most common concrete color in hand, ties
/// broken at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct BalancedStrategy;

impl Strategy for BalancedStrategy {
    fn choose_playable_card(&self, hand: &[Card], top: &Card, rng: &mut GameRng) -> Option<usize> {
        let mut same_color = Picks::new();
        let mut other_color = Picks::new();
        let mut wild = Picks::new();

        for (i, card) in hand.iter().enumerate() {
            if !card.is_playable(top) {
                continue;
            }
            if card.color().is_wild() {
                wild.push(i);
            } else if card.color() == top.color() {
                same_color.push(i);
            } else {
                other_color.push(i);
            }
        }

        // First card in hand order among the highest scores
        let best_same = same_color
            .iter()
            .copied()
            .min_by_key(|&i| std::cmp::Reverse(hand[i].score()));

        let prefer_same_color = rng.coin_flip();

        if prefer_same_color && best_same.is_some() {
            return best_same;
        }
        if let Some(&i) = rng.choose(&other_color) {
            return Some(i);
        }
        if best_same.is_some() {
            return best_same;
        }
        rng.choose(&wild).copied()
    }

    fn choose_color(&self, hand: &[Card], rng: &mut GameRng) -> CardColor {
        let best = most_common_colors(hand);
        // With no concrete colors in hand every color ties at zero.
        best[rng.gen_range(0..best.len())]
    }
}

/// Deterministic policy: the first playable card in hand order, and the
/// most common color with ties going to the earliest in `CardColor` order.
///
/// Never touches the RNG, which makes scripted scenarios reproducible
/// card by card.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPlayableStrategy;

impl Strategy for FirstPlayableStrategy {
    fn choose_playable_card(&self, hand: &[Card], top: &Card, _rng: &mut GameRng) -> Option<usize> {
        hand.iter().position(|card| card.is_playable(top))
    }

    fn choose_color(&self, hand: &[Card], _rng: &mut GameRng) -> CardColor {
        most_common_colors(hand)[0]
    }
}
