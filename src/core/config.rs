//! Game configuration.
//!
//! `GameConfig` carries the table-level rules that vary between games:
//! how many players sit down, how many cards each is dealt, and the
//! cumulative score that ends the game.

use serde::{Deserialize, Serialize};

use crate::zones::STANDARD_DECK_SIZE;

/// Smallest table the engine supports.
pub const MIN_PLAYERS: usize = 2;

/// Largest table the engine supports. Ten players at seven cards each
/// still leaves a healthy draw pile from the 109-card deck.
pub const MAX_PLAYERS: usize = 10;

/// Player count range used when no count is configured.
pub const DEFAULT_PLAYER_RANGE: std::ops::RangeInclusive<usize> = 2..=4;

pub const DEFAULT_HAND_SIZE: usize = 7;

pub const DEFAULT_WIN_SCORE: u32 = 500;

/// Cards the deal must leave behind: the starting card plus the largest
/// penalty it can impose.
const START_RESERVE: usize = 5;

/// Panic unless `player_count` hands of `hand_size` cards can be dealt
/// with the starting card still to come.
pub fn assert_deal_fits(player_count: usize, hand_size: usize) {
    assert!(
        player_count * hand_size + START_RESERVE <= STANDARD_DECK_SIZE,
        "Dealing {hand_size} cards to {player_count} players does not fit the deck"
    );
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players. `None` picks uniformly from 2-4 at game start.
    pub player_count: Option<usize>,

    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,

    /// Cumulative score that ends the game.
    pub win_score: u32,

    /// Explicit player names, in seat order. Overrides `player_count`.
    pub player_names: Option<Vec<String>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: None,
            hand_size: DEFAULT_HAND_SIZE,
            win_score: DEFAULT_WIN_SCORE,
            player_names: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the number of players.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&count),
            "Player count must be {MIN_PLAYERS}-{MAX_PLAYERS}"
        );
        assert_deal_fits(count, self.hand_size);
        self.player_count = Some(count);
        self
    }

    /// Name the players explicitly (seat order).
    #[must_use]
    pub fn with_player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()),
            "Player count must be {MIN_PLAYERS}-{MAX_PLAYERS}"
        );
        assert_deal_fits(names.len(), self.hand_size);
        self.player_count = Some(names.len());
        self.player_names = Some(names);
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Hand size must be at least 1");
        if let Some(count) = self.player_count {
            assert_deal_fits(count, size);
        }
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_win_score(mut self, score: u32) -> Self {
        self.win_score = score;
        self
    }

    /// Resolve the names of the players who sit down, drawing the player
    /// count with `pick_count` when none is configured.
    pub fn resolve_player_names(&self, pick_count: impl FnOnce() -> usize) -> Vec<String> {
        if let Some(names) = &self.player_names {
            return names.clone();
        }
        let count = self.player_count.unwrap_or_else(pick_count);
        (1..=count).map(|i| format!("Player {i}")).collect()
    }
}
