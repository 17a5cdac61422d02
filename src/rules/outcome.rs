//! Results of rounds and games.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a round ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A player emptied their hand and collected `points`.
    Won { winner: PlayerId, points: u32 },
    /// The deck ran dry with no reserve to reshuffle. No score changes.
    Abandoned,
}

impl RoundOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            RoundOutcome::Won { winner, .. } => Some(*winner),
            RoundOutcome::Abandoned => None,
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub winner_name: String,
    pub score: u32,
    /// Rounds played, including abandoned ones.
    pub rounds: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_outcome_winner() {
        let won = RoundOutcome::Won {
            winner: PlayerId::new(2),
            points: 31,
        };
        assert_eq!(won.winner(), Some(PlayerId::new(2)));
        assert_eq!(RoundOutcome::Abandoned.winner(), None);
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult {
            winner: PlayerId::new(1),
            winner_name: "Player 2".to_string(),
            score: 512,
            rounds: 4,
        };
        assert!(result.is_winner(PlayerId::new(1)));
        assert!(!result.is_winner(PlayerId::new(0)));
    }
}
