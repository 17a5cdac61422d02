//! End-of-round records and the sink they are delivered to.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One player's standing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub name: String,
    pub score: u32,
}

/// Scores at the end of a round, in seat order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: u32,
    pub scores: Vec<PlayerScore>,
}

impl RoundSnapshot {
    /// Player names in seat order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scores.iter().map(|entry| entry.name.as_str())
    }
}

/// Terminal record once the game is decided.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub winner: String,
    pub score: u32,
    pub rounds: u32,
}

/// Receives round and game records.
///
/// The game calls `record_round` once per finished round and
/// `record_game_over` once, after the final round's record. Errors are
/// logged by the caller and never stop the simulation.
pub trait SnapshotSink: std::fmt::Debug {
    fn record_round(&mut self, snapshot: &RoundSnapshot) -> Result<()>;

    fn record_game_over(&mut self, summary: &GameSummary) -> Result<()>;
}

#[derive(Debug, Default)]
struct MemoryLog {
    rounds: Vec<RoundSnapshot>,
    summary: Option<GameSummary>,
}

/// In-memory sink. Clones share the same log, so a test can keep one
/// handle and give the other to the game.
///
/// ```
/// use duo_cards::export::{MemorySink, RoundSnapshot, SnapshotSink};
///
/// let sink = MemorySink::new();
/// let mut handle = sink.clone();
/// handle.record_round(&RoundSnapshot { round: 1, scores: vec![] }).unwrap();
/// assert_eq!(sink.rounds().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    log: Rc<RefCell<MemoryLog>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rounds(&self) -> Vec<RoundSnapshot> {
        self.log.borrow().rounds.clone()
    }

    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.log.borrow().summary.clone()
    }
}

impl SnapshotSink for MemorySink {
    fn record_round(&mut self, snapshot: &RoundSnapshot) -> Result<()> {
        self.log.borrow_mut().rounds.push(snapshot.clone());
        Ok(())
    }

    fn record_game_over(&mut self, summary: &GameSummary) -> Result<()> {
        self.log.borrow_mut().summary = Some(summary.clone());
        Ok(())
    }
}
