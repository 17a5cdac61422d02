//! Round-snapshot export.
//!
//! The game hands a `RoundSnapshot` to its sink after every round and a
//! `GameSummary` once the game is decided. Sinks have no say in the
//! simulation.

pub mod csv;
pub mod snapshot;

pub use self::csv::{CsvLogger, DEFAULT_CSV_PATH};
pub use snapshot::{GameSummary, MemorySink, PlayerScore, RoundSnapshot, SnapshotSink};
