//! Comma-separated game status log.
//!
//! ```text
//! Round,Player 1,Player 2,Player 3
//! Round 1,0,87,0
//! Round 2,0,87,212
//! ...
//! Winner,Player 3
//! ```
//!
//! The first record truncates the file and writes the header; later
//! records append.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::snapshot::{GameSummary, RoundSnapshot, SnapshotSink};
use crate::error::Result;

/// Default output location, relative to the working directory.
pub const DEFAULT_CSV_PATH: &str = "Files/game_status.csv";

#[derive(Debug)]
pub struct CsvLogger {
    path: PathBuf,
    header_written: bool,
}

impl CsvLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            header_written: false,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&mut self) -> Result<File> {
        if self.header_written {
            return Ok(OpenOptions::new().append(true).open(&self.path)?);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(File::create(&self.path)?)
    }
}

impl Default for CsvLogger {
    fn default() -> Self {
        Self::new(DEFAULT_CSV_PATH)
    }
}

impl SnapshotSink for CsvLogger {
    fn record_round(&mut self, snapshot: &RoundSnapshot) -> Result<()> {
        let mut file = self.open()?;

        if !self.header_written {
            let mut header = String::from("Round");
            for name in snapshot.names() {
                header.push(',');
                header.push_str(name);
            }
            writeln!(file, "{header}")?;
            self.header_written = true;
        }

        let mut row = format!("Round {}", snapshot.round);
        for entry in &snapshot.scores {
            row.push_str(&format!(",{}", entry.score));
        }
        writeln!(file, "{row}")?;
        Ok(())
    }

    fn record_game_over(&mut self, summary: &GameSummary) -> Result<()> {
        let mut file = self.open()?;
        writeln!(file, "Winner,{}", summary.winner)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::PlayerScore;

    fn snapshot(round: u32, scores: [u32; 2]) -> RoundSnapshot {
        RoundSnapshot {
            round,
            scores: vec![
                PlayerScore {
                    name: "Player 1".to_string(),
                    score: scores[0],
                },
                PlayerScore {
                    name: "Player 2".to_string(),
                    score: scores[1],
                },
            ],
        }
    }

    #[test]
    fn test_writes_header_rows_and_winner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("status.csv");
        let mut logger = CsvLogger::new(&path);

        logger.record_round(&snapshot(1, [0, 87])).unwrap();
        logger.record_round(&snapshot(2, [512, 87])).unwrap();
        logger
            .record_game_over(&GameSummary {
                winner: "Player 1".to_string(),
                score: 512,
                rounds: 2,
            })
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Round,Player 1,Player 2\nRound 1,0,87\nRound 2,512,87\nWinner,Player 1\n"
        );
    }

    #[test]
    fn test_first_record_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.csv");
        fs::write(&path, "stale\n").unwrap();

        let mut logger = CsvLogger::new(&path);
        logger.record_round(&snapshot(1, [3, 4])).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert!(contents.starts_with("Round,Player 1,Player 2\n"));
    }

    #[test]
    fn test_unwritable_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file
        let mut logger = CsvLogger::new(dir.path());
        assert!(logger.record_round(&snapshot(1, [0, 0])).is_err());
    }
}
