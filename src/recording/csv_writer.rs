//! CSV export of match results.
//!
//! Appends one summary row per finished game so repeated runs accumulate in
//! the same results file. The full move list stays in the JSON records; the
//! CSV carries what the comparison scripts aggregate.

use crate::recording::match_record::MatchRecord;
use std::fs::OpenOptions;
use std::path::Path;

const HEADER: [&str; 8] = [
    "match_id",
    "timestamp",
    "board_size",
    "white",
    "black",
    "seed",
    "plies",
    "outcome",
];

/// Appending CSV writer for match results.
pub struct MatchCsvWriter {
    writer: csv::Writer<std::fs::File>,
}

impl MatchCsvWriter {
    /// Opens `path` for appending, writing the header when the file is new.
    pub fn create<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let is_new = !path.exists();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        if is_new {
            writer.write_record(HEADER)?;
        }
        Ok(MatchCsvWriter { writer })
    }

    /// Appends one result row and flushes it to disk.
    pub fn append(&mut self, record: &MatchRecord) -> crate::Result<()> {
        self.writer.write_record([
            record.match_id.clone(),
            record.timestamp.to_string(),
            record.board_size.to_string(),
            record.white.clone(),
            record.black.clone(),
            record.seed.to_string(),
            record.plies().to_string(),
            record.outcome.to_string(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::GameOutcome;
    use crate::game::piece::{Color, Square};
    use crate::recording::match_record::MoveRecord;

    fn record(id: &str) -> MatchRecord {
        MatchRecord {
            match_id: id.to_string(),
            timestamp: 1_700_000_000,
            board_size: 8,
            white: "minimax(depth=2)".to_string(),
            black: "random".to_string(),
            seed: 7,
            moves: vec![MoveRecord {
                ply: 0,
                mover: Color::White,
                from: Square::new(5, 2),
                to: Square::new(4, 2),
                captured: false,
            }],
            outcome: GameOutcome::Tie,
        }
    }

    #[test]
    fn test_header_written_once_across_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        {
            let mut writer = MatchCsvWriter::create(&path).unwrap();
            writer.append(&record("first")).unwrap();
        }
        {
            let mut writer = MatchCsvWriter::create(&path).unwrap();
            writer.append(&record("second")).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("match_id,"));
        assert!(lines[1].starts_with("first,"));
        assert!(lines[2].starts_with("second,"));
        assert!(lines[1].ends_with(",tie"));
    }
}
