//! Match recording: per-game records and CSV export.

pub mod csv_writer;
pub mod match_record;
