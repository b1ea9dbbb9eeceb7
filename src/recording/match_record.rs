//! Match recording data structures.
//!
//! A [`MatchRecord`] captures one finished AI-vs-AI game (who played, how
//! the game went, how it ended) for later analysis of engine strength.

use crate::game::board::GameOutcome;
use crate::game::piece::{Color, Square};
use crate::game::rules::GameRules;
use crate::players::{PlayedGame, Player};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of a single applied move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Ply number, counted from 0.
    pub ply: usize,
    /// Side that moved.
    pub mover: Color,
    pub from: Square,
    pub to: Square,
    /// Whether the move captured at least one piece.
    pub captured: bool,
}

/// Complete record of one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique match identifier.
    pub match_id: String,
    /// Unix timestamp of when the record was created.
    pub timestamp: i64,
    pub board_size: usize,
    /// Label of the white player (e.g. "minimax(depth=3)").
    pub white: String,
    /// Label of the black player.
    pub black: String,
    /// RNG seed the match series was started with.
    pub seed: u64,
    pub moves: Vec<MoveRecord>,
    pub outcome: GameOutcome,
}

impl MatchRecord {
    /// Builds a record from a finished game.
    pub fn from_game(
        rules: GameRules,
        white: &Player,
        black: &Player,
        seed: u64,
        played: &PlayedGame,
    ) -> Self {
        let moves = played
            .moves
            .iter()
            .enumerate()
            .map(|(ply, mv)| MoveRecord {
                ply,
                mover: mv.mover,
                from: mv.from,
                to: mv.to,
                captured: mv.captured,
            })
            .collect();
        MatchRecord {
            match_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp(),
            board_size: rules.size(),
            white: white.kind.to_string(),
            black: black.kind.to_string(),
            seed,
            moves,
            outcome: played.outcome,
        }
    }

    /// Number of plies played.
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// Serializes the record as a single JSON line.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
