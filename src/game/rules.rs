//! Immutable game configuration: board size, starting layout and draw limit.
//!
//! Every board and every legality query takes its parameters from a
//! [`GameRules`] value instead of process-wide constants, so differently
//! sized games can coexist in one process (the AI arena relies on this).

use crate::game::piece::Color;
use crate::DameoError;
use serde::{Deserialize, Serialize};

/// Smallest playable board.
pub const MIN_BOARD_SIZE: usize = 4;
/// Largest playable board.
pub const MAX_BOARD_SIZE: usize = 8;

/// Construction-time rule set for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    size: usize,
}

impl GameRules {
    /// Validates the board size (4..=8 inclusive).
    pub fn new(size: usize) -> crate::Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(DameoError::Rules(format!(
                "board size must be between {} and {} (received {})",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, size
            )));
        }
        Ok(GameRules { size })
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Quiet-move count at which the game is drawn.
    pub fn draw_limit(&self) -> usize {
        self.size * 7
    }

    /// Row a piece of `color` promotes on.
    pub fn promotion_row(&self, color: Color) -> usize {
        match color {
            Color::White => 0,
            Color::Black => self.size - 1,
        }
    }

    /// Whether `(row, col)` holds a piece of `color` in the starting position.
    ///
    /// Boards of size 6 and up seat each side in three rows with a wedge of
    /// three squares cut from each corner; sizes 4 and 5 use two rows with
    /// only the inner-row corners cut.
    pub fn is_initial_square(&self, color: Color, row: usize, col: usize) -> bool {
        let size = self.size;
        // Mirror black's pattern onto white's side of the board.
        let home_row = match color {
            Color::Black => row,
            Color::White => size - 1 - row,
        };
        if size >= 6 {
            match home_row {
                0 => true,
                1 => col != 0 && col != size - 1,
                2 => col > 1 && col < size - 2,
                _ => false,
            }
        } else {
            match home_row {
                0 => true,
                1 => col != 0 && col != size - 1,
                _ => false,
            }
        }
    }

    /// Number of pieces each side starts with.
    pub fn initial_pieces_per_side(&self) -> usize {
        if self.size >= 6 {
            3 * self.size - 6
        } else {
            2 * self.size - 2
        }
    }
}
