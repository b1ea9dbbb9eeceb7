use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides of a Dameo game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side.
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta a man of this color advances with (white moves towards row 0).
    pub fn forward(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// A 0-indexed board coordinate, `row` counted from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Self {
        Square { row, col }
    }

    /// The square `(dr, dc)` away, or `None` when it falls off a `size`-wide board.
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Square> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            None
        } else {
            Some(Square::new(row as usize, col as usize))
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A checker on the board. Identity is the occupied square; the board grid is
/// the single source of truth for where a piece sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub square: Square,
    pub color: Color,
    pub king: bool,
}

impl Piece {
    pub fn new(square: Square, color: Color) -> Self {
        Piece {
            square,
            color,
            king: false,
        }
    }

    pub fn king(square: Square, color: Color) -> Self {
        Piece {
            square,
            color,
            king: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent().opponent(), Color::Black);
    }

    #[test]
    fn test_offset_inside_board() {
        let sq = Square::new(3, 3);
        assert_eq!(sq.offset(-1, 1, 8), Some(Square::new(2, 4)));
        assert_eq!(sq.offset(4, 0, 8), Some(Square::new(7, 3)));
    }

    #[test]
    fn test_offset_off_board() {
        let sq = Square::new(0, 7);
        assert_eq!(sq.offset(-1, 0, 8), None);
        assert_eq!(sq.offset(0, 1, 8), None);
        assert_eq!(Square::new(7, 0).offset(1, 0, 8), None);
        assert_eq!(Square::new(7, 0).offset(0, -1, 8), None);
    }

    #[test]
    fn test_forward_direction() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
    }
}
