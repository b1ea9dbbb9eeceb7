//! Board state container: grid, piece lists, turn, capture chain and
//! terminal detection.
//!
//! The aggregate is a flat cell array plus one flat square list per side,
//! kept mutually consistent at all times; `Clone` is therefore a plain value
//! copy, which is what keeps every search branch isolated from its siblings.

use crate::game::moves::{capture_destinations, slide_destinations};
use crate::game::piece::{Color, Piece, Square};
use crate::game::rules::GameRules;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Tie,
}

impl GameOutcome {
    /// The winning side, if the game was not drawn.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::WhiteWins => Some(Color::White),
            GameOutcome::BlackWins => Some(Color::Black),
            GameOutcome::Tie => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::WhiteWins => write!(f, "white wins"),
            GameOutcome::BlackWins => write!(f, "black wins"),
            GameOutcome::Tie => write!(f, "tie"),
        }
    }
}

/// A move that has been applied to a board, with its recorded inverse origin.
///
/// Re-applying `to -> from` restores the moved piece's position but not any
/// captured pieces; search code that needs full restoration clones the board
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    pub captured: bool,
}

/// Mutable game state for one Dameo game.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rules: GameRules,
    cells: Vec<Option<Piece>>,
    white: Vec<Square>,
    black: Vec<Square>,
    /// Side to move.
    pub turn: Color,
    /// Set by [`Board::check_winner`]; read by the MCTS selection loop.
    pub is_terminal: bool,
    /// Quiet-move counter for the draw rule.
    pub moves_without_capture: usize,
    last_move: Option<AppliedMove>,
    chain: Option<Square>,
}

impl Board {
    /// An empty board; use [`Board::initialize_pieces`] or
    /// [`Board::place_piece`] to populate it.
    pub fn new(rules: GameRules) -> Self {
        let size = rules.size();
        Board {
            rules,
            cells: vec![None; size * size],
            white: Vec::new(),
            black: Vec::new(),
            turn: Color::White,
            is_terminal: false,
            moves_without_capture: 0,
            last_move: None,
            chain: None,
        }
    }

    /// A board set up in the starting position, white to move.
    pub fn with_initial_pieces(rules: GameRules) -> Self {
        let mut board = Board::new(rules);
        board.initialize_pieces();
        board
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn size(&self) -> usize {
        self.rules.size()
    }

    fn index(&self, square: Square) -> usize {
        square.row * self.size() + square.col
    }

    /// The piece occupying `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[self.index(square)]
    }

    /// Resets the board to the starting position for its rules.
    pub fn initialize_pieces(&mut self) {
        self.cells.fill(None);
        self.white.clear();
        self.black.clear();
        self.is_terminal = false;
        self.moves_without_capture = 0;
        self.last_move = None;
        self.chain = None;
        let size = self.size();
        for row in 0..size {
            for col in 0..size {
                for color in [Color::White, Color::Black] {
                    if self.rules.is_initial_square(color, row, col) {
                        self.place_piece(Piece::new(Square::new(row, col), color));
                    }
                }
            }
        }
    }

    /// Puts `piece` on its square. Panics when the square is taken; stacking
    /// pieces would silently break the grid/list consistency invariant.
    pub fn place_piece(&mut self, piece: Piece) {
        let index = self.index(piece.square);
        assert!(
            self.cells[index].is_none(),
            "place_piece: square {} is already occupied",
            piece.square
        );
        self.cells[index] = Some(piece);
        self.side_squares_mut(piece.color).push(piece.square);
    }

    fn side_squares_mut(&mut self, color: Color) -> &mut Vec<Square> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Squares occupied by `color`, in piece order.
    pub fn squares(&self, color: Color) -> &[Square] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Occupied squares per side: `(white, black)`.
    pub fn occupied(&self) -> (&[Square], &[Square]) {
        (&self.white, &self.black)
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.squares(color).len()
    }

    pub fn king_count(&self, color: Color) -> usize {
        self.squares(color)
            .iter()
            .filter(|&&square| {
                self.piece_at(square)
                    .expect("piece list out of sync with the grid")
                    .king
            })
            .count()
    }

    /// Removes the piece on `square` from the grid and its side list.
    pub fn remove_piece(&mut self, square: Square) {
        let index = self.index(square);
        let piece = match self.cells[index].take() {
            Some(piece) => piece,
            None => panic!("remove_piece: no piece at {}", square),
        };
        let squares = self.side_squares_mut(piece.color);
        let position = squares
            .iter()
            .position(|&taken| taken == square)
            .expect("piece list out of sync with the grid");
        squares.remove(position);
    }

    /// Relocates the piece on `from` to the empty square `to`.
    ///
    /// An orthogonal displacement of more than one square sweeps every enemy
    /// piece strictly between the endpoints off the board; the capture is a
    /// side effect of the move itself, exactly as the legality queries
    /// assume. Bumps the quiet-move counter, resetting it on a capture, and
    /// records the move. Calling this for an empty `from` or an occupied
    /// `to` is a contract violation and panics.
    pub fn apply_move(&mut self, from: Square, to: Square) -> AppliedMove {
        let piece = match self.piece_at(from) {
            Some(piece) => piece,
            None => panic!("apply_move: no piece at {}", from),
        };
        assert!(
            self.piece_at(to).is_none(),
            "apply_move: destination {} is occupied",
            to
        );

        let mut captured = false;
        let straight = (from.row == to.row) != (from.col == to.col);
        let distance = from.row.abs_diff(to.row).max(from.col.abs_diff(to.col));
        if straight && distance > 1 {
            let dr = (to.row as isize - from.row as isize).signum();
            let dc = (to.col as isize - from.col as isize).signum();
            for step in 1..distance as isize {
                let between = Square::new(
                    (from.row as isize + dr * step) as usize,
                    (from.col as isize + dc * step) as usize,
                );
                if let Some(other) = self.piece_at(between) {
                    if other.color != piece.color {
                        self.remove_piece(between);
                        captured = true;
                    }
                }
            }
        }

        let from_index = self.index(from);
        self.cells[from_index] = None;
        let to_index = self.index(to);
        self.cells[to_index] = Some(Piece { square: to, ..piece });
        let squares = self.side_squares_mut(piece.color);
        let position = squares
            .iter()
            .position(|&taken| taken == from)
            .expect("piece list out of sync with the grid");
        squares[position] = to;

        self.moves_without_capture += 1;
        if captured {
            self.moves_without_capture = 0;
        }
        let applied = AppliedMove { from, to, captured };
        self.last_move = Some(applied);
        applied
    }

    /// Promotes the piece on `square` when it stands on its promotion row.
    /// Idempotent; does nothing for kings or empty squares.
    pub fn promote_if_eligible(&mut self, square: Square) {
        let index = self.index(square);
        if let Some(piece) = self.cells[index] {
            if !piece.king && square.row == self.rules.promotion_row(piece.color) {
                self.cells[index] = Some(Piece { king: true, ..piece });
            }
        }
    }

    /// Squares of `color` pieces that have at least one capture.
    ///
    /// While a multi-capture is in progress the chain piece is the only one
    /// allowed to move, so the list narrows to it.
    pub fn pieces_with_captures(&self, color: Color) -> Vec<Square> {
        if let Some(chain) = self.chain {
            if let Some(piece) = self.piece_at(chain) {
                if piece.color == color {
                    return vec![chain];
                }
            }
        }
        self.squares(color)
            .iter()
            .copied()
            .filter(|&square| {
                let piece = self
                    .piece_at(square)
                    .expect("piece list out of sync with the grid");
                !capture_destinations(piece, self).is_empty()
            })
            .collect()
    }

    /// All (piece, destinations) pairs `color` may play this turn.
    ///
    /// Captures are mandatory: when any piece can capture, only capturing
    /// pieces and their landing squares are returned. Otherwise every piece
    /// with at least one quiet destination is listed.
    pub fn find_available_moves(&self, color: Color) -> Vec<(Square, Vec<Square>)> {
        let capturers = self.pieces_with_captures(color);
        if !capturers.is_empty() {
            return capturers
                .into_iter()
                .map(|square| {
                    let piece = self
                        .piece_at(square)
                        .expect("piece list out of sync with the grid");
                    (square, capture_destinations(piece, self))
                })
                .collect();
        }
        self.squares(color)
            .iter()
            .filter_map(|&square| {
                let piece = self
                    .piece_at(square)
                    .expect("piece list out of sync with the grid");
                let destinations = slide_destinations(piece, self);
                if destinations.is_empty() {
                    None
                } else {
                    Some((square, destinations))
                }
            })
            .collect()
    }

    /// Number of distinct legal (piece, destination) pairs for the side to
    /// move; the MCTS expansion bookkeeping compares child counts to this.
    pub fn count_possible_moves(&self) -> usize {
        self.find_available_moves(self.turn)
            .iter()
            .map(|(_, destinations)| destinations.len())
            .sum()
    }

    /// Whether selecting the piece on `square` respects the mandatory
    /// capture rule for the side to move (input-boundary helper).
    pub fn can_select(&self, square: Square) -> bool {
        let capturers = self.pieces_with_captures(self.turn);
        capturers.is_empty() || capturers.contains(&square)
    }

    /// Recomputes the game result and the terminal flag.
    ///
    /// A side with no pieces, or with no legal moves on its own turn, loses;
    /// the quiet-move limit draws the game.
    pub fn check_winner(&mut self) -> Option<GameOutcome> {
        self.is_terminal = false;
        let white_can_move = !self.find_available_moves(Color::White).is_empty();
        let black_can_move = !self.find_available_moves(Color::Black).is_empty();

        let outcome = if self.black.is_empty() || (!black_can_move && self.turn == Color::Black) {
            Some(GameOutcome::WhiteWins)
        } else if self.white.is_empty() || (!white_can_move && self.turn == Color::White) {
            Some(GameOutcome::BlackWins)
        } else if self.moves_without_capture >= self.rules.draw_limit() {
            Some(GameOutcome::Tie)
        } else {
            None
        };
        if outcome.is_some() {
            self.is_terminal = true;
        }
        outcome
    }

    /// Applies a move for the side to move and resolves what follows it:
    /// either the same piece must keep capturing (the turn does not pass and
    /// no promotion happens), or the piece is promoted when eligible and the
    /// turn flips.
    ///
    /// The game loop, MCTS expansion and MCTS rollouts all go through here
    /// so that the continuation rule cannot drift between them.
    pub fn play(&mut self, from: Square, to: Square) -> AppliedMove {
        let piece = match self.piece_at(from) {
            Some(piece) => piece,
            None => panic!("play: no piece at {}", from),
        };
        assert_eq!(
            piece.color, self.turn,
            "play: piece at {} does not belong to the side to move",
            from
        );
        let applied = self.apply_move(from, to);
        let moved = self
            .piece_at(to)
            .expect("piece vanished after apply_move");
        if applied.captured && !capture_destinations(moved, self).is_empty() {
            self.chain = Some(to);
        } else {
            self.chain = None;
            self.promote_if_eligible(to);
            self.turn = self.turn.opponent();
        }
        applied
    }

    /// The most recently applied move.
    pub fn last_move(&self) -> Option<AppliedMove> {
        self.last_move
    }

    /// The square of a piece in the middle of a capture chain, if any.
    pub fn capture_chain(&self) -> Option<Square> {
        self.chain
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", if self.turn == Color::White { "O" } else { "X" })?;
        for row in 0..self.size() {
            for col in 0..self.size() {
                let glyph = match self.piece_at(Square::new(row, col)) {
                    None => '-',
                    Some(piece) => match (piece.color, piece.king) {
                        (Color::White, false) => 'o',
                        (Color::White, true) => 'O',
                        (Color::Black, false) => 'x',
                        (Color::Black, true) => 'X',
                    },
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
