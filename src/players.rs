//! Player orchestration: wraps the three engines behind one move-choosing
//! interface and drives complete games.

use crate::game::board::{Board, GameOutcome};
use crate::game::moves::{random_move, ChosenMove};
use crate::game::piece::{Color, Square};
use crate::game::rules::GameRules;
use crate::mcts::search::MctsEngine;
use crate::minimax::{Evaluation, Minimax};
use rand::rngs::StdRng;
use std::fmt;

/// How a player picks its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Uniformly random among all legal (piece, destination) pairs.
    Random,
    /// Alpha-beta minimax at a fixed depth.
    Minimax { depth: usize, evaluation: Evaluation },
    /// Monte Carlo Tree Search with a fixed iteration budget.
    Mcts { iterations: usize },
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Random => write!(f, "random"),
            PlayerKind::Minimax { depth, .. } => write!(f, "minimax(depth={})", depth),
            PlayerKind::Mcts { iterations } => write!(f, "mcts(iterations={})", iterations),
        }
    }
}

/// One side of a game.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub kind: PlayerKind,
    pub color: Color,
}

impl Player {
    pub fn new(kind: PlayerKind, color: Color) -> Self {
        Player { kind, color }
    }

    /// Asks the configured engine for a move. `None` means the side has no
    /// legal move, which the driver treats as a loss rather than an error.
    pub fn choose_move(&self, board: &Board, rng: &mut StdRng) -> Option<ChosenMove> {
        match self.kind {
            PlayerKind::Random => {
                let moves = board.find_available_moves(self.color);
                random_move(&moves, rng)
            }
            PlayerKind::Minimax { depth, evaluation } => {
                Minimax::new(depth).execute(board, self.color, evaluation)
            }
            PlayerKind::Mcts { iterations } => {
                MctsEngine::new(iterations).search(board, self.color, rng)
            }
        }
    }
}

/// One applied move of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub mover: Color,
    pub from: Square,
    pub to: Square,
    pub captured: bool,
}

/// A finished game: its result, the move list and the final position.
#[derive(Debug, Clone)]
pub struct PlayedGame {
    pub outcome: GameOutcome,
    pub moves: Vec<PlayedMove>,
    pub board: Board,
}

/// Plays one full game between `white` and `black` from the starting
/// position.
///
/// The loop asks the board for a winner, lets the side to move choose, and
/// applies the choice through [`Board::play`], so capture chains keep the
/// turn with the capturing side and promotion happens when a turn ends. A
/// player reporting no legal move loses on the spot.
pub fn play_game(rules: GameRules, white: &Player, black: &Player, rng: &mut StdRng) -> PlayedGame {
    debug_assert_eq!(white.color, Color::White);
    debug_assert_eq!(black.color, Color::Black);

    let mut board = Board::with_initial_pieces(rules);
    let mut moves = Vec::new();
    let outcome = loop {
        if let Some(outcome) = board.check_winner() {
            break outcome;
        }
        let mover = board.turn;
        let player = if mover == Color::White { white } else { black };
        let chosen = match player.choose_move(&board, rng) {
            Some(chosen) => chosen,
            None => {
                log::warn!("{} found no legal move outside terminal detection", mover);
                break match mover {
                    Color::White => GameOutcome::BlackWins,
                    Color::Black => GameOutcome::WhiteWins,
                };
            }
        };
        let applied = board.play(chosen.from, chosen.to);
        log::debug!(
            "{} plays {} -> {}{}",
            mover,
            applied.from,
            applied.to,
            if applied.captured { " (capture)" } else { "" }
        );
        moves.push(PlayedMove {
            mover,
            from: applied.from,
            to: applied.to,
            captured: applied.captured,
        });
    };
    log::debug!("final position:\n{}", board);
    PlayedGame {
        outcome,
        moves,
        board,
    }
}
