//! # Dameo Game Library
//!
//! A library implementation of Dameo draughts with AI opponents.
//!
//! ## Features
//!
//! - **Game Engine**: board model, mandatory-capture move generation and
//!   long-range king captures on configurable 4x4 to 8x8 boards
//! - **Minimax Engine**: depth-limited alpha-beta search with pluggable
//!   evaluation heuristics
//! - **MCTS Engine**: Monte Carlo Tree Search over board snapshots
//! - **Players**: random, minimax and MCTS move selection plus a full game
//!   driver
//! - **Recording**: per-match records with JSON and CSV export
//!
//! ## Usage
//!
//! ```rust
//! use dameo::game::board::Board;
//! use dameo::game::piece::Color;
//! use dameo::game::rules::GameRules;
//! use dameo::mcts::search::MctsEngine;
//!
//! let rules = GameRules::new(8).unwrap();
//! let board = Board::with_initial_pieces(rules);
//! let engine = MctsEngine::new(100);
//! # let _ = (board, engine);
//! ```

/// Core game logic and rules
pub mod game;

/// Monte Carlo Tree Search AI engine
pub mod mcts;

/// Alpha-beta Minimax AI engine
pub mod minimax;

/// Player orchestration and the game driver loop
pub mod players;

/// Match recording and export
pub mod recording;

/// Logger setup
pub mod logging;

/// Main error type for the Dameo library
#[derive(Debug, thiserror::Error)]
pub enum DameoError {
    #[error("rules error: {0}")]
    Rules(String),

    #[error("game error: {0}")]
    Game(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("recording error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DameoError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
