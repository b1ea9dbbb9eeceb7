//! AI Arena - AI vs AI matches for engine comparison.
//!
//! Runs a seeded series of games between two configured players, alternating
//! colors every game so neither engine benefits from always moving first,
//! and appends one result row per game to a CSV file.

use clap::Parser;
use csv::Writer;
use flexi_logger::Logger;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs::File;

use dameo::game::board::GameOutcome;
use dameo::game::piece::Color;
use dameo::game::rules::GameRules;
use dameo::minimax::Evaluation;
use dameo::players::{play_game, Player, PlayerKind};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum EngineCli {
    Random,
    Minimax,
    Mcts,
}

#[derive(Parser, Debug)]
#[command(
    name = "ai-arena",
    about = "Run AI vs AI matches for comparison between two engines"
)]
struct Args {
    /// First engine
    #[arg(long, value_enum, default_value = "minimax")]
    engine_a: EngineCli,

    /// Second engine
    #[arg(long, value_enum, default_value = "mcts")]
    engine_b: EngineCli,

    /// Board size (4 to 8)
    #[arg(short = 's', long, default_value_t = 8)]
    board_size: usize,

    /// Number of games to play
    #[arg(short = 'g', long, default_value_t = 100)]
    games: usize,

    /// Search depth for minimax engines
    #[arg(short = 'd', long, default_value_t = 3)]
    depth: usize,

    /// Iterations per move for MCTS engines
    #[arg(short = 'i', long, default_value_t = 400)]
    iterations: usize,

    /// RNG seed for reproducible results
    #[arg(short = 'r', long, default_value_t = 42)]
    seed: u64,

    /// Output CSV file for per-game results
    #[arg(short, long, default_value = "data/arena_results.csv")]
    output: String,
}

fn engine_kind(engine: EngineCli, args: &Args) -> PlayerKind {
    match engine {
        EngineCli::Random => PlayerKind::Random,
        EngineCli::Minimax => PlayerKind::Minimax {
            depth: args.depth,
            evaluation: Evaluation::KingBonus2,
        },
        EngineCli::Mcts => PlayerKind::Mcts {
            iterations: args.iterations,
        },
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let rules = GameRules::new(args.board_size)?;
    let kind_a = engine_kind(args.engine_a, &args);
    let kind_b = engine_kind(args.engine_b, &args);
    log::info!(
        "arena: {} vs {} over {} games on a {}x{} board, seed {}",
        kind_a,
        kind_b,
        args.games,
        args.board_size,
        args.board_size,
        args.seed
    );

    if let Some(parent) = std::path::Path::new(&args.output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut writer: Writer<File> = Writer::from_path(&args.output)?;
    writer.write_record(["game", "white", "black", "outcome", "plies"])?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let (mut a_wins, mut b_wins, mut ties) = (0usize, 0usize, 0usize);

    for game_index in 0..args.games {
        // Alternate colors so neither engine always has the first move.
        let a_is_white = game_index % 2 == 0;
        let (white_kind, black_kind) = if a_is_white {
            (kind_a, kind_b)
        } else {
            (kind_b, kind_a)
        };
        let white = Player::new(white_kind, Color::White);
        let black = Player::new(black_kind, Color::Black);

        let played = play_game(rules, &white, &black, &mut rng);
        match (played.outcome, a_is_white) {
            (GameOutcome::Tie, _) => ties += 1,
            (GameOutcome::WhiteWins, true) | (GameOutcome::BlackWins, false) => a_wins += 1,
            _ => b_wins += 1,
        }

        writer.write_record([
            game_index.to_string(),
            white.kind.to_string(),
            black.kind.to_string(),
            played.outcome.to_string(),
            played.moves.len().to_string(),
        ])?;
        log::info!(
            "game {}/{}: {} ({} plies)",
            game_index + 1,
            args.games,
            played.outcome,
            played.moves.len()
        );
    }
    writer.flush()?;

    log::info!(
        "arena finished: {} won {} games, {} won {}, {} ties (results in {})",
        kind_a,
        a_wins,
        kind_b,
        b_wins,
        ties,
        args.output
    );
    Ok(())
}
