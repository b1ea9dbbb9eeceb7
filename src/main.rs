use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;

use dameo::game::board::GameOutcome;
use dameo::game::piece::Color;
use dameo::game::rules::GameRules;
use dameo::logging::setup_logging;
use dameo::minimax::Evaluation;
use dameo::players::{play_game, Player, PlayerKind};
use dameo::recording::csv_writer::MatchCsvWriter;
use dameo::recording::match_record::MatchRecord;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PlayerKindCli {
    Random,
    Minimax,
    Mcts,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum EvaluationCli {
    /// Piece-count difference only
    Material,
    /// Material plus twice the king-count difference
    Kings2,
    /// Material plus five times the king-count difference
    Kings5,
}

impl From<EvaluationCli> for Evaluation {
    fn from(cli: EvaluationCli) -> Self {
        match cli {
            EvaluationCli::Material => Evaluation::Material,
            EvaluationCli::Kings2 => Evaluation::KingBonus2,
            EvaluationCli::Kings5 => Evaluation::KingBonus5,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dameo", about = "Dameo draughts engine: AI vs AI match runner")]
struct Config {
    /// Board size (4 to 8)
    #[arg(short = 's', long, default_value_t = 8)]
    board_size: usize,

    /// White player type
    #[arg(long, value_enum, default_value = "minimax")]
    white: PlayerKindCli,

    /// Black player type
    #[arg(long, value_enum, default_value = "mcts")]
    black: PlayerKindCli,

    /// Search depth for minimax players
    #[arg(short = 'd', long, default_value_t = 3)]
    depth: usize,

    /// Evaluation function for minimax players
    #[arg(long, value_enum, default_value = "material")]
    evaluation: EvaluationCli,

    /// Iterations per move for MCTS players
    #[arg(short = 'i', long, default_value_t = 400)]
    iterations: usize,

    /// Number of games to play
    #[arg(short = 'g', long, default_value_t = 1)]
    games: usize,

    /// RNG seed for reproducible matches
    #[arg(short = 'r', long, default_value_t = 2025)]
    seed: u64,

    /// CSV file to append per-game results to
    #[arg(long)]
    results_csv: Option<String>,

    /// Write one JSON record per game to stdout
    #[arg(long, default_value_t = false)]
    json_records: bool,

    /// Directory for rotating log files
    #[arg(long, default_value = "logs")]
    log_dir: String,
}

fn build_player(kind: PlayerKindCli, color: Color, config: &Config) -> Player {
    let kind = match kind {
        PlayerKindCli::Random => PlayerKind::Random,
        PlayerKindCli::Minimax => PlayerKind::Minimax {
            depth: config.depth,
            evaluation: config.evaluation.into(),
        },
        PlayerKindCli::Mcts => PlayerKind::Mcts {
            iterations: config.iterations,
        },
    };
    Player::new(kind, color)
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    setup_logging(&config.log_dir)?;

    let rules = GameRules::new(config.board_size)?;
    let white = build_player(config.white, Color::White, &config);
    let black = build_player(config.black, Color::Black, &config);
    log::info!(
        "playing {} game(s) on a {}x{} board: {} (white) vs {} (black), seed {}",
        config.games,
        config.board_size,
        config.board_size,
        white.kind,
        black.kind,
        config.seed,
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut writer = match &config.results_csv {
        Some(path) => Some(MatchCsvWriter::create(path)?),
        None => None,
    };

    let (mut white_wins, mut black_wins, mut ties) = (0usize, 0usize, 0usize);
    for game_index in 0..config.games {
        let played = play_game(rules, &white, &black, &mut rng);
        match played.outcome {
            GameOutcome::WhiteWins => white_wins += 1,
            GameOutcome::BlackWins => black_wins += 1,
            GameOutcome::Tie => ties += 1,
        }
        log::info!(
            "game {}/{}: {} after {} plies",
            game_index + 1,
            config.games,
            played.outcome,
            played.moves.len(),
        );

        let record = MatchRecord::from_game(rules, &white, &black, config.seed, &played);
        if let Some(writer) = writer.as_mut() {
            writer.append(&record)?;
        }
        if config.json_records {
            println!("{}", record.to_json()?);
        }
    }

    log::info!(
        "finished: white {} / black {} / ties {}",
        white_wins,
        black_wins,
        ties,
    );
    Ok(())
}
