//! Command-line front end: search a FEN position and print the result.
//!
//!   analyze "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3" --depth 4
//!   analyze --difficulty hard --rank

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use chess_search::ai::{ChessEvaluator, Difficulty, EvalBreakdown, Evaluator, MateAwareEvaluator, SearchEngine, SearchLimits};
use chess_search::game_repr::{ChessRules, Position, RulesOracle, STARTING_FEN};

#[derive(Parser, Debug)]
#[command(author, version, about = "Minimax analysis of a chess position", long_about = None)]
struct Args {
    /// Position to analyse, as FEN
    #[arg(default_value = STARTING_FEN)]
    fen: String,

    /// Search depth in plies (overrides the difficulty preset)
    #[arg(short, long)]
    depth: Option<i32>,

    /// Time budget in milliseconds (overrides the difficulty preset)
    #[arg(short, long)]
    time_ms: Option<i64>,

    /// Preset depth and budget: easy, medium, hard or expert
    #[arg(long, default_value_t = Difficulty::default())]
    difficulty: Difficulty,

    /// Score and list every legal move instead of only the best one
    #[arg(short, long)]
    rank: bool,

    /// Score checkmate decisively instead of by material and mobility alone
    #[arg(long)]
    mate_aware: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );
    builder
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .target(env_logger::Target::Stderr)
        .init();

    let pos = Position::from_fen(&args.fen).context("could not parse position")?;
    let preset = args.difficulty.limits();
    let limits = SearchLimits::new(
        args.depth.unwrap_or(preset.depth() as i32),
        args.time_ms.unwrap_or(preset.time_budget().as_millis() as i64),
    )?;

    log::info!(
        "analysing {} at depth {} within {} ms",
        pos,
        limits.depth(),
        limits.time_budget().as_millis()
    );
    print_breakdown(&ChessEvaluator::new().breakdown(&pos));

    if args.mate_aware {
        run(SearchEngine::new(ChessRules::new(), MateAwareEvaluator::new(ChessEvaluator::new())), &pos, &limits, args.rank)
    } else {
        run(SearchEngine::new(ChessRules::new(), ChessEvaluator::new()), &pos, &limits, args.rank)
    }
}

fn run<E>(engine: SearchEngine<ChessRules, E>, pos: &Position, limits: &SearchLimits, rank: bool) -> Result<()>
where
    E: Evaluator<Position>,
{
    if rank {
        let ranked = engine.rank_moves_with_progress_within(pos, limits, |p| {
            log::debug!("[{}/{}] {} {:.1}", p.index + 1, p.total, p.entry.mv, p.entry.score);
        })?;
        if ranked.is_empty() {
            println!("no legal moves ({:?})", engine.oracle().status(pos));
        }
        for (i, entry) in ranked.iter().enumerate() {
            println!("{:>3}. {:<6} {:>10.1}", i + 1, entry.mv, entry.score);
        }
        return Ok(());
    }

    let result = engine.find_best_move_within(pos, limits)?;
    match &result.best_move {
        Some(mv) => println!("bestmove {}", mv),
        None if engine.oracle().is_terminal(pos) => println!("bestmove none ({:?})", engine.oracle().status(pos)),
        None => println!("bestmove none"),
    }
    println!(
        "score {:.1} depth {} nodes {} time {}ms{}",
        result.score,
        result.depth,
        result.nodes_searched,
        result.time_ms,
        if result.timed_out { " (timed out)" } else { "" }
    );
    Ok(())
}

fn print_breakdown(eval: &EvalBreakdown) {
    println!(
        "static material {} positional {} mobility {:.1} total {:.1}",
        eval.material,
        eval.positional,
        eval.mobility,
        eval.total()
    );
}
