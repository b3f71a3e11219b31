// AI - Minimax with Alpha-Beta Pruning
//
// A depth- and time-bounded game-tree search that works over any rules oracle
// and any evaluator, plus the chess evaluator it is normally paired with.
//
// Key features:
// - Deterministic (same position, depth and evaluator always give the same move)
// - Stateless engine, safe to share across threads
// - Wall-clock deadline and optional cancel flag, checked at node entry
// - Best-move search and full root-move ranking with a progress callback

mod evaluation;
mod limits;
mod minimax;
mod piece_square_tables;
mod search;

#[cfg(test)]
mod tests;

pub use evaluation::{ChessEvaluator, EvalBreakdown, Evaluator, MateAwareEvaluator, Score, MATE_SCORE};
pub use limits::{Difficulty, SearchLimits, DEFAULT_TIME_BUDGET_MS};
pub use search::{RankProgress, RankedMove, SearchEngine, SearchResult};

pub mod tables {
    //! Material values, mobility weights and piece-square tables.
    pub use super::piece_square_tables::*;
}
