//! Bounded minimax search with alpha-beta pruning.
//!
//! The search core in [`ai`] is generic over a [`game_repr::RulesOracle`] and
//! an [`ai::Evaluator`]. [`game_repr`] provides the chess instantiation of both
//! on top of the `chess` crate.

pub mod ai;
pub mod error;
pub mod game_repr;

pub use ai::{ChessEvaluator, Difficulty, RankedMove, SearchEngine, SearchLimits, SearchResult};
pub use error::{IllegalMoveError, PositionError, SearchError};
pub use game_repr::{ChessRules, Move, Position, RulesOracle, Side};

/// Search engine over standard chess with the default evaluator.
pub type ChessEngine = SearchEngine<ChessRules, ChessEvaluator>;

impl ChessEngine {
    pub fn chess() -> Self {
        SearchEngine::new(ChessRules::new(), ChessEvaluator::new())
    }
}
