// Position evaluation
// Returns a score where positive favours White (the maximizer), whoever is to move.

use crate::game_repr::{ChessRules, Color, GameStatus, Position};
use super::piece_square_tables::{mobility_weight, piece_value, pst_value};

/// Search and evaluation score. Unbounded; larger is better for the first player.
pub type Score = f64;

/// Score given to a checkmated position by [`MateAwareEvaluator`].
pub const MATE_SCORE: Score = 100_000.0;

/// Static evaluation of a position.
///
/// Must be pure and deterministic. Any `Fn(&P) -> Score` closure is an
/// evaluator, which is handy for tests and for games other than chess.
pub trait Evaluator<P> {
    fn evaluate(&self, pos: &P) -> Score;
}

impl<P, F> Evaluator<P> for F
where
    F: Fn(&P) -> Score,
{
    fn evaluate(&self, pos: &P) -> Score {
        self(pos)
    }
}

/// The three terms of the chess evaluation, each signed positive for White.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvalBreakdown {
    pub material: i32,
    pub positional: i32,
    pub mobility: f64,
}

impl EvalBreakdown {
    pub fn total(&self) -> Score {
        self.material as f64 + self.positional as f64 + self.mobility
    }
}

/// Material + piece-square tables + mobility.
///
/// Checkmate and stalemate get no special treatment: a mated side simply has
/// no mobility. Wrap in [`MateAwareEvaluator`] for a decisive mate score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChessEvaluator {
    rules: ChessRules,
}

impl ChessEvaluator {
    pub fn new() -> Self {
        Self {
            rules: ChessRules::new(),
        }
    }

    pub fn breakdown(&self, pos: &Position) -> EvalBreakdown {
        let mut eval = EvalBreakdown::default();
        let mobility = self.rules.mobility_by_square(pos);

        for square in *pos.board().combined() {
            let Some((piece, color)) = pos.piece_at(square) else {
                continue;
            };
            let sign = match color {
                Color::White => 1,
                Color::Black => -1,
            };

            eval.material += sign * piece_value(piece);
            eval.positional += sign * pst_value(piece, color, square);
            eval.mobility += sign as f64 * mobility[square.to_index()] as f64 * mobility_weight(piece);
        }

        eval
    }
}

impl Evaluator<Position> for ChessEvaluator {
    fn evaluate(&self, pos: &Position) -> Score {
        self.breakdown(pos).total()
    }
}

/// Scores checkmate as a loss of [`MATE_SCORE`] for the mated side and
/// delegates every other position to the wrapped evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct MateAwareEvaluator<E> {
    inner: E,
    rules: ChessRules,
}

impl<E> MateAwareEvaluator<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            rules: ChessRules::new(),
        }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Evaluator<Position>> Evaluator<Position> for MateAwareEvaluator<E> {
    fn evaluate(&self, pos: &Position) -> Score {
        if self.rules.status(pos) == GameStatus::Checkmate {
            return match pos.board().side_to_move() {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }
        self.inner.evaluate(pos)
    }
}
