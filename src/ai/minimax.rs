// Minimax Search with Alpha-Beta Pruning
//
// Explicit maximize/minimize form rather than negamax: scores are always from
// the first player's point of view, so a child's score is compared directly
// against the parent's best without negation.
//
// Each call owns its local alpha/beta copies and works on positions produced by
// the rules oracle; nothing is shared between sibling subtrees except the
// per-call context (node counter and deadline).
//
// Moves are visited in the order the oracle returns them. There is no move
// ordering, no transposition table and no quiescence search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use log::error;

use super::evaluation::{Evaluator, Score};
use crate::error::SearchError;
use crate::game_repr::RulesOracle;

/// Score and best move of one searched node.
#[derive(Debug, Clone)]
pub(crate) struct Node<M> {
    pub score: Score,
    pub best_move: Option<M>,
}

impl<M> Node<M> {
    fn leaf(score: Score) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// State that lives for exactly one entry-point call.
pub(crate) struct SearchContext<'a> {
    /// None when the budget is too large to represent as an instant
    deadline: Option<Instant>,
    cancel: Option<&'a AtomicBool>,
    pub nodes: u64,
    pub timed_out: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(deadline: Option<Instant>, cancel: Option<&'a AtomicBool>) -> Self {
        Self {
            deadline,
            cancel,
            nodes: 0,
            timed_out: false,
        }
    }

    /// Checked once per node entry, never between siblings.
    fn out_of_time(&mut self) -> bool {
        let expired = self.deadline.is_some_and(|d| Instant::now() >= d);
        let cancelled = self.cancel.is_some_and(|c| c.load(Ordering::Relaxed));
        if expired || cancelled {
            self.timed_out = true;
        }
        expired || cancelled
    }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Stops (and returns the static evaluation) when depth is exhausted, the
/// position is terminal, or time has run out, checked in that order. A
/// position with no legal moves is also scored statically.
///
/// An oracle refusing one of its own legal moves is a contract breach and
/// aborts the whole search with [`SearchError::Oracle`].
#[allow(clippy::too_many_arguments)]
pub(crate) fn minimax<O, E>(
    oracle: &O,
    evaluator: &E,
    pos: &O::Position,
    depth: u32,
    alpha: Score,
    beta: Score,
    maximize: bool,
    ctx: &mut SearchContext<'_>,
) -> Result<Node<O::Move>, SearchError>
where
    O: RulesOracle,
    E: Evaluator<O::Position>,
{
    ctx.nodes += 1;

    if depth == 0 || oracle.is_terminal(pos) || ctx.out_of_time() {
        return Ok(Node::leaf(evaluator.evaluate(pos)));
    }

    let moves = oracle.legal_moves(pos);
    if moves.is_empty() {
        return Ok(Node::leaf(evaluator.evaluate(pos)));
    }

    let mut best = if maximize {
        Score::NEG_INFINITY
    } else {
        Score::INFINITY
    };
    let mut best_move = None;
    let mut alpha = alpha;
    let mut beta = beta;

    for mv in moves {
        let child = oracle.apply(pos, &mv).map_err(|e| {
            error!("rules oracle rejected its own legal move: {}", e);
            e
        })?;

        let node = minimax(oracle, evaluator, &child, depth - 1, alpha, beta, !maximize, ctx)?;

        if (maximize && node.score > best) || (!maximize && node.score < best) {
            best = node.score;
            best_move = Some(mv);
        }

        if maximize {
            alpha = alpha.max(best);
            if alpha >= beta {
                break; // Beta cutoff
            }
        } else {
            beta = beta.min(best);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
    }

    Ok(Node {
        score: best,
        best_move,
    })
}
