// Search entry points
//
// `SearchEngine` pairs a rules oracle with an evaluator and exposes the two
// ways of asking for a move: the single best move (one alpha-beta tree from
// the root) and a full ranking of every root move (one independent
// full-window search per root move).
//
// The engine holds no state between calls. Every call builds its own deadline
// and node counter, so one engine can be shared across threads and called
// concurrently on independent positions.

use std::cmp::Ordering;
use std::time::Instant;

use log::{debug, error, trace, warn};

use super::evaluation::{Evaluator, Score};
use super::limits::SearchLimits;
use super::minimax::{minimax, SearchContext};
use crate::error::SearchError;
use crate::game_repr::RulesOracle;

/// Result of a best-move search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// Minimax value of the root, positive favours the first player
    pub score: Score,
    /// None only when the root was scored statically (terminal, no legal
    /// moves, or cut off by the deadline before any move was tried)
    pub best_move: Option<M>,
    /// Requested depth in plies
    pub depth: u32,
    pub nodes_searched: u64,
    pub time_ms: u64,
    /// The deadline (or cancel flag) fired somewhere in the tree
    pub timed_out: bool,
}

/// One root move and the minimax value of the position it leads to.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMove<M> {
    pub mv: M,
    pub score: Score,
}

/// Reported to the progress callback after each root move is scored.
#[derive(Debug)]
pub struct RankProgress<'a, M> {
    /// Zero-based position of the move in oracle order
    pub index: usize,
    pub total: usize,
    pub entry: &'a RankedMove<M>,
}

/// Depth- and time-bounded minimax search over any [`RulesOracle`].
#[derive(Debug, Clone, Default)]
pub struct SearchEngine<O, E> {
    oracle: O,
    evaluator: E,
}

impl<O, E> SearchEngine<O, E>
where
    O: RulesOracle,
    E: Evaluator<O::Position>,
{
    pub fn new(oracle: O, evaluator: E) -> Self {
        Self { oracle, evaluator }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Static evaluation of `pos`, without searching.
    pub fn evaluate(&self, pos: &O::Position) -> Score {
        self.evaluator.evaluate(pos)
    }

    /// Find the best move for the side to move.
    ///
    /// # Arguments
    /// * `pos` - Root position, never modified
    /// * `depth` - Search depth in plies, at least 1
    /// * `time_budget_ms` - Wall-clock budget in milliseconds, at least 0
    ///
    /// Running out of time is not an error: the result is still usable, just
    /// shallower than requested, and has `timed_out` set.
    pub fn find_best_move(
        &self,
        pos: &O::Position,
        depth: i32,
        time_budget_ms: i64,
    ) -> Result<SearchResult<O::Move>, SearchError> {
        let limits = SearchLimits::new(depth, time_budget_ms)?;
        self.find_best_move_within(pos, &limits)
    }

    pub fn find_best_move_within(
        &self,
        pos: &O::Position,
        limits: &SearchLimits,
    ) -> Result<SearchResult<O::Move>, SearchError> {
        let start = Instant::now();
        let mut ctx = SearchContext::new(start.checked_add(limits.time_budget()), limits.cancel_flag());
        let maximize = self.oracle.side_to_move(pos).is_maximizer();

        let node = minimax(
            &self.oracle,
            &self.evaluator,
            pos,
            limits.depth(),
            Score::NEG_INFINITY,
            Score::INFINITY,
            maximize,
            &mut ctx,
        )?;

        let result = SearchResult {
            score: node.score,
            best_move: node.best_move,
            depth: limits.depth(),
            nodes_searched: ctx.nodes,
            time_ms: start.elapsed().as_millis() as u64,
            timed_out: ctx.timed_out,
        };

        if result.timed_out {
            warn!(
                "search truncated after {} ms at depth {} ({} nodes)",
                result.time_ms, result.depth, result.nodes_searched
            );
        }
        debug!(
            "depth {} score {:.1} best {} nodes {} time {}ms",
            result.depth,
            result.score,
            result
                .best_move
                .as_ref()
                .map_or_else(|| "none".to_string(), |m| m.to_string()),
            result.nodes_searched,
            result.time_ms
        );

        Ok(result)
    }

    /// Score every legal root move and return them best-first for the side
    /// to move.
    ///
    /// Each root move gets its own full-window search, so every entry carries
    /// a real score rather than a bound. Ties keep the oracle's move order.
    pub fn rank_moves(
        &self,
        pos: &O::Position,
        depth: i32,
        time_budget_ms: i64,
    ) -> Result<Vec<RankedMove<O::Move>>, SearchError> {
        let limits = SearchLimits::new(depth, time_budget_ms)?;
        self.rank_moves_within(pos, &limits)
    }

    pub fn rank_moves_within(
        &self,
        pos: &O::Position,
        limits: &SearchLimits,
    ) -> Result<Vec<RankedMove<O::Move>>, SearchError> {
        self.rank_moves_with_progress_within(pos, limits, |_| {})
    }

    /// Like [`rank_moves`](Self::rank_moves), calling `on_progress` once per
    /// root move as soon as it has been scored.
    pub fn rank_moves_with_progress<F>(
        &self,
        pos: &O::Position,
        depth: i32,
        time_budget_ms: i64,
        on_progress: F,
    ) -> Result<Vec<RankedMove<O::Move>>, SearchError>
    where
        F: FnMut(&RankProgress<'_, O::Move>),
    {
        let limits = SearchLimits::new(depth, time_budget_ms)?;
        self.rank_moves_with_progress_within(pos, &limits, on_progress)
    }

    pub fn rank_moves_with_progress_within<F>(
        &self,
        pos: &O::Position,
        limits: &SearchLimits,
        mut on_progress: F,
    ) -> Result<Vec<RankedMove<O::Move>>, SearchError>
    where
        F: FnMut(&RankProgress<'_, O::Move>),
    {
        let start = Instant::now();
        let mut ctx = SearchContext::new(start.checked_add(limits.time_budget()), limits.cancel_flag());
        let root_maximizes = self.oracle.side_to_move(pos).is_maximizer();

        let moves = self.oracle.legal_moves(pos);
        let total = moves.len();
        let mut ranked = Vec::with_capacity(total);

        for (index, mv) in moves.into_iter().enumerate() {
            let child = self.oracle.apply(pos, &mv).map_err(|e| {
                error!("rules oracle rejected its own legal move: {}", e);
                e
            })?;
            let maximize = self.oracle.side_to_move(&child).is_maximizer();

            let node = minimax(
                &self.oracle,
                &self.evaluator,
                &child,
                limits.depth() - 1,
                Score::NEG_INFINITY,
                Score::INFINITY,
                maximize,
                &mut ctx,
            )?;

            trace!("root move {} scored {:.1}", mv, node.score);
            let entry = RankedMove { mv, score: node.score };
            on_progress(&RankProgress {
                index,
                total,
                entry: &entry,
            });
            ranked.push(entry);
        }

        // Vec::sort_by is stable, so equal scores stay in oracle order.
        ranked.sort_by(|a, b| compare_for(root_maximizes, a.score, b.score));

        let elapsed = start.elapsed().as_millis();
        if ctx.timed_out {
            warn!("ranking truncated after {} ms ({} nodes)", elapsed, ctx.nodes);
        }
        debug!(
            "ranked {} moves at depth {} nodes {} time {}ms",
            ranked.len(),
            limits.depth(),
            ctx.nodes,
            elapsed
        );

        Ok(ranked)
    }
}

/// Best-first ordering for the side to move.
fn compare_for(maximizer: bool, a: Score, b: Score) -> Ordering {
    if maximizer {
        b.total_cmp(&a)
    } else {
        a.total_cmp(&b)
    }
}
