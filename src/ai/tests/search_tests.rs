// Tests for the search entry points

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::ai::evaluation::{ChessEvaluator, Evaluator, MateAwareEvaluator};
use crate::ai::limits::{Difficulty, SearchLimits};
use crate::ai::search::SearchEngine;
use crate::error::{IllegalMoveError, SearchError};
use crate::game_repr::{ChessRules, Move, MoveList, Position, RulesOracle, Side};

fn chess_engine() -> SearchEngine<ChessRules, ChessEvaluator> {
    SearchEngine::new(ChessRules::new(), ChessEvaluator::new())
}

#[test]
fn test_rejects_invalid_parameters() {
    let engine = chess_engine();
    let pos = Position::startpos();

    assert!(matches!(
        engine.find_best_move(&pos, 0, 1000),
        Err(SearchError::InvalidSearchParameters { depth: 0, .. })
    ));
    assert!(matches!(
        engine.rank_moves(&pos, 2, -1),
        Err(SearchError::InvalidSearchParameters { time_budget_ms: -1, .. })
    ));
}

#[test]
fn test_zero_budget_scores_root_statically() {
    let engine = chess_engine();
    let pos = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3").unwrap();

    let result = engine.find_best_move(&pos, 4, 0).unwrap();

    assert_eq!(result.best_move, None);
    assert_eq!(result.score, engine.evaluate(&pos));
    assert_eq!(result.nodes_searched, 1);
    assert!(result.timed_out);
}

#[test]
fn test_preset_cancel_flag_behaves_like_expired_deadline() {
    let engine = chess_engine();
    let pos = Position::startpos();
    let limits = SearchLimits::new(3, 60_000)
        .unwrap()
        .with_cancel_flag(Arc::new(AtomicBool::new(true)));

    let result = engine.find_best_move_within(&pos, &limits).unwrap();
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, engine.evaluate(&pos));
    assert!(result.timed_out);
}

#[test]
fn test_depth_one_picks_best_static_child() {
    let engine = chess_engine();
    // White can take a hanging queen
    let pos = Position::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();

    let result = engine.find_best_move(&pos, 1, 60_000).unwrap();
    assert_eq!(result.best_move, Some(Move::from_uci("d2d5").unwrap()));
    assert!(!result.timed_out);
    assert_eq!(result.depth, 1);
}

#[test]
fn test_black_minimizes() {
    let engine = chess_engine();
    // Same idea with colours swapped: Black takes the hanging rook
    let pos = Position::from_fen("4k3/3r4/8/8/3R4/8/8/4K3 b - - 0 1").unwrap();

    let result = engine.find_best_move(&pos, 1, 60_000).unwrap();
    assert_eq!(result.best_move, Some(Move::from_uci("d7d4").unwrap()));
    assert!(result.score < -400.0);
}

#[test]
fn test_mate_in_one_with_mate_aware_evaluator() {
    let engine = SearchEngine::new(ChessRules::new(), MateAwareEvaluator::new(ChessEvaluator::new()));
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();

    let result = engine.find_best_move(&pos, 2, 60_000).unwrap();
    assert_eq!(result.best_move, Some(Move::from_uci("a1a8").unwrap()));
}

#[test]
fn test_progress_reports_each_root_move_in_order() {
    let engine = chess_engine();
    let pos = Position::startpos();
    let mut seen = Vec::new();

    let ranked = engine
        .rank_moves_with_progress(&pos, 1, 60_000, |p| {
            assert_eq!(p.total, 20);
            seen.push((p.index, p.entry.mv));
        })
        .unwrap();

    assert_eq!(seen.len(), 20);
    assert!(seen.iter().enumerate().all(|(i, (index, _))| i == *index));
    let oracle_order: Vec<Move> = ChessRules::new().legal_moves(&pos).into_iter().collect();
    let reported: Vec<Move> = seen.into_iter().map(|(_, mv)| mv).collect();
    assert_eq!(reported, oracle_order);
    assert_eq!(ranked.len(), 20);
}

#[test]
fn test_difficulty_limits_drive_search() {
    let engine = chess_engine();
    let pos = Position::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();

    let result = engine.find_best_move_within(&pos, &Difficulty::Easy.limits()).unwrap();
    assert_eq!(result.depth, 2);
    assert!(result.best_move.is_some());
}

/// Two-move game whose oracle refuses every move it lists.
struct BrokenOracle;

impl RulesOracle for BrokenOracle {
    type Position = u32;
    type Move = u32;

    fn legal_moves(&self, _pos: &u32) -> MoveList<u32> {
        MoveList::from_slice(&[1, 2])
    }

    fn apply(&self, pos: &u32, mv: &u32) -> Result<u32, IllegalMoveError> {
        Err(IllegalMoveError::new(mv.to_string(), pos.to_string()))
    }

    fn is_terminal(&self, _pos: &u32) -> bool {
        false
    }

    fn side_to_move(&self, _pos: &u32) -> Side {
        Side::First
    }
}

#[test]
fn test_oracle_failure_propagates() {
    let engine = SearchEngine::new(BrokenOracle, |pos: &u32| *pos as f64);

    let err = engine.find_best_move(&0, 2, 60_000).unwrap_err();
    assert_eq!(err, SearchError::Oracle(IllegalMoveError::new("1", "0")));

    let err = engine.rank_moves(&0, 2, 60_000).unwrap_err();
    assert!(matches!(err, SearchError::Oracle(_)));
}

#[test]
fn test_engine_exposes_its_parts() {
    let engine = chess_engine();
    let pos = Position::startpos();
    assert_eq!(engine.evaluate(&pos), engine.evaluator().evaluate(&pos));
    assert_eq!(engine.oracle().side_to_move(&pos), Side::First);
}

#[test]
fn test_search_from_maximal_move_number() {
    let engine = chess_engine();
    let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 4294967295").unwrap();

    let result = engine.find_best_move(&pos, 2, 60_000).unwrap();
    assert!(result.best_move.is_some());
    assert_eq!(engine.rank_moves(&pos, 2, 60_000).unwrap().len(), 5);
}
