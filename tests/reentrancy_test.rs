//! One engine shared by many threads, plus external cancellation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chess_search::ai::SearchLimits;
use chess_search::game_repr::{ChessRules, Position, RulesOracle};
use chess_search::ChessEngine;
use rayon::prelude::*;

const FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    "r2q1rk1/ppp2ppp/2np1n2/2b1p1B1/2B1P1b1/2NP1N2/PPP2PPP/R2Q1RK1 b - - 2 8",
    "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1",
    "8/5pk1/6p1/8/3B4/8/5PPP/6K1 b - - 0 40",
    "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1",
];

#[test]
fn test_parallel_calls_match_sequential() {
    let engine = ChessEngine::chess();
    let positions: Vec<Position> = FENS.iter().map(|f| Position::from_fen(f).unwrap()).collect();

    let sequential: Vec<_> = positions
        .iter()
        .map(|p| engine.find_best_move(p, 2, 600_000).unwrap())
        .collect();
    let parallel: Vec<_> = positions
        .par_iter()
        .map(|p| engine.find_best_move(p, 2, 600_000).unwrap())
        .collect();

    for (s, p) in sequential.iter().zip(&parallel) {
        assert_eq!(s.score, p.score);
        assert_eq!(s.best_move, p.best_move);
        assert_eq!(s.nodes_searched, p.nodes_searched);
    }
}

#[test]
fn test_root_moves_can_be_scored_on_separate_workers() {
    let engine = ChessEngine::chess();
    let rules = ChessRules::new();
    let pos = Position::from_fen(FENS[1]).unwrap();

    let ranked = engine.rank_moves(&pos, 2, 600_000).unwrap();

    // Each child searched on its own at depth 1 gives back the ranking scores.
    let moves: Vec<_> = rules.legal_moves(&pos).into_iter().collect();
    let scores: Vec<f64> = moves
        .par_iter()
        .map(|mv| {
            let child = rules.apply(&pos, mv).unwrap();
            engine.find_best_move(&child, 1, 600_000).unwrap().score
        })
        .collect();

    for (mv, score) in moves.iter().zip(scores) {
        let entry = ranked.iter().find(|r| r.mv == *mv).unwrap();
        assert_eq!(entry.score, score, "{}", mv);
    }
}

#[test]
fn test_cancel_flag_stops_a_deep_search() {
    let engine = ChessEngine::chess();
    let pos = Position::from_fen(FENS[2]).unwrap();
    let flag = Arc::new(AtomicBool::new(false));
    let limits = SearchLimits::new(8, 600_000).unwrap().with_cancel_flag(flag.clone());

    let canceller = {
        let flag = flag.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            flag.store(true, Ordering::SeqCst);
        })
    };

    let start = Instant::now();
    let result = engine.find_best_move_within(&pos, &limits).unwrap();
    canceller.join().unwrap();

    assert!(result.timed_out);
    assert!(start.elapsed() < Duration::from_secs(60));
}

#[test]
fn test_short_budget_still_returns_usable_result() {
    let engine = ChessEngine::chess();
    let pos = Position::from_fen(FENS[2]).unwrap();

    let result = engine.find_best_move(&pos, 8, 30).unwrap();
    assert!(result.timed_out);
    if let Some(mv) = result.best_move {
        assert!(ChessRules::new().legal_moves(&pos).contains(&mv));
    }
}
