use super::*;
use lodestone_core::{Engine, Position};

use crate::NegamaxEngine;

#[test]
fn test_pick_best_move_start_position() {
    let pos = Position::startpos();
    let mut nodes = 0;
    let result = pick_best_move(&pos, 3, &mut nodes);
    assert!(result.is_some());
    assert!(nodes > 0);
}

#[test]
fn test_finds_mate_in_one() {
    // Qe8 is mate: the back-rank king is boxed in by its own pawns.
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&pos, 2, &mut nodes).expect("moves exist");
    assert_eq!((mv.from, mv.to), (4, 60)); // e1-e8
    assert_eq!(score, MATE_SCORE);
}

#[test]
fn test_no_move_when_stalemated() {
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    let mut nodes = 0;
    assert!(pick_best_move(&pos, 3, &mut nodes).is_none());
}

#[test]
fn test_prefers_winning_material() {
    // Black queen hangs on d5; depth 2 is enough to see the recapture is
    // not there.
    let pos = Position::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&pos, 2, &mut nodes).expect("moves exist");
    assert_eq!((mv.from, mv.to), (11, 35)); // Rd2xd5
    assert!(score > 0);
}

#[test]
fn test_engine_trait_reports_stats() {
    let mut engine = NegamaxEngine::new();
    let result = engine.search(&Position::startpos(), 2);
    assert!(result.best_move.is_some());
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 0);
    assert_eq!(engine.name(), "Negamax v1.0");

    engine.new_game();
    let result = engine.search(&Position::startpos(), 1);
    assert!(result.best_move.is_some());
}
