//! Fixed-Depth Negamax Engine
//!
//! Plain negamax over all legal moves with material evaluation: no pruning,
//! no move ordering, no time awareness. The textbook recursion, kept simple
//! on purpose; its job is to exercise the move generation and attack tables
//! underneath it.

mod eval;
mod search;

use lodestone_core::{Engine, Position, SearchResult};

/// Chess engine searching every line to the same fixed depth.
#[derive(Debug, Clone, Default)]
pub struct NegamaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for NegamaxEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        self.nodes = 0;

        let outcome = search::pick_best_move(pos, depth, &mut self.nodes);

        SearchResult {
            best_move: outcome.map(|(mv, _)| mv),
            score: outcome.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Negamax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::evaluate;
