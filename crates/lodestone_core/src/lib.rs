pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod magic;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use bitboard::*;
pub use board::*;
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use types::*;

// =============================================================================
// Engine trait, implemented by search backends built on this core
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the engine's perspective
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait implemented by all search backends.
pub trait Engine: Send {
    /// Search the position to a fixed depth in plies.
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
