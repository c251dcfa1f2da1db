//! Material-based position evaluation using bitboards.

use lodestone_core::{Color, PieceKind, Position};

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

/// Evaluates the position from the side-to-move's perspective.
///
/// Returns a score in centipawns: positive is good for the side to move,
/// zero is balanced.
pub fn evaluate(pos: &Position) -> i32 {
    let mut balance = 0i32;
    for kind in PieceKind::ALL {
        let white = pos.bitboards.pieces(Color::White, kind).popcount() as i32;
        let black = pos.bitboards.pieces(Color::Black, kind).popcount() as i32;
        balance += PIECE_VALUES[kind.idx()] * (white - black);
    }

    match pos.side_to_move {
        Color::White => balance,
        Color::Black => -balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_is_balanced() {
        assert_eq!(evaluate(&Position::startpos()), 0);
    }

    #[test]
    fn test_score_follows_side_to_move() {
        // White is up a rook.
        let white_to_move = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        let black_to_move = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1");
        assert_eq!(evaluate(&white_to_move), 500);
        assert_eq!(evaluate(&black_to_move), -500);
    }
}
