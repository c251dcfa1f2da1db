//! Legal move generation on top of the attack tables.
//!
//! Two phases, as everywhere: pseudo-legal moves straight off the attack
//! bitboards, then a make/test/unmake filter that drops anything leaving
//! the mover's king in check.

use crate::attacks;
use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::types::*;

// Squares that must be empty between king and rook.
const WHITE_KINGSIDE_PATH: Bitboard = Bitboard(0x0000_0000_0000_0060); // f1 g1
const WHITE_QUEENSIDE_PATH: Bitboard = Bitboard(0x0000_0000_0000_000E); // b1 c1 d1
const BLACK_KINGSIDE_PATH: Bitboard = Bitboard(0x6000_0000_0000_0000); // f8 g8
const BLACK_QUEENSIDE_PATH: Bitboard = Bitboard(0x0E00_0000_0000_0000); // b8 c8 d8

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    let own = pos.bitboards.color(us);
    let occupied = pos.bitboards.occupied();

    gen_pawn_moves(pos, us, occupied, out);

    for from in pos.bitboards.pieces(us, PieceKind::Knight) {
        push_targets(out, from, attacks::knight_attacks(from) & !own);
    }
    for from in pos.bitboards.pieces(us, PieceKind::Bishop) {
        push_targets(out, from, attacks::bishop_attacks(from, occupied) & !own);
    }
    for from in pos.bitboards.pieces(us, PieceKind::Rook) {
        push_targets(out, from, attacks::rook_attacks(from, occupied) & !own);
    }
    for from in pos.bitboards.pieces(us, PieceKind::Queen) {
        push_targets(out, from, attacks::queen_attacks(from, occupied) & !own);
    }
    if let Some(from) = pos.king_sq(us) {
        push_targets(out, from, attacks::king_attacks(from) & !own);
        gen_castle(pos, from, us, out);
    }
}

fn push_targets(out: &mut Vec<Move>, from: u8, targets: Bitboard) {
    for to in targets {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn_moves(pos: &Position, us: Color, occupied: Bitboard, out: &mut Vec<Move>) {
    let enemy = pos.bitboards.color(us.other());
    let (step, start_rank, promo_rank): (i8, i8, i8) = match us {
        Color::White => (8, 1, 7),
        Color::Black => (-8, 6, 0),
    };

    for from in pos.bitboards.pieces(us, PieceKind::Pawn) {
        // Quiet pushes. A pawn never stands on its own promotion rank, so
        // one step forward is always on the board.
        let one = (from as i8 + step) as u8;
        if !occupied.contains(one) {
            push_pawn_move(out, from, one, promo_rank);
            if rank_of(from) == start_rank {
                let two = (one as i8 + step) as u8;
                if !occupied.contains(two) {
                    out.push(Move::new(from, two));
                }
            }
        }

        // Captures come straight off the attack table.
        for to in attacks::pawn_attacks(us, from) & enemy {
            push_pawn_move(out, from, to, promo_rank);
        }

        if let Some(ep) = pos.en_passant {
            if attacks::pawn_attacks(us, from).contains(ep) {
                let mut mv = Move::new(from, ep);
                mv.is_en_passant = true;
                out.push(mv);
            }
        }
    }
}

fn push_pawn_move(out: &mut Vec<Move>, from: u8, to: u8, promo_rank: i8) {
    if rank_of(to) == promo_rank {
        for kind in [
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
        ] {
            let mut mv = Move::new(from, to);
            mv.promo = Some(kind);
            out.push(mv);
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_castle(pos: &Position, from: u8, us: Color, out: &mut Vec<Move>) {
    let home: u8 = match us {
        Color::White => 4,
        Color::Black => 60,
    };
    // Castling must start from the home square and never out of check.
    if from != home || pos.in_check(us) {
        return;
    }

    let occupied = pos.bitboards.occupied();
    let enemy = us.other();
    let (kingside, queenside) = match us {
        Color::White => (pos.castling.wk, pos.castling.wq),
        Color::Black => (pos.castling.bk, pos.castling.bq),
    };
    let (kingside_path, queenside_path) = match us {
        Color::White => (WHITE_KINGSIDE_PATH, WHITE_QUEENSIDE_PATH),
        Color::Black => (BLACK_KINGSIDE_PATH, BLACK_QUEENSIDE_PATH),
    };

    if kingside
        && (occupied & kingside_path).is_empty()
        && !pos.is_square_attacked(home + 1, enemy)
        && !pos.is_square_attacked(home + 2, enemy)
    {
        let mut mv = Move::new(home, home + 2);
        mv.is_castle = true;
        out.push(mv);
    }
    if queenside
        && (occupied & queenside_path).is_empty()
        && !pos.is_square_attacked(home - 1, enemy)
        && !pos.is_square_attacked(home - 2, enemy)
    {
        let mut mv = Move::new(home, home - 2);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
