//! Attack generation: pre-computed leaper tables, magic-backed slider
//! lookups, between-square ray queries, and the aggregate attack union the
//! legality check is built on.
//!
//! The leaper tables (pawn, knight, king) are compile-time constants built
//! from shift-and-mask geometry; sliding attacks delegate to the magic
//! tables in [`crate::magic`]. Everything here is a pure function of square
//! geometry and the caller's blocker board.

use crate::bitboard::Bitboard;
use crate::magic;
use crate::types::{file_of, rank_of, sq, Color, PieceKind};

pub(crate) const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Build every lookup table up front.
///
/// The leaper tables are constants; the slider tables are built on first
/// use behind a once-guard, so queries are valid without this call. Calling
/// it at startup just keeps the one-time cost out of the first search.
pub fn init() {
    magic::init();
}

/// Pre-computed knight attacks for each square.
pub static KNIGHT_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_square(sq).0;

        // Each of the 8 jumps is gated by the file mask that keeps its
        // landing square from wrapping around the board edge.
        let mut result = (bb << 17) & Bitboard::NOT_FILE_A.0; // up 2, right 1
        result |= (bb << 15) & Bitboard::NOT_FILE_H.0; // up 2, left 1
        result |= (bb << 10) & Bitboard::NOT_FILE_AB.0; // up 1, right 2
        result |= (bb << 6) & Bitboard::NOT_FILE_GH.0; // up 1, left 2
        result |= (bb >> 6) & Bitboard::NOT_FILE_AB.0; // down 1, right 2
        result |= (bb >> 10) & Bitboard::NOT_FILE_GH.0; // down 1, left 2
        result |= (bb >> 15) & Bitboard::NOT_FILE_A.0; // down 2, right 1
        result |= (bb >> 17) & Bitboard::NOT_FILE_H.0; // down 2, left 1

        attacks[sq as usize] = Bitboard(result);
        sq += 1;
    }
    attacks
};

/// Pre-computed king attacks for each square. The two vertical steps never
/// change file and need no gate.
pub static KING_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_square(sq).0;

        let mut result = bb << 8 | bb >> 8;
        result |= (bb << 1) & Bitboard::NOT_FILE_A.0;
        result |= (bb << 9) & Bitboard::NOT_FILE_A.0;
        result |= (bb >> 7) & Bitboard::NOT_FILE_A.0;
        result |= (bb >> 1) & Bitboard::NOT_FILE_H.0;
        result |= (bb << 7) & Bitboard::NOT_FILE_H.0;
        result |= (bb >> 9) & Bitboard::NOT_FILE_H.0;

        attacks[sq as usize] = Bitboard(result);
        sq += 1;
    }
    attacks
};

/// Pre-computed white pawn attacks (capture squares, not pushes).
pub static WHITE_PAWN_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_square(sq).0;
        let ne = (bb << 9) & Bitboard::NOT_FILE_A.0;
        let nw = (bb << 7) & Bitboard::NOT_FILE_H.0;
        attacks[sq as usize] = Bitboard(ne | nw);
        sq += 1;
    }
    attacks
};

/// Pre-computed black pawn attacks; the same two diagonals pointed the
/// other way.
pub static BLACK_PAWN_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_square(sq).0;
        let se = (bb >> 7) & Bitboard::NOT_FILE_A.0;
        let sw = (bb >> 9) & Bitboard::NOT_FILE_H.0;
        attacks[sq as usize] = Bitboard(se | sw);
        sq += 1;
    }
    attacks
};

/// Pawn capture squares for the given side.
#[inline(always)]
pub fn pawn_attacks(color: Color, sq: u8) -> Bitboard {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[sq as usize],
        Color::Black => BLACK_PAWN_ATTACKS[sq as usize],
    }
}

#[inline(always)]
pub fn knight_attacks(sq: u8) -> Bitboard {
    KNIGHT_ATTACKS[sq as usize]
}

#[inline(always)]
pub fn king_attacks(sq: u8) -> Bitboard {
    KING_ATTACKS[sq as usize]
}

/// Bishop attacks against the given blocker board: every diagonal ray up to
/// and including its first blocker.
#[inline(always)]
pub fn bishop_attacks(sq: u8, blockers: Bitboard) -> Bitboard {
    magic::bishop_attacks(sq, blockers)
}

/// Rook attacks against the given blocker board.
#[inline(always)]
pub fn rook_attacks(sq: u8, blockers: Bitboard) -> Bitboard {
    magic::rook_attacks(sq, blockers)
}

/// Queen attacks: the union of the bishop and rook lookups, no geometry of
/// its own.
#[inline(always)]
pub fn queen_attacks(sq: u8, blockers: Bitboard) -> Bitboard {
    magic::bishop_attacks(sq, blockers) | magic::rook_attacks(sq, blockers)
}

/// Union of every attack by `side`'s pieces.
///
/// `pieces` holds the side's per-kind boards indexed by `PieceKind::idx`;
/// `blockers` is the occupancy of both sides, so sliders stop at any piece
/// regardless of color. Empty piece boards (including a missing king)
/// simply contribute nothing.
pub fn all_attacks(side: Color, blockers: Bitboard, pieces: &[Bitboard; 6]) -> Bitboard {
    let mut attacked = Bitboard::EMPTY;
    for from in pieces[PieceKind::Pawn.idx()] {
        attacked |= pawn_attacks(side, from);
    }
    for from in pieces[PieceKind::Knight.idx()] {
        attacked |= knight_attacks(from);
    }
    for from in pieces[PieceKind::Bishop.idx()] {
        attacked |= bishop_attacks(from, blockers);
    }
    for from in pieces[PieceKind::Rook.idx()] {
        attacked |= rook_attacks(from, blockers);
    }
    for from in pieces[PieceKind::Queen.idx()] {
        attacked |= queen_attacks(from, blockers);
    }
    for from in pieces[PieceKind::King.idx()] {
        attacked |= king_attacks(from);
    }
    attacked
}

/// Squares strictly between two diagonally aligned squares; empty when the
/// squares share no diagonal (or are equal or adjacent).
pub fn diagonal_between(start: u8, target: u8) -> Bitboard {
    between(start, target, &DIAGONAL_DIRECTIONS)
}

/// Squares strictly between two squares sharing a rank or file.
pub fn orthogonal_between(start: u8, target: u8) -> Bitboard {
    between(start, target, &ORTHOGONAL_DIRECTIONS)
}

fn between(start: u8, target: u8, directions: &[(i8, i8); 4]) -> Bitboard {
    if start == target {
        return Bitboard::EMPTY;
    }
    for &(df, dr) in directions {
        let mut visited = Bitboard::EMPTY;
        let mut f = file_of(start) + df;
        let mut r = rank_of(start) + dr;
        while let Some(s) = sq(f, r) {
            if s == target {
                // Neither endpoint belongs to the interval.
                return visited;
            }
            visited.set(s);
            f += df;
            r += dr;
        }
        // Ran off the board without meeting the target: wrong direction,
        // the partial accumulation is discarded.
    }
    Bitboard::EMPTY
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
