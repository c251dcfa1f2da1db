use crate::attacks;
use crate::bitboard::Bitboard;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

/// Per-(color, kind) piece boards plus per-color occupancy, kept in
/// lock-step with the mailbox by [`Position::set_piece`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PieceBitboards {
    by_kind: [[Bitboard; 6]; 2],
    by_color: [Bitboard; 2],
}

impl PieceBitboards {
    #[inline(always)]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.by_kind[color.idx()][kind.idx()]
    }

    /// Occupancy of one color.
    #[inline(always)]
    pub fn color(&self, color: Color) -> Bitboard {
        self.by_color[color.idx()]
    }

    /// Occupancy of both colors: the blocker board sliders stop on.
    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.by_color[0] | self.by_color[1]
    }

    /// One side's six boards, indexed by `PieceKind::idx`, in the shape
    /// [`attacks::all_attacks`] consumes.
    #[inline(always)]
    pub fn side(&self, color: Color) -> &[Bitboard; 6] {
        &self.by_kind[color.idx()]
    }

    #[inline(always)]
    fn toggle(&mut self, color: Color, kind: PieceKind, sq: u8) {
        let bit = Bitboard::from_square(sq);
        self.by_kind[color.idx()][kind.idx()] ^= bit;
        self.by_color[color.idx()] ^= bit;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub bitboards: PieceBitboards,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

impl Position {
    fn empty() -> Self {
        Position {
            board: [None; 64],
            bitboards: PieceBitboards::default(),
            side_to_move: Color::White,
            castling: CastlingRights {
                wk: false,
                wq: false,
                bk: false,
                bq: false,
            },
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
        p.castling = CastlingRights {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        };

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            let f = f as u8;
            p.set_piece(f, Some(Piece { color: Color::White, kind }));
            p.set_piece(8 + f, Some(Piece { color: Color::White, kind: PieceKind::Pawn }));
            p.set_piece(48 + f, Some(Piece { color: Color::Black, kind: PieceKind::Pawn }));
            p.set_piece(56 + f, Some(Piece { color: Color::Black, kind }));
        }
        p
    }

    /// Forsyth-Edwards Notation parser used by tests and engine setup.
    /// Panics with a message on malformed input; FENs reaching this crate
    /// are trusted the way the rest of the API trusts square indices.
    pub fn from_fen(fen: &str) -> Self {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        assert!(parts.len() >= 4, "Invalid FEN: expected at least 4 fields");

        let mut p = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        assert!(ranks.len() == 8, "Invalid FEN board section");
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 first
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => panic!("Invalid piece char in FEN: {}", ch),
                    };
                    let square = sq(file, rank).expect("Square out of bounds while parsing FEN");
                    p.set_piece(square, Some(Piece { color, kind }));
                    file += 1;
                }
                assert!(file <= 8, "Too many files in FEN rank");
            }
            assert!(file == 8, "Not enough files in FEN rank");
        }

        p.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => panic!("Invalid side to move in FEN: {}", other),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => p.castling.wk = true,
                    'Q' => p.castling.wq = true,
                    'k' => p.castling.bk = true,
                    'q' => p.castling.bq = true,
                    _ => panic!("Invalid castling char in FEN: {}", c),
                }
            }
        }

        if parts[3] != "-" {
            p.en_passant = coord_to_sq(parts[3]);
        }

        p.halfmove_clock = parts
            .get(4)
            .copied()
            .unwrap_or("0")
            .parse()
            .expect("Invalid halfmove clock in FEN");
        p.fullmove_number = parts
            .get(5)
            .copied()
            .unwrap_or("1")
            .parse()
            .expect("Invalid fullmove number in FEN");

        p
    }

    #[inline(always)]
    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    /// The single mutation point: the mailbox and the bitboards change
    /// together or not at all.
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        if let Some(old) = self.board[sq as usize] {
            self.bitboards.toggle(old.color, old.kind, sq);
        }
        self.board[sq as usize] = pc;
        if let Some(new) = pc {
            self.bitboards.toggle(new.color, new.kind, sq);
        }
    }

    /// King square via the king board's lowest bit; king-less positions
    /// (some test scenarios) yield `None` rather than an error.
    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.bitboards.pieces(c, PieceKind::King).lsb()
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    /// Is `target` attacked by any piece of `by`? Tests the target against
    /// the union of every attack of that side, with both sides' occupancy
    /// as the blocker board.
    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let attacked = attacks::all_attacks(
            by,
            self.bitboards.occupied(),
            self.bitboards.side(by),
        );
        attacked.contains(target)
    }

    /// Every piece of `c.other()` currently giving check: a piece checks
    /// exactly when the king, using the same movement from its own square,
    /// would reach it.
    pub fn checkers(&self, c: Color) -> Bitboard {
        let ksq = match self.king_sq(c) {
            Some(s) => s,
            None => return Bitboard::EMPTY,
        };
        let bb = &self.bitboards;
        let them = c.other();
        let occupied = bb.occupied();
        (attacks::pawn_attacks(c, ksq) & bb.pieces(them, PieceKind::Pawn))
            | (attacks::knight_attacks(ksq) & bb.pieces(them, PieceKind::Knight))
            | (attacks::king_attacks(ksq) & bb.pieces(them, PieceKind::King))
            | (attacks::bishop_attacks(ksq, occupied)
                & (bb.pieces(them, PieceKind::Bishop) | bb.pieces(them, PieceKind::Queen)))
            | (attacks::rook_attacks(ksq, occupied)
                & (bb.pieces(them, PieceKind::Rook) | bb.pieces(them, PieceKind::Queen)))
    }

    /// Pieces of `c` pinned to their own king: for every enemy slider
    /// aligned with the king, a lone piece of ours on the connecting ray is
    /// pinned.
    pub fn pinned(&self, c: Color) -> Bitboard {
        let ksq = match self.king_sq(c) {
            Some(s) => s,
            None => return Bitboard::EMPTY,
        };
        let bb = &self.bitboards;
        let them = c.other();
        let occupied = bb.occupied();
        let own = bb.color(c);
        let mut pinned = Bitboard::EMPTY;

        let diagonal_snipers =
            bb.pieces(them, PieceKind::Bishop) | bb.pieces(them, PieceKind::Queen);
        for sniper in diagonal_snipers {
            let blockers = attacks::diagonal_between(ksq, sniper) & occupied;
            if blockers.popcount() == 1 && !(blockers & own).is_empty() {
                pinned |= blockers;
            }
        }
        let orthogonal_snipers =
            bb.pieces(them, PieceKind::Rook) | bb.pieces(them, PieceKind::Queen);
        for sniper in orthogonal_snipers {
            let blockers = attacks::orthogonal_between(ksq, sniper) & occupied;
            if blockers.popcount() == 1 && !(blockers & own).is_empty() {
                pinned |= blockers;
            }
        }
        pinned
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Neither side can possibly deliver mate: bare kings, a lone minor, or
    /// one bishop each on same-colored squares.
    pub fn is_insufficient_material(&self) -> bool {
        let bb = &self.bitboards;
        for color in [Color::White, Color::Black] {
            let mating = bb.pieces(color, PieceKind::Pawn)
                | bb.pieces(color, PieceKind::Rook)
                | bb.pieces(color, PieceKind::Queen);
            if !mating.is_empty() {
                return false;
            }
        }

        let white_minors = bb.pieces(Color::White, PieceKind::Bishop)
            | bb.pieces(Color::White, PieceKind::Knight);
        let black_minors = bb.pieces(Color::Black, PieceKind::Bishop)
            | bb.pieces(Color::Black, PieceKind::Knight);
        match (white_minors.popcount(), black_minors.popcount()) {
            (0, 0) | (1, 0) | (0, 1) => true,
            (1, 1) => {
                let bishops = bb.pieces(Color::White, PieceKind::Bishop)
                    | bb.pieces(Color::Black, PieceKind::Bishop);
                // Knight vs minor can still be mated with; only bishop vs
                // bishop on the same square color is dead.
                bishops.popcount() == 2
                    && ((bishops & Bitboard::LIGHT_SQUARES) == bishops
                        || (bishops & Bitboard::LIGHT_SQUARES).is_empty())
            }
            _ => false,
        }
    }

    /// Rights die with the squares they depend on: any move from or to a
    /// king or rook home square revokes the matching rights, which also
    /// covers rooks being captured at home.
    fn revoke_castling(&mut self, sq: u8) {
        match sq {
            0 => self.castling.wq = false,
            7 => self.castling.wk = false,
            4 => {
                self.castling.wk = false;
                self.castling.wq = false;
            }
            56 => self.castling.bq = false,
            63 => self.castling.bk = false,
            60 => {
                self.castling.bk = false;
                self.castling.bq = false;
            }
            _ => {}
        }
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self.piece_at(mv.from).expect("no piece on from-square");
        let mut undo = Undo {
            captured: self.piece_at(mv.to),
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            moved_piece: moved,
            rook_move: None,
            ep_captured_sq: None,
        };

        self.en_passant = None;

        // En-passant removes a pawn from a square the move doesn't name.
        if mv.is_en_passant {
            let behind = match moved.color {
                Color::White => mv.to - 8,
                Color::Black => mv.to + 8,
            };
            undo.captured = self.piece_at(behind);
            undo.ep_captured_sq = Some(behind);
            self.set_piece(behind, None);
        }

        self.set_piece(mv.from, None);
        let reaches_last_rank = match moved.color {
            Color::White => rank_of(mv.to) == 7,
            Color::Black => rank_of(mv.to) == 0,
        };
        let placed = if moved.kind == PieceKind::Pawn && reaches_last_rank {
            Piece {
                color: moved.color,
                kind: mv.promo.unwrap_or(PieceKind::Queen),
            }
        } else {
            moved
        };
        self.set_piece(mv.to, Some(placed));

        // The castling rook hops over in the same move.
        if mv.is_castle && moved.kind == PieceKind::King {
            let hop = match (mv.from, mv.to) {
                (4, 6) => Some((7u8, 5u8)),
                (4, 2) => Some((0, 3)),
                (60, 62) => Some((63, 61)),
                (60, 58) => Some((56, 59)),
                _ => None,
            };
            if let Some((rook_from, rook_to)) = hop {
                let rook = self.piece_at(rook_from).expect("castling without rook");
                self.set_piece(rook_from, None);
                self.set_piece(rook_to, Some(rook));
                undo.rook_move = Some((rook_from, rook_to));
            }
        }

        self.revoke_castling(mv.from);
        self.revoke_castling(mv.to);

        // A double push exposes the passed-over square to en-passant.
        if moved.kind == PieceKind::Pawn {
            let (from_rank, to_rank) = (rank_of(mv.from), rank_of(mv.to));
            if (from_rank - to_rank).abs() == 2 {
                self.en_passant = sq(file_of(mv.from), (from_rank + to_rank) / 2);
            }
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || undo.captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        undo
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rook_from, rook_to)) = undo.rook_move {
            let rook = self.piece_at(rook_to).expect("unmake castling without rook");
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, Some(rook));
        }

        // The original piece goes back, which also reverts a promotion.
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved_piece));

        match undo.ep_captured_sq {
            Some(captured_sq) => self.set_piece(captured_sq, undo.captured),
            None => self.set_piece(mv.to, undo.captured),
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
