//! Magic-bitboard lookup tables for sliding piece attacks.
//!
//! A slider's attack set depends only on the occupancy of the squares its
//! empty-board rays cross, edges excluded (a blocker on the board edge
//! cannot shadow anything). For each square we hash that relevant occupancy
//! with a "magic" multiplier into a dense per-square table slice holding the
//! walked attack set for every possible blocker subset.
//!
//! The magic numbers are not hard-coded: they are found at startup by a
//! seeded sparse random search, and verified collision-free while the table
//! is filled, so a lookup can never return an attack set that disagrees with
//! the ray walk that produced it. Construction happens once behind a
//! `OnceLock`; `init` forces it eagerly.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::attacks::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::bitboard::Bitboard;
use crate::types::{file_of, rank_of, sq};

/// Fixed search seed: table contents are a deterministic function of board
/// geometry, so repeated initialization can never disagree with itself.
const MAGIC_SEED: u64 = 0x43A0_9C5C_5D2F_96E3;

/// Per-square hashing data. `offset` points into the shared attack table.
struct MagicEntry {
    mask: Bitboard,
    magic: u64,
    shift: u32,
    offset: usize,
}

impl MagicEntry {
    /// Index of `occupied`'s relevant subset within this square's slice.
    #[inline(always)]
    fn index(&self, occupied: Bitboard) -> usize {
        let relevant = occupied.0 & self.mask.0;
        (relevant.wrapping_mul(self.magic) >> self.shift) as usize
    }
}

struct SliderTables {
    bishop: [MagicEntry; 64],
    rook: [MagicEntry; 64],
    attacks: Vec<Bitboard>,
}

static TABLES: OnceLock<SliderTables> = OnceLock::new();

/// Build the slider tables now instead of on the first lookup.
pub fn init() {
    let _ = tables();
}

#[inline]
fn tables() -> &'static SliderTables {
    TABLES.get_or_init(SliderTables::build)
}

/// Diagonal attacks from `sq`, stopping at (and including) the first blocker
/// on each ray.
#[inline(always)]
pub fn bishop_attacks(sq: u8, blockers: Bitboard) -> Bitboard {
    let t = tables();
    let entry = &t.bishop[sq as usize];
    t.attacks[entry.offset + entry.index(blockers)]
}

/// Orthogonal attacks from `sq`, stopping at (and including) the first
/// blocker on each ray.
#[inline(always)]
pub fn rook_attacks(sq: u8, blockers: Bitboard) -> Bitboard {
    let t = tables();
    let entry = &t.rook[sq as usize];
    t.attacks[entry.offset + entry.index(blockers)]
}

impl SliderTables {
    fn build() -> Self {
        let mut rng = StdRng::seed_from_u64(MAGIC_SEED);
        let mut attacks = Vec::new();
        let bishop = build_entries(&mut rng, &DIAGONAL_DIRECTIONS, &mut attacks);
        let rook = build_entries(&mut rng, &ORTHOGONAL_DIRECTIONS, &mut attacks);
        attacks.shrink_to_fit();
        SliderTables {
            bishop,
            rook,
            attacks,
        }
    }
}

fn build_entries(
    rng: &mut StdRng,
    directions: &[(i8, i8); 4],
    table: &mut Vec<Bitboard>,
) -> [MagicEntry; 64] {
    std::array::from_fn(|square| {
        let square = square as u8;
        let mask = relevance_mask(square, directions);
        let bits = mask.popcount();

        // Enumerate every subset of the mask (carry-ripple trick) together
        // with its walked attack set.
        let mut occupancies = Vec::with_capacity(1 << bits);
        let mut reference = Vec::with_capacity(1 << bits);
        let mut subset = Bitboard::EMPTY;
        loop {
            occupancies.push(subset);
            reference.push(sliding_attacks(square, subset, directions));
            subset = Bitboard(subset.0.wrapping_sub(mask.0) & mask.0);
            if subset.is_empty() {
                break;
            }
        }

        let (magic, resolved) = find_magic(rng, mask, bits, &occupancies, &reference);
        let offset = table.len();
        table.extend_from_slice(&resolved);
        MagicEntry {
            mask,
            magic,
            shift: 64 - bits,
            offset,
        }
    })
}

/// Search for a multiplier that maps every occupancy subset to a slot whose
/// stored attack set matches. The table slice is built as a side effect of
/// verifying the candidate; `stamp` marks which slots the current attempt
/// has claimed so failed attempts need no wipe.
fn find_magic(
    rng: &mut StdRng,
    mask: Bitboard,
    bits: u32,
    occupancies: &[Bitboard],
    reference: &[Bitboard],
) -> (u64, Vec<Bitboard>) {
    let size = 1usize << bits;
    let mut resolved = vec![Bitboard::EMPTY; size];
    let mut stamp = vec![0u32; size];
    let mut attempt = 0u32;

    loop {
        // Sparse candidates (few set bits) collide far less often.
        let candidate = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        if (mask.0.wrapping_mul(candidate) >> 56).count_ones() < 6 {
            continue;
        }

        attempt += 1;
        let mut ok = true;
        for (i, &occ) in occupancies.iter().enumerate() {
            let idx = (occ.0.wrapping_mul(candidate) >> (64 - bits)) as usize;
            if stamp[idx] != attempt {
                stamp[idx] = attempt;
                resolved[idx] = reference[i];
            } else if resolved[idx] != reference[i] {
                ok = false;
                break;
            }
        }
        if ok {
            return (candidate, resolved);
        }
    }
}

/// The squares whose occupancy can shadow a slider on `square`: its
/// empty-board rays with the far board edges trimmed off.
fn relevance_mask(square: u8, directions: &[(i8, i8); 4]) -> Bitboard {
    let rank_edges = (Bitboard::RANK_1.0 | Bitboard::RANK_8.0) & !Bitboard::rank(square / 8).0;
    let file_edges = (Bitboard::FILE_A.0 | Bitboard::FILE_H.0) & !Bitboard::file(square % 8).0;
    Bitboard(sliding_attacks(square, Bitboard::EMPTY, directions).0 & !(rank_edges | file_edges))
}

/// Walked slider attacks: the reference the magic tables are built from and
/// checked against.
pub(crate) fn sliding_attacks(
    square: u8,
    occupied: Bitboard,
    directions: &[(i8, i8)],
) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(df, dr) in directions {
        let mut f = file_of(square) + df;
        let mut r = rank_of(square) + dr;
        while let Some(to) = sq(f, r) {
            attacks.set(to);
            if occupied.contains(to) {
                break;
            }
            f += df;
            r += dr;
        }
    }
    attacks
}

#[cfg(test)]
#[path = "magic_tests.rs"]
mod magic_tests;
