//! Perft validation against the standard reference positions.
//!
//! Node counts are the published values for these six positions. The cheap
//! depths always run; set FULL_PERFT=1 to include the expensive ones.

use rayon::prelude::*;

use lodestone_core::{perft, Position};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

/// (fen, &[(depth, expected_nodes)]); depths past the first few are gated.
const CASES: &[(&str, &[(u8, u64)])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    ),
    (
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        &[(1, 48), (2, 2_039), (3, 97_862)],
    ),
    (
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    ),
    (
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[(1, 6), (2, 264), (3, 9_467)],
    ),
    (
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        &[(1, 44), (2, 1_486), (3, 62_379)],
    ),
    (
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        &[(1, 46), (2, 2_079), (3, 89_890)],
    ),
];

#[test]
fn perft_reference_positions() {
    CASES.par_iter().for_each(|&(fen, depths)| {
        for &(depth, expected) in depths {
            let mut pos = Position::from_fen(fen);
            let got = perft(&mut pos, depth);
            assert_eq!(
                got, expected,
                "perft mismatch for FEN '{fen}' at depth {depth}: expected {expected}, got {got}"
            );
        }
    });
}

#[test]
fn perft_deep() {
    if std::env::var(FULL_PERFT_ENV).is_err() {
        eprintln!("Skipping deep perft; set {FULL_PERFT_ENV}=1 to run.");
        return;
    }

    let deep: &[(&str, u8, u64)] = &[
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 5, 4_865_609),
        ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -", 4, 4_085_603),
        ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -", 5, 674_624),
        ("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1", 4, 422_333),
        ("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8", 4, 2_103_487),
    ];
    deep.par_iter().for_each(|&(fen, depth, expected)| {
        let mut pos = Position::from_fen(fen);
        assert_eq!(perft(&mut pos, depth), expected, "FEN '{fen}' depth {depth}");
    });
}
