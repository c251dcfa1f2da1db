//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p lodestone_core -- [depth] [fen]
//!
//! Examples:
//!   # Default: depth 5 over the standard position set
//!   cargo flamegraph --example perft_bench -p lodestone_core
//!
//!   # Custom depth and position
//!   cargo flamegraph --example perft_bench -p lodestone_core -- 5 "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -"

use std::env;
use std::time::Instant;

use lodestone_core::{init, perft, Position};

/// Standard test positions for comprehensive profiling
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Position 4",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).map_or(5, |d| d.parse().expect("invalid depth"));

    // Keep table construction out of the measured region.
    init();

    if let Some(fen) = args.get(2) {
        run_one("Custom position", fen, depth);
        return;
    }

    let mut total_nodes = 0u64;
    let start = Instant::now();
    for (name, fen) in TEST_POSITIONS {
        total_nodes += run_one(name, fen, depth);
    }
    let elapsed = start.elapsed();
    println!(
        "\nTotal: {} nodes in {:.2}s ({:.0} knps)",
        total_nodes,
        elapsed.as_secs_f64(),
        total_nodes as f64 / elapsed.as_secs_f64() / 1000.0
    );
}

fn run_one(name: &str, fen: &str, depth: u8) -> u64 {
    let mut pos = Position::from_fen(fen);
    let start = Instant::now();
    let nodes = perft(&mut pos, depth);
    let elapsed = start.elapsed();
    println!(
        "{name}: perft({depth}) = {nodes} in {:.2}s ({:.0} knps)",
        elapsed.as_secs_f64(),
        nodes as f64 / elapsed.as_secs_f64() / 1000.0
    );
    nodes
}
