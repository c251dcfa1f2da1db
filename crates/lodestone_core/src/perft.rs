use crate::board::Position;
use crate::movegen::{legal_moves, legal_moves_into};
use crate::types::Move;

/// Count the leaf nodes of the legal-move tree to `depth`.
///
/// One reusable move buffer per remaining ply keeps the hot path free of
/// allocation; at the horizon the move count itself is the answer, so the
/// last ply never makes a move.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    let mut buffers = vec![Vec::with_capacity(64); depth as usize];
    count(pos, &mut buffers)
}

fn count(pos: &mut Position, buffers: &mut [Vec<Move>]) -> u64 {
    let (buf, rest) = match buffers.split_first_mut() {
        Some(split) => split,
        None => return 1,
    };

    buf.clear();
    legal_moves_into(pos, buf);

    if rest.is_empty() {
        return buf.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in buf.iter().copied() {
        let undo = pos.make_move(mv);
        nodes += count(pos, rest);
        pos.unmake_move(mv, undo);
    }
    nodes
}

/// Per-root-move node counts, the first thing to reach for when a perft
/// total disagrees with a reference value.
pub fn perft_divide(pos: &mut Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    legal_moves(pos)
        .into_iter()
        .map(|mv| {
            let undo = pos.make_move(mv);
            let nodes = perft(pos, depth - 1);
            pos.unmake_move(mv, undo);
            (mv, nodes)
        })
        .collect()
}
