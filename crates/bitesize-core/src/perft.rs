//! Perft (performance test) for move generation correctness verification.
//!
//! Promotions are queen-only, so reference counts are only comparable for
//! positions where no pawn promotes within the searched depth.

use crate::board::Board;
use crate::movegen::generate_legal_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without applying them.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&mv| perft(&board.with_move(mv), depth - 1))
        .sum()
}

/// Run perft with per-move breakdown.
///
/// Returns a vector of `(uci_move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_legal_moves(board);
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .map(|&mv| {
            let count = if depth <= 1 {
                1
            } else {
                perft(&board.with_move(mv), depth - 1)
            };
            (mv.to_uci(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
