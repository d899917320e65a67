//! Property-based tests over random playouts.

use bitesize_core::zobrist::hash_from_scratch;
use bitesize_core::{
    Board, Coord, Move, generate_legal_moves, generate_quasi_legal_moves, is_attacked, is_in_check,
    is_legal_move,
};
use proptest::prelude::*;

const FIXTURES: [&str; 4] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
];

/// Play the legal move picked by each choice until the list runs out or the game ends.
fn playout(start: usize, choices: &[usize]) -> Vec<Board> {
    let mut board: Board = FIXTURES[start % FIXTURES.len()].parse().unwrap();
    let mut boards = vec![board];
    for &choice in choices {
        let moves = generate_legal_moves(&board);
        if moves.is_empty() {
            break;
        }
        board.execute_move(moves[choice % moves.len()]);
        boards.push(board);
    }
    boards
}

/// The reference answer: does playing `mv` leave the mover exposed?
fn leaves_king_safe(board: &Board, mv: Move) -> bool {
    let us = board.side_to_move();
    if let Move::Normal { to, .. } = mv {
        if board.at(to).kind() == Some(bitesize_core::PieceKind::King) {
            return false;
        }
    }
    if let Move::Castling {
        king_from, king_to, ..
    } = mv
    {
        let passed = Coord::new((king_from.file() + king_to.file()) / 2, king_from.rank());
        if is_attacked(board, king_from, us.flip()) || is_attacked(board, passed, us.flip()) {
            return false;
        }
    }
    !is_in_check(&board.with_move(mv), us)
}

fn choices_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 1..40)
}

proptest! {
    /// Incrementally maintained hash equals the hash recomputed from scratch.
    #[test]
    fn prop_hash_consistency(start in 0usize..4, choices in choices_strategy()) {
        for board in playout(start, &choices) {
            prop_assert_eq!(board.hash(), hash_from_scratch(&board));
        }
    }

    /// Fast and slow legality paths agree with playing the move out.
    #[test]
    fn prop_legality_agrees_with_king_safety(start in 0usize..4, choices in choices_strategy()) {
        for board in playout(start, &choices) {
            for mv in generate_quasi_legal_moves(&board) {
                let expected = leaves_king_safe(&board, mv);
                prop_assert_eq!(is_legal_move(&board, mv, true), expected, "fast path on {} for {}", board, mv);
                prop_assert_eq!(is_legal_move(&board, mv, false), expected, "slow path on {} for {}", board, mv);
            }
        }
    }

    /// Legal moves never leave the mover in check, and FEN round-trips keep the position.
    #[test]
    fn prop_legal_moves_are_legal(start in 0usize..4, choices in choices_strategy()) {
        for board in playout(start, &choices) {
            let us = board.side_to_move();
            for mv in generate_legal_moves(&board) {
                prop_assert!(!is_in_check(&board.with_move(mv), us));
            }
            let restored: Board = board.to_fen().parse().unwrap();
            prop_assert_eq!(restored.signature(), board.signature());
            prop_assert_eq!(restored.hash(), board.hash());
        }
    }

    /// Algebraic encoding recovers the exact move from the board it was played on.
    #[test]
    fn prop_uci_roundtrip(start in 0usize..4, choices in choices_strategy()) {
        for board in playout(start, &choices) {
            for mv in generate_legal_moves(&board) {
                prop_assert_eq!(Move::from_uci(&mv.to_uci(), &board), Some(mv));
            }
        }
    }
}
