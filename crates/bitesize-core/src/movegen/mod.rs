//! Quasi-legal move generation and the legality filter.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::{DIAGONAL, ORTHOGONAL, is_attacked, is_in_check};
use crate::board::Board;
use crate::chess_move::Move;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;

use self::king::{gen_castling, gen_king};
use self::knights::gen_knights;
use self::pawns::gen_pawns;
use self::sliders::gen_sliders;

/// Growable buffer of generated moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(48),
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Return a mutable slice, for in-place ordering.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves
    }

    /// Return `true` if `mv` is in the list.
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Iterate over the moves.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Generate every move obeying piece movement and occupancy rules for the side to move.
///
/// The mover's king may be left in check. Castling is only offered when the
/// right is held, the squares between king and rook are empty and the king is
/// not currently in check.
pub fn generate_quasi_legal_moves(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    let us = board.side_to_move();

    for (from, piece) in board.pieces() {
        if !piece.is_color(us) {
            continue;
        }
        match piece.kind() {
            Some(PieceKind::Pawn) => gen_pawns(board, from, us, &mut list),
            Some(PieceKind::Knight) => gen_knights(board, from, us, &mut list),
            Some(PieceKind::Bishop) => gen_sliders(board, from, us, &DIAGONAL, &mut list),
            Some(PieceKind::Rook) => gen_sliders(board, from, us, &ORTHOGONAL, &mut list),
            Some(PieceKind::Queen) => {
                gen_sliders(board, from, us, &ORTHOGONAL, &mut list);
                gen_sliders(board, from, us, &DIAGONAL, &mut list);
            }
            Some(PieceKind::King) => {
                gen_king(board, from, us, &mut list);
                gen_castling(board, from, us, &mut list);
            }
            None => {}
        }
    }

    list
}

/// Generate all legal moves for the current position.
pub fn generate_legal_moves(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    for mv in generate_quasi_legal_moves(board) {
        if is_legal_move(board, mv, true) {
            list.push(mv);
        }
    }
    list
}

/// Return `true` if the side to move has at least one legal move.
pub fn has_legal_move(board: &Board) -> bool {
    generate_quasi_legal_moves(board)
        .iter()
        .any(|&mv| is_legal_move(board, mv, true))
}

/// Decide whether `mv` is legal on `board`.
///
/// With `assume_quasi_legal` the caller vouches that `mv` came from
/// [`generate_quasi_legal_moves`] for this board; otherwise membership in that
/// set is checked first, which is the path for externally supplied moves.
pub fn is_legal_move(board: &Board, mv: Move, assume_quasi_legal: bool) -> bool {
    if !assume_quasi_legal && !generate_quasi_legal_moves(board).contains(&mv) {
        return false;
    }

    if let Move::Normal { to, .. } = mv {
        if board.at(to).is_kind(PieceKind::King) {
            return false;
        }
    }

    let us = board.side_to_move();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::castle_rights::CastleSide;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    fn sq(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn starting_position_20_moves() {
        let board = Board::starting_position();
        let moves = generate_legal_moves(&board);
        assert_eq!(
            moves.len(),
            20,
            "starting position should have 20 legal moves, got {}",
            moves.len()
        );
        assert_eq!(generate_quasi_legal_moves(&board).len(), 20);
    }

    #[test]
    fn pinned_knight_zero_moves() {
        // King on e1, knight on e2, rook on e8: the knight is pinned along the e-file
        let board = board("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let moves = generate_legal_moves(&board);
        assert!(moves.iter().all(|m| m.from() != sq("e2")), "pinned knight should have 0 moves");
        assert!(generate_quasi_legal_moves(&board).iter().any(|m| m.from() == sq("e2")));
    }

    #[test]
    fn double_check_king_only() {
        let board = board("4r1k1/8/8/8/8/5n2/8/4K3 w - - 0 1");
        let moves = generate_legal_moves(&board);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert!(
                board.at(mv.from()).is_kind(PieceKind::King),
                "in double check only king moves are legal, got {mv}"
            );
        }
    }

    #[test]
    fn castling_generated_when_path_clear() {
        let board = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let moves = generate_legal_moves(&board);
        assert!(moves.contains(&Move::castling(Color::White, CastleSide::KingSide)));
        assert!(moves.contains(&Move::castling(Color::White, CastleSide::QueenSide)));
    }

    #[test]
    fn castling_blocked_by_piece() {
        let board = board("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
        let quasi = generate_quasi_legal_moves(&board);
        assert!(!quasi.contains(&Move::castling(Color::White, CastleSide::QueenSide)));
        assert!(quasi.contains(&Move::castling(Color::White, CastleSide::KingSide)));
    }

    #[test]
    fn castling_not_out_of_check() {
        let board = board("4k3/8/8/8/8/8/8/R3K2r w Q - 0 1");
        let quasi = generate_quasi_legal_moves(&board);
        assert!(quasi.iter().all(|m| !m.is_castling()));
    }

    #[test]
    fn castling_not_through_check() {
        // Bishop on a6 attacks f1, so the king may not pass over it
        let board = board("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1");
        let kingside = Move::castling(Color::White, CastleSide::KingSide);
        assert!(generate_quasi_legal_moves(&board).contains(&kingside));
        assert!(!is_legal_move(&board, kingside, true));
        assert!(is_legal_move(&board, Move::castling(Color::White, CastleSide::QueenSide), true));
    }

    #[test]
    fn castling_not_into_check() {
        let board = board("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(!is_legal_move(&board, Move::castling(Color::White, CastleSide::KingSide), false));
    }

    #[test]
    fn queen_side_b_file_may_be_attacked() {
        // Rook on b8 hits b1, which the king never crosses
        let board = board("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(is_legal_move(&board, Move::castling(Color::White, CastleSide::QueenSide), false));
    }

    #[test]
    fn en_passant_legal() {
        let board = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let moves = generate_legal_moves(&board);
        let ep_moves: Vec<_> = moves.iter().filter(|m| m.is_en_passant()).collect();
        assert_eq!(ep_moves.len(), 1, "should have 1 en passant move");
    }

    #[test]
    fn en_passant_discovered_check_illegal() {
        // bxc6 would expose the king on a5 to the rook on h5
        let board = board("4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1");
        let moves = generate_legal_moves(&board);
        assert!(moves.iter().all(|m| !m.is_en_passant()), "EP should be illegal due to discovered check");
    }

    #[test]
    fn promotion_is_queen_only() {
        let board = board("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let moves = generate_legal_moves(&board);
        let promos: Vec<_> = moves.iter().filter(|m| m.promotion_kind().is_some()).collect();
        assert_eq!(promos.len(), 1);
        assert_eq!(promos[0].promotion_kind(), Some(PieceKind::Queen));
    }

    #[test]
    fn king_capture_rejected() {
        // Illegal position: Black is in check with White to move
        let board = board("8/4k2R/8/8/8/8/8/4K3 w - - 0 1");
        let capture = Move::normal(sq("h7"), sq("e7"));
        assert!(generate_quasi_legal_moves(&board).contains(&capture));
        assert!(!is_legal_move(&board, capture, true));
        assert!(!is_legal_move(&board, capture, false));
    }

    #[test]
    fn slow_path_rejects_blocked_queen() {
        let mut board = Board::starting_position();
        assert!(!is_legal_move(&board, Move::normal(sq("d1"), sq("h5")), false));

        board.execute_move(Move::normal(sq("d2"), sq("d4")));
        board.execute_move(Move::normal(sq("e7"), sq("e5")));
        assert!(!is_legal_move(&board, Move::normal(sq("d1"), sq("h5")), false));
        assert!(is_legal_move(&board, Move::normal(sq("d1"), sq("d3")), false));
    }

    #[test]
    fn slow_path_follows_the_actual_ray() {
        let mut board = Board::starting_position();
        board.execute_move(Move::normal(sq("e2"), sq("e4")));
        board.execute_move(Move::normal(sq("e7"), sq("e5")));
        // e2 is now vacant, so the diagonal is open
        assert!(is_legal_move(&board, Move::normal(sq("d1"), sq("h5")), false));
        assert!(!is_legal_move(&board, Move::normal(sq("d1"), sq("d3")), false));
    }

    #[test]
    fn slow_path_rejects_unreachable_squares() {
        let board = Board::starting_position();
        assert!(!is_legal_move(&board, Move::normal(sq("b1"), sq("b3")), false));
        assert!(!is_legal_move(&board, Move::normal(sq("e7"), sq("e5")), false));
    }

    #[test]
    fn has_legal_move_detects_mate_and_stalemate() {
        let mate = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(!has_legal_move(&mate));
        let stalemate = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!has_legal_move(&stalemate));
        assert!(has_legal_move(&Board::starting_position()));
    }
}
