//! King move and castling generation.

use crate::attacks::{KING_OFFSETS, is_in_check};
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;

use super::MoveList;
use super::knights::gen_leaper;

/// Generate one-step king moves.
pub(super) fn gen_king(board: &Board, from: Coord, us: Color, list: &mut MoveList) {
    gen_leaper(board, from, us, &KING_OFFSETS, list);
}

/// Generate castling moves for the king on `from`.
///
/// Requires the right, a king and rook on their home squares, empty squares
/// between them, and a king not currently in check. Attacks on the squares
/// the king crosses are left to the legality filter.
pub(super) fn gen_castling(board: &Board, from: Coord, us: Color, list: &mut MoveList) {
    let rights = board.castling();
    if rights.is_empty() || from != Coord::new(4, us.back_rank()) {
        return;
    }

    let mut in_check = None;
    for side in CastleSide::ALL {
        if !rights.has(us, side) {
            continue;
        }
        let rook_home = side.rook_home(us);
        if !board.at(rook_home).is(PieceKind::Rook, us) {
            continue;
        }
        let (low, high) = if rook_home.file() < from.file() {
            (rook_home.file() + 1, from.file())
        } else {
            (from.file() + 1, rook_home.file())
        };
        if !(low..high).all(|file| board.at(Coord::new(file, from.rank())).is_empty()) {
            continue;
        }
        if *in_check.get_or_insert_with(|| is_in_check(board, us)) {
            return;
        }
        list.push(Move::castling(us, side));
    }
}

#[cfg(test)]
mod tests {
    use super::{gen_castling, gen_king};
    use crate::board::Board;
    use crate::castle_rights::CastleSide;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::movegen::MoveList;

    #[test]
    fn king_steps() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let mut list = MoveList::new();
        gen_king(&board, Coord::E1, Color::White, &mut list);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn castling_requires_rook_on_home_square() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2R w KQ - 0 1".parse().unwrap();
        let mut list = MoveList::new();
        gen_castling(&board, Coord::E1, Color::White, &mut list);
        assert_eq!(list.as_slice(), &[Move::castling(Color::White, CastleSide::KingSide)]);
    }

    #[test]
    fn black_castles_on_rank_eight() {
        let board: Board = "r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1".parse().unwrap();
        let mut list = MoveList::new();
        gen_castling(&board, Coord::E8, Color::Black, &mut list);
        assert_eq!(list.len(), 2);
        assert!(list.contains(&Move::castling(Color::Black, CastleSide::QueenSide)));
    }

    #[test]
    fn no_rights_no_castling() {
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1".parse().unwrap();
        let mut list = MoveList::new();
        gen_castling(&board, Coord::E1, Color::White, &mut list);
        assert!(list.is_empty());
    }
}
