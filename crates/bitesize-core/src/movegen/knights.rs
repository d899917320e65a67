//! Knight move generation.

use crate::attacks::KNIGHT_OFFSETS;
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::coord::Coord;

use super::MoveList;

/// Generate moves for the knight on `from`.
pub(super) fn gen_knights(board: &Board, from: Coord, us: Color, list: &mut MoveList) {
    gen_leaper(board, from, us, &KNIGHT_OFFSETS, list);
}

/// Push every offset landing on the board and not on a friendly piece.
pub(super) fn gen_leaper(board: &Board, from: Coord, us: Color, offsets: &[(i8, i8)], list: &mut MoveList) {
    for &(df, dr) in offsets {
        let to = from.offset(df, dr);
        if to.is_valid() && !board.at(to).is_color(us) {
            list.push(Move::normal(from, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gen_knights;
    use crate::board::Board;
    use crate::coord::Coord;
    use crate::movegen::MoveList;

    #[test]
    fn corner_knight_has_two_moves() {
        let board: Board = "4k3/8/8/8/8/8/8/N3K3 w - - 0 1".parse().unwrap();
        let mut list = MoveList::new();
        gen_knights(&board, Coord::A1, board.side_to_move(), &mut list);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn friendly_squares_are_skipped() {
        let board = Board::starting_position();
        let mut list = MoveList::new();
        gen_knights(&board, Coord::B1, board.side_to_move(), &mut list);
        assert_eq!(list.len(), 2, "b1 knight reaches a3 and c3 only");
    }
}
