//! Bishop, rook and queen move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::coord::Coord;

use super::MoveList;

/// Walk each ray from `from`: one quiet move per empty square, one capture
/// on the first enemy piece, nothing past a friendly piece.
pub(super) fn gen_sliders(board: &Board, from: Coord, us: Color, rays: &[(i8, i8)], list: &mut MoveList) {
    for &(df, dr) in rays {
        let mut to = from.offset(df, dr);
        while to.is_valid() {
            let target = board.at(to);
            if target.is_empty() {
                list.push(Move::normal(from, to));
            } else {
                if !target.is_color(us) {
                    list.push(Move::normal(from, to));
                }
                break;
            }
            to = to.offset(df, dr);
        }
    }
}
