//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;

use super::MoveList;

/// Generate pushes, captures and en passant for the pawn on `from`.
///
/// Reaching the last rank always promotes to a queen.
pub(super) fn gen_pawns(board: &Board, from: Coord, us: Color, list: &mut MoveList) {
    let forward = us.forward();

    let one = from.offset(0, forward);
    if board.is_empty_at(one) {
        push_pawn_move(from, one, us, list);
        if from.rank() == us.pawn_rank() {
            let two = one.offset(0, forward);
            if board.is_empty_at(two) {
                list.push(Move::normal(from, two));
            }
        }
    }

    for df in [-1, 1] {
        let to = from.offset(df, forward);
        if !to.is_valid() {
            continue;
        }
        let target = board.at(to);
        if target.is_color(us.flip()) {
            push_pawn_move(from, to, us, list);
        } else if target.is_empty() && board.en_passant() == Some(to) {
            let mv = Move::en_passant(from, to);
            if let Move::EnPassant { capture, .. } = mv {
                if board.at(capture).is(PieceKind::Pawn, us.flip()) {
                    list.push(mv);
                }
            }
        }
    }
}

fn push_pawn_move(from: Coord, to: Coord, us: Color, list: &mut MoveList) {
    if to.rank() == us.promotion_rank() {
        list.push(Move::promotion(from, to, PieceKind::Queen));
    } else {
        list.push(Move::normal(from, to));
    }
}
