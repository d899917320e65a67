//! Attack detection by walking rays outward from the target square.

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;

/// Rook directions as `(file, rank)` steps.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Bishop directions as `(file, rank)` steps.
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Return `true` if any piece of `by` attacks `target`.
///
/// Each ray stops at its first occupied square, so a query touches at most
/// the squares visible from `target` plus the fixed leaper offsets.
pub fn is_attacked(board: &Board, target: Coord, by: Color) -> bool {
    if slider_on_rays(board, target, by, &ORTHOGONAL, PieceKind::Rook)
        || slider_on_rays(board, target, by, &DIAGONAL, PieceKind::Bishop)
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(df, dr)| board.at(target.offset(df, dr)).is(PieceKind::Knight, by))
    {
        return true;
    }

    // A pawn of `by` attacks diagonally forward, so look one rank behind the target.
    let behind = -by.forward();
    if [-1, 1]
        .iter()
        .any(|&df| board.at(target.offset(df, behind)).is(PieceKind::Pawn, by))
    {
        return true;
    }

    KING_OFFSETS
        .iter()
        .any(|&(df, dr)| board.at(target.offset(df, dr)).is(PieceKind::King, by))
}

/// Return `true` if `color`'s king is attacked. A board without that king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_coord(color)
        .is_some_and(|king| is_attacked(board, king, color.flip()))
}

/// Walk each ray until the first piece; report whether it is a `by` slider of
/// `kind` or a queen.
fn slider_on_rays(board: &Board, target: Coord, by: Color, rays: &[(i8, i8)], kind: PieceKind) -> bool {
    for &(df, dr) in rays {
        let mut coord = target.offset(df, dr);
        while coord.is_valid() {
            let piece = board.at(coord);
            if !piece.is_empty() {
                if piece.is(kind, by) || piece.is(PieceKind::Queen, by) {
                    return true;
                }
                break;
            }
            coord = coord.offset(df, dr);
        }
    }
    false
}
