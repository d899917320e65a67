//! Per-piece contributions to the incremental evaluation counters.
//!
//! Every counter is a plain sum over pieces, so a move's effect is the
//! contribution of whatever left a square minus that of whatever arrived.

use bitesize_core::{Color, Coord, Piece, PieceKind};

/// Centipawns per material point.
pub const CENTIPAWNS_PER_POINT: i32 = 100;

/// Material points for `piece` (pawn 1, knight 3, bishop 3, rook 5, queen 9, king 4).
#[inline]
pub fn material(piece: Piece) -> i32 {
    piece.kind().map_or(0, PieceKind::value)
}

/// 1 if `piece` is a knight, bishop, rook or queen standing off its own back rank.
///
/// Pawns and kings never count as developed.
#[inline]
pub fn development(piece: Piece, coord: Coord) -> i32 {
    match (piece.kind(), piece.color()) {
        (Some(PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen), Some(color)) => {
            i32::from(coord.rank() != color.back_rank())
        }
        _ => 0,
    }
}

/// Ranks a pawn has travelled from its starting rank.
#[inline]
pub fn pawn_advancement(piece: Piece, coord: Coord) -> i32 {
    match (piece.kind(), piece.color()) {
        (Some(PieceKind::Pawn), Some(color)) => {
            i32::from((coord.rank() - color.pawn_rank()) * color.forward())
        }
        _ => 0,
    }
}

/// Index of the side owning `piece`, or `None` for an empty square.
#[inline]
pub(crate) fn side(piece: Piece) -> Option<usize> {
    piece.color().map(Color::index)
}
