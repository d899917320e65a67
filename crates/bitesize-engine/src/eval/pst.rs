//! Piece-square tables for kings, rooks and knights.
//!
//! All tables are defined from White's perspective in LERF order:
//! index 0 = A1, index 7 = H1, index 8 = A2, ..., index 63 = H8.
//! Black looks up the square mirrored across the middle rank.

use bitesize_core::{Color, Coord, Piece, PieceKind};

/// Kings are rewarded for staying on the back rank, most of all in the corners.
#[rustfmt::skip]
const KING_PST: [i32; 64] = [
    // Rank 1
     20,  30,  10,   0,   0,  10,  30,  20,
    // Rank 2
     20,  20,   0,   0,   0,   0,  20,  20,
    // Rank 3
    -10, -20, -20, -20, -20, -20, -20, -10,
    // Rank 4
    -20, -30, -30, -40, -40, -30, -30, -20,
    // Rank 5
    -30, -40, -40, -50, -50, -40, -40, -30,
    // Rank 6
    -30, -40, -40, -50, -50, -40, -40, -30,
    // Rank 7
    -30, -40, -40, -50, -50, -40, -40, -30,
    // Rank 8
    -30, -40, -40, -50, -50, -40, -40, -30,
];

/// Rooks prefer the centre files and the seventh rank.
#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
    // Rank 1
      0,   0,   5,  10,  10,   5,   0,   0,
    // Rank 2
     -5,   0,   0,   5,   5,   0,   0,  -5,
    // Rank 3
     -5,   0,   0,   5,   5,   0,   0,  -5,
    // Rank 4
     -5,   0,   0,   5,   5,   0,   0,  -5,
    // Rank 5
     -5,   0,   0,   5,   5,   0,   0,  -5,
    // Rank 6
     -5,   0,   0,   5,   5,   0,   0,  -5,
    // Rank 7
      5,  10,  10,  15,  15,  10,  10,   5,
    // Rank 8
      0,   0,   0,   5,   5,   0,   0,   0,
];

/// Knights prefer central squares.
#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    // Rank 1
    -50, -40, -30, -30, -30, -30, -40, -50,
    // Rank 2
    -40, -20,   0,   5,   5,   0, -20, -40,
    // Rank 3
    -30,   5,  10,  15,  15,  10,   5, -30,
    // Rank 4
    -30,   0,  15,  20,  20,  15,   0, -30,
    // Rank 5
    -30,   5,  15,  20,  20,  15,   5, -30,
    // Rank 6
    -30,   0,  10,  15,  15,  10,   0, -30,
    // Rank 7
    -40, -20,   0,   0,   0,   0, -20, -40,
    // Rank 8
    -50, -40, -30, -30, -30, -30, -40, -50,
];

/// Positional bonus in centipawns for `piece` on `coord`, from its owner's point of view.
///
/// Pieces without a table score 0.
pub fn pst_value(piece: Piece, coord: Coord) -> i32 {
    let (Some(kind), Some(color)) = (piece.kind(), piece.color()) else {
        return 0;
    };
    let table = match kind {
        PieceKind::King => &KING_PST,
        PieceKind::Rook => &ROOK_PST,
        PieceKind::Knight => &KNIGHT_PST,
        PieceKind::Pawn | PieceKind::Bishop | PieceKind::Queen => return 0,
    };
    let relative = match color {
        Color::White => coord,
        Color::Black => Coord::new(coord.file(), 7 - coord.rank()),
    };
    table[relative.index()]
}
