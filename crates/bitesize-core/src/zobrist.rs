//! 30-bit Zobrist hashing keys for transposition and repetition detection.
//!
//! En passant is deliberately left out of the hash; the board signature
//! carries it for collision verification.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece::Piece;

/// Every key is truncated to the low 30 bits.
pub const HASH_MASK: u32 = 0x3FFF_FFFF;

/// Zobrist key for each (piece, square) pair. Indexed by `[Piece::index()][Coord::index()]`.
pub(crate) static PIECE_SQUARE: [[u32; 64]; 12] = {
    let mut table = [[0u32; 64]; 12];
    let mut state = SEED;
    let mut piece = 0;
    while piece < 12 {
        let mut sq = 0;
        while sq < 64 {
            let (val, next) = xorshift64(state);
            table[piece][sq] = truncate(val);
            state = next;
            sq += 1;
        }
        piece += 1;
    }
    table
};

/// Zobrist key XORed when White is the side to move.
pub(crate) static WHITE_TO_MOVE: u32 = {
    let mut state = SEED;
    // Skip the 12*64 = 768 piece-square keys
    let mut i = 0;
    while i < 768 {
        let (_, next) = xorshift64(state);
        state = next;
        i += 1;
    }
    let (val, _) = xorshift64(state);
    truncate(val)
};

/// Zobrist keys for castling configurations. Indexed by `CastleRights::bits() as usize` (0..16).
pub(crate) static CASTLING: [u32; 16] = {
    let mut table = [0u32; 16];
    let mut state = SEED;
    // Skip 768 + 1 = 769 previous keys
    let mut i = 0;
    while i < 769 {
        let (_, next) = xorshift64(state);
        state = next;
        i += 1;
    }
    let mut idx = 0;
    while idx < 16 {
        let (val, next) = xorshift64(state);
        table[idx] = truncate(val);
        state = next;
        idx += 1;
    }
    table
};

const SEED: u64 = 0x4249_5445_5349_5a45; // "BITESIZE"

/// Xorshift64 PRNG. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

/// Keep the high-quality upper bits of a xorshift output, masked to 30 bits.
const fn truncate(val: u64) -> u32 {
    (val >> 32) as u32 & HASH_MASK
}

/// Key for `piece` standing on `coord`; zero for the empty sentinel or off-board squares.
#[inline]
pub(crate) fn piece_key(piece: Piece, coord: Coord) -> u32 {
    match piece.index() {
        Some(index) if coord.is_valid() => PIECE_SQUARE[index][coord.index()],
        _ => 0,
    }
}

#[inline]
pub(crate) fn castling_key(rights: CastleRights) -> u32 {
    CASTLING[rights.bits() as usize]
}

/// Compute the Zobrist hash from scratch for the given board.
pub fn hash_from_scratch(board: &Board) -> u32 {
    let mut hash = board
        .pieces()
        .fold(0u32, |acc, (coord, piece)| acc ^ piece_key(piece, coord));

    if board.side_to_move() == Color::White {
        hash ^= WHITE_TO_MOVE;
    }
    hash ^= castling_key(board.castling());

    hash
}
