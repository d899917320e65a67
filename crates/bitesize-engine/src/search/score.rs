//! Score constants, mate encoding, and protocol display.
//!
//! Scores are centipawns from White's point of view. A mate is encoded
//! relative to the ply of the mated position so that shorter mates always
//! compare as better for the winning side.

use std::fmt;

use bitesize_core::Color;

/// Score of a side that is mated at the root.
pub const MATE: i32 = 32_000;

/// Any score at least this far from zero is a mate score.
pub const MATE_THRESHOLD: i32 = 31_000;

/// Bound used for the initial alpha-beta window.
pub const INFINITY: i32 = 32_767;

/// Score for White mating Black in the position `ply` plies from the root.
#[inline]
pub const fn mate_by_white(ply: u32) -> i32 {
    MATE - ply as i32
}

/// Score for Black mating White in the position `ply` plies from the root.
#[inline]
pub const fn mate_by_black(ply: u32) -> i32 {
    -MATE + ply as i32
}

#[inline]
pub const fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_THRESHOLD
}

/// Full moves until mate, rounding up: `ceil((MATE - |score|) / 2)`.
#[inline]
pub const fn mate_moves(score: i32) -> i32 {
    (MATE - score.abs() + 1) / 2
}

/// A score as the protocol reports it, from the side to move's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UciScore {
    /// Centipawn advantage for the side to move.
    Centipawns(i32),
    /// Moves to mate; negative when the side to move is getting mated.
    Mate(i32),
}

impl UciScore {
    /// Convert a White-relative `score` for a position with `side_to_move` to move.
    pub fn new(score: i32, side_to_move: Color) -> UciScore {
        let relative = match side_to_move {
            Color::White => score,
            Color::Black => -score,
        };
        if is_mate_score(score) {
            let moves = mate_moves(score);
            UciScore::Mate(if relative > 0 { moves } else { -moves })
        } else {
            UciScore::Centipawns(relative)
        }
    }
}

impl fmt::Display for UciScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciScore::Centipawns(cp) => write!(f, "cp {cp}"),
            UciScore::Mate(moves) => write!(f, "mate {moves}"),
        }
    }
}
