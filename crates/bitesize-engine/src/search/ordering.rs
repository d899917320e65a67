//! Move ordering: transposition-table move first, then MVV-LVA captures, then quiet moves.

use std::cmp::Reverse;

use bitesize_core::{Board, Move, MoveList};

/// Priority given to the move remembered by the transposition table.
const TT_MOVE_SCORE: i32 = i32::MAX;

/// Weight of the victim's value relative to the attacker's.
const VICTIM_WEIGHT: i32 = 1000;

/// Ordering score for `mv`: most valuable victim first, cheapest attacker
/// breaking ties. Quiet moves score 0, below every capture.
pub fn score_move(board: &Board, mv: Move) -> i32 {
    let Some(capture) = mv.capture_square(board) else {
        return 0;
    };
    let victim = board.at(capture).kind().map_or(0, |kind| kind.value());
    let attacker = board.at(mv.from()).kind().map_or(0, |kind| kind.value());
    victim * VICTIM_WEIGHT - attacker
}

/// Sort `moves` best-first. The sort is stable, so equally scored moves
/// keep generation order.
pub fn order_moves(board: &Board, moves: &mut MoveList, tt_move: Option<Move>) {
    moves.as_mut_slice().sort_by_key(|&mv| {
        if Some(mv) == tt_move {
            Reverse(TT_MOVE_SCORE)
        } else {
            Reverse(score_move(board, mv))
        }
    });
}
