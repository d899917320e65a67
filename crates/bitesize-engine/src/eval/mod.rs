//! Incremental static evaluation.
//!
//! An [`EvalNode`] pairs a board with per-side counters that are updated by
//! the delta each move applies instead of being recomputed at every leaf.

pub mod material;
pub mod params;
pub mod pst;

use bitesize_core::{Board, Color, Coord, Move, Piece};

use self::material::{CENTIPAWNS_PER_POINT, development, material, pawn_advancement, side};
pub use self::params::EvalParams;
use self::pst::pst_value;

/// A board plus its incrementally maintained evaluation counters.
///
/// Counters are indexed by [`Color::index()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalNode {
    board: Board,
    material: [i32; Color::COUNT],
    development: [i32; Color::COUNT],
    pawn_advancement: [i32; Color::COUNT],
    pst: [i32; Color::COUNT],
}

impl EvalNode {
    /// Build a node from `board`, computing every counter from scratch.
    pub fn new(board: Board) -> EvalNode {
        let mut node = EvalNode {
            board,
            material: [0; Color::COUNT],
            development: [0; Color::COUNT],
            pawn_advancement: [0; Color::COUNT],
            pst: [0; Color::COUNT],
        };
        for (coord, piece) in board.pieces() {
            node.account(piece, coord, 1);
        }
        node
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Material points held by `color`.
    #[inline]
    pub fn material(&self, color: Color) -> i32 {
        self.material[color.index()]
    }

    /// Knights, bishops, rooks and queens of `color` off their back rank.
    #[inline]
    pub fn development(&self, color: Color) -> i32 {
        self.development[color.index()]
    }

    /// Total ranks travelled by `color`'s pawns.
    #[inline]
    pub fn pawn_advancement(&self, color: Color) -> i32 {
        self.pawn_advancement[color.index()]
    }

    /// Piece-square bonus collected by `color`.
    #[inline]
    pub fn pst(&self, color: Color) -> i32 {
        self.pst[color.index()]
    }

    /// Apply `mv` to the board and update the counters by the squares it touched.
    pub fn apply(&mut self, mv: Move) {
        let touched = touched_squares(mv);
        let touched = touched.iter().flatten();

        for &coord in touched.clone() {
            self.account(self.board.at(coord), coord, -1);
        }
        self.board.execute_move(mv);
        for &coord in touched {
            self.account(self.board.at(coord), coord, 1);
        }
    }

    /// Return a copy of this node with `mv` applied.
    pub fn child(&self, mv: Move) -> EvalNode {
        let mut next = self.clone();
        next.apply(mv);
        next
    }

    /// Static score in centipawns, positive when White stands better.
    pub fn evaluate(&self, params: &EvalParams) -> i32 {
        let (w, b) = (Color::White.index(), Color::Black.index());
        let mut score = CENTIPAWNS_PER_POINT * (self.material[w] - self.material[b])
            + params.development_weight * (self.development[w] - self.development[b])
            + params.pawn_advancement_weight * (self.pawn_advancement[w] - self.pawn_advancement[b]);
        if params.piece_square_tables {
            score += self.pst[w] - self.pst[b];
        }
        score
    }

    /// Add (`sign = 1`) or remove (`sign = -1`) the contribution of `piece` on `coord`.
    fn account(&mut self, piece: Piece, coord: Coord, sign: i32) {
        let Some(side) = side(piece) else {
            return;
        };
        self.material[side] += sign * material(piece);
        self.development[side] += sign * development(piece, coord);
        self.pawn_advancement[side] += sign * pawn_advancement(piece, coord);
        self.pst[side] += sign * pst_value(piece, coord);
    }
}

impl From<Board> for EvalNode {
    fn from(board: Board) -> EvalNode {
        EvalNode::new(board)
    }
}

/// Every square whose occupant `mv` can change.
fn touched_squares(mv: Move) -> [Option<Coord>; 4] {
    match mv {
        Move::Normal { from, to, .. } => [Some(from), Some(to), None, None],
        Move::Castling {
            king_from,
            king_to,
            rook_from,
            rook_to,
        } => [Some(king_from), Some(king_to), Some(rook_from), Some(rook_to)],
        Move::EnPassant { from, to, capture } => [Some(from), Some(to), Some(capture), None],
    }
}

#[cfg(test)]
mod tests {
    use super::{EvalNode, EvalParams};
    use bitesize_core::{Board, CastleSide, Color, Coord, Move, PieceKind};

    fn sq(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    fn assert_matches_scratch(node: &EvalNode) {
        let fresh = EvalNode::new(*node.board());
        assert_eq!(node, &fresh, "incremental counters drifted on {}", node.board());
    }

    #[test]
    fn starting_position_is_balanced() {
        let node = EvalNode::new(Board::starting_position());
        assert_eq!(node.material(Color::White), 8 + 6 + 6 + 10 + 9 + 4);
        assert_eq!(node.material(Color::White), node.material(Color::Black));
        assert_eq!(node.development(Color::White), 0);
        assert_eq!(node.evaluate(&EvalParams::default()), 0);
    }

    #[test]
    fn development_counts_a_fifth_of_a_point() {
        let node = EvalNode::new(Board::starting_position()).child(Move::normal(sq("g1"), sq("f3")));
        assert_eq!(node.development(Color::White), 1);
        assert_eq!(node.evaluate(&EvalParams::default()), 20);
        assert_matches_scratch(&node);
    }

    #[test]
    fn capture_removes_victim() {
        let board: Board = "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1".parse().unwrap();
        let node = EvalNode::new(board).child(Move::normal(sq("d1"), sq("d5")));
        assert_eq!(node.material(Color::Black), 4);
        assert_eq!(node.material(Color::White), 9);
        assert_matches_scratch(&node);
    }

    #[test]
    fn promotion_swaps_pawn_for_queen() {
        let board: Board = "1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let node = EvalNode::new(board).child(Move::promotion(sq("a7"), sq("b8"), PieceKind::Queen));
        assert_eq!(node.material(Color::White), 13);
        assert_eq!(node.material(Color::Black), 4);
        assert_eq!(node.pawn_advancement(Color::White), 0);
        assert_matches_scratch(&node);
    }

    #[test]
    fn castling_and_en_passant_stay_in_sync() {
        let board: Board = "r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1".parse().unwrap();
        let node = EvalNode::new(board).child(Move::en_passant(sq("e5"), sq("d6")));
        assert_matches_scratch(&node);
        let node = node.child(Move::castling(Color::Black, CastleSide::KingSide));
        assert_eq!(node.development(Color::Black), 0);
        assert_matches_scratch(&node);
    }

    #[test]
    fn optional_terms() {
        let board: Board = "4k3/8/8/8/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        let node = EvalNode::new(board);
        let params = EvalParams {
            pawn_advancement_weight: 10,
            ..EvalParams::default()
        };
        assert_eq!(node.evaluate(&params), 100 + 20);

        let with_tables = EvalParams {
            piece_square_tables: true,
            ..EvalParams::default()
        };
        assert_eq!(node.evaluate(&with_tables), 100 + node.pst(Color::White) - node.pst(Color::Black));
    }
}
