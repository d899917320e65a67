//! In-place move execution with incremental Zobrist updates.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::zobrist;

impl Board {
    /// Apply `mv` in place. No legality check is made.
    ///
    /// Castling rights are only ever lost: by the side's own king moving, by a
    /// rook leaving its home square, or by a rook being captured there. The
    /// side to move is flipped unconditionally.
    pub fn execute_move(&mut self, mv: Move) {
        let us = self.side_to_move();
        let mut rights = self.castling();
        let mut resets_clock = false;

        self.set_hash(self.hash() ^ zobrist::castling_key(rights));
        self.set_en_passant(None);

        match mv {
            Move::Normal {
                from,
                to,
                promotion,
            } => {
                let moving = self.take(from);
                let captured = self.take(to);
                let is_pawn = moving.is_kind(PieceKind::Pawn);

                let placed = match promotion {
                    Some(kind) => Piece::new(kind, us),
                    None if is_pawn && to.rank() == us.promotion_rank() => {
                        Piece::new(PieceKind::Queen, us)
                    }
                    None => moving,
                };
                self.put(to, placed);

                if moving.is_kind(PieceKind::King) {
                    rights.revoke_color(us);
                }
                rights.revoke_rook_home(from);
                rights.revoke_rook_home(to);

                if is_pawn && (to.rank() - from.rank()).abs() == 2 {
                    self.set_en_passant(Some(Coord::new(from.file(), from.rank() + us.forward())));
                }
                resets_clock = is_pawn || !captured.is_empty();
            }
            Move::Castling {
                king_from,
                king_to,
                rook_from,
                rook_to,
            } => {
                let king = self.take(king_from);
                let rook = self.take(rook_from);
                self.put(king_to, king);
                self.put(rook_to, rook);
                rights.revoke_color(us);
            }
            Move::EnPassant { from, to, capture } => {
                let pawn = self.take(from);
                self.take(capture);
                self.put(to, pawn);
                resets_clock = true;
            }
        }

        self.set_castling(rights);
        self.set_hash(self.hash() ^ zobrist::castling_key(rights) ^ zobrist::WHITE_TO_MOVE);

        if resets_clock {
            self.set_halfmove_clock(0);
        } else {
            self.set_halfmove_clock(self.halfmove_clock().saturating_add(1));
        }
        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }
        self.set_side_to_move(us.flip());
    }

    /// Return a copy of this board with `mv` applied.
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.execute_move(mv);
        next
    }

    /// Remove and return the piece on `coord`, keeping the hash in step.
    fn take(&mut self, coord: Coord) -> Piece {
        let piece = self.at(coord);
        if !piece.is_empty() {
            self.set_hash(self.hash() ^ zobrist::piece_key(piece, coord));
            self.set(coord, Piece::EMPTY);
        }
        piece
    }

    /// Place `piece` on an empty `coord`, keeping the hash in step.
    fn put(&mut self, coord: Coord, piece: Piece) {
        if !piece.is_empty() {
            self.set_hash(self.hash() ^ zobrist::piece_key(piece, coord));
            self.set(coord, piece);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::castle_rights::CastleSide;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::zobrist::hash_from_scratch;

    fn sq(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let mut b = Board::starting_position();
        b.execute_move(Move::normal(sq("e2"), sq("e4")));
        assert_eq!(b.en_passant(), Some(sq("e3")));
        assert_eq!(b.side_to_move(), Color::Black);
        assert_eq!(b.at(sq("e4")), Piece::WHITE_PAWN);
        assert_eq!(b.at(sq("e2")), Piece::EMPTY);
        assert_eq!(b.hash(), hash_from_scratch(&b));

        b.execute_move(Move::normal(sq("g8"), sq("f6")));
        assert_eq!(b.en_passant(), None);
        assert_eq!(b.fullmove_number(), 2);
        assert_eq!(b.halfmove_clock(), 1);
    }

    #[test]
    fn side_flips_even_for_odd_moves() {
        let mut b = board("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        b.execute_move(Move::normal(sq("e8"), sq("d8")));
        assert_eq!(b.side_to_move(), Color::Black);
    }

    #[test]
    fn king_move_revokes_both_rights() {
        let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        b.execute_move(Move::normal(Coord::E1, Coord::F1));
        assert_eq!(b.castling().to_fen(), "kq");
        assert_eq!(b.hash(), hash_from_scratch(&b));
    }

    #[test]
    fn rook_move_revokes_one_right() {
        let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        b.execute_move(Move::normal(Coord::A1, sq("a4")));
        assert_eq!(b.castling().to_fen(), "Kkq");
    }

    #[test]
    fn capturing_rook_on_home_square_revokes_opponent_right() {
        let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        b.execute_move(Move::normal(Coord::H1, Coord::H8));
        assert_eq!(b.castling().to_fen(), "Qq");
        assert_eq!(b.halfmove_clock(), 0);
        assert_eq!(b.hash(), hash_from_scratch(&b));
    }

    #[test]
    fn rights_are_never_regained() {
        let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        b.execute_move(Move::normal(Coord::H1, sq("h4")));
        b.execute_move(Move::normal(Coord::E8, sq("e7")));
        b.execute_move(Move::normal(sq("h4"), Coord::H1));
        assert_eq!(b.castling().to_fen(), "Q");
    }

    #[test]
    fn castling_relocates_king_and_rook() {
        let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 5 1");
        b.execute_move(Move::castling(Color::White, CastleSide::KingSide));
        assert_eq!(b.at(Coord::G1), Piece::WHITE_KING);
        assert_eq!(b.at(Coord::F1), Piece::WHITE_ROOK);
        assert_eq!(b.at(Coord::E1), Piece::EMPTY);
        assert_eq!(b.at(Coord::H1), Piece::EMPTY);
        assert_eq!(b.castling().to_fen(), "kq");
        assert_eq!(b.halfmove_clock(), 6);

        b.execute_move(Move::castling(Color::Black, CastleSide::QueenSide));
        assert_eq!(b.at(Coord::C8), Piece::BLACK_KING);
        assert_eq!(b.at(Coord::D8), Piece::BLACK_ROOK);
        assert!(b.castling().is_empty());
        assert_eq!(b.hash(), hash_from_scratch(&b));
    }

    #[test]
    fn en_passant_removes_captured_pawn() {
        let mut b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        b.execute_move(Move::en_passant(sq("e5"), sq("d6")));
        assert_eq!(b.at(sq("d6")), Piece::WHITE_PAWN);
        assert_eq!(b.at(sq("d5")), Piece::EMPTY);
        assert_eq!(b.at(sq("e5")), Piece::EMPTY);
        assert_eq!(b.hash(), hash_from_scratch(&b));
    }

    #[test]
    fn promotion_by_capture_makes_own_queen() {
        let mut b = board("1r2k3/P7/8/8/8/8/6p1/4K2R b - - 0 1");
        b.execute_move(Move::promotion(sq("g2"), Coord::H1, PieceKind::Queen));
        assert_eq!(b.at(Coord::H1), Piece::BLACK_QUEEN);

        b.execute_move(Move::normal(sq("a7"), Coord::B8));
        assert_eq!(b.at(Coord::B8), Piece::WHITE_QUEEN);
        assert_eq!(b.hash(), hash_from_scratch(&b));
    }

    #[test]
    fn with_move_leaves_original_untouched() {
        let b = Board::starting_position();
        let next = b.with_move(Move::normal(sq("g1"), sq("f3")));
        assert_eq!(b, Board::starting_position());
        assert_eq!(next.at(sq("f3")), Piece::WHITE_KNIGHT);
    }
}
