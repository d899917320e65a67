//! Chess moves as a closed tagged union, plus the algebraic move encoding.

use std::fmt;

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;

/// A chess move.
///
/// Every consumer matches on the variant, so adding a move kind forces
/// notation, legality and evaluation to follow.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// A quiet move or capture, optionally promoting a pawn.
    Normal {
        from: Coord,
        to: Coord,
        promotion: Option<PieceKind>,
    },
    /// King and rook relocation.
    Castling {
        king_from: Coord,
        king_to: Coord,
        rook_from: Coord,
        rook_to: Coord,
    },
    /// Pawn capture onto the en passant target; the victim stands on `capture`.
    EnPassant { from: Coord, to: Coord, capture: Coord },
}

impl Move {
    /// Create a non-promoting normal move.
    #[inline]
    pub const fn normal(from: Coord, to: Coord) -> Move {
        Move::Normal {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promoting pawn move.
    #[inline]
    pub const fn promotion(from: Coord, to: Coord, kind: PieceKind) -> Move {
        Move::Normal {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Create the castling move for `color` on `side` from the standard home squares.
    pub const fn castling(color: Color, side: CastleSide) -> Move {
        let rank = color.back_rank();
        Move::Castling {
            king_from: Coord::new(4, rank),
            king_to: side.king_target(color),
            rook_from: side.rook_home(color),
            rook_to: side.rook_target(color),
        }
    }

    /// Create an en passant capture; the captured pawn shares `from`'s rank and `to`'s file.
    #[inline]
    pub const fn en_passant(from: Coord, to: Coord) -> Move {
        Move::EnPassant {
            from,
            to,
            capture: Coord::new(to.file(), from.rank()),
        }
    }

    /// Origin square (the king's, for castling).
    #[inline]
    pub const fn from(self) -> Coord {
        match self {
            Move::Normal { from, .. } | Move::EnPassant { from, .. } => from,
            Move::Castling { king_from, .. } => king_from,
        }
    }

    /// Destination square (the king's, for castling).
    #[inline]
    pub const fn to(self) -> Coord {
        match self {
            Move::Normal { to, .. } | Move::EnPassant { to, .. } => to,
            Move::Castling { king_to, .. } => king_to,
        }
    }

    /// Promotion piece, if any.
    #[inline]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        match self {
            Move::Normal { promotion, .. } => promotion,
            Move::Castling { .. } | Move::EnPassant { .. } => None,
        }
    }

    /// Return `true` for castling moves.
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, Move::Castling { .. })
    }

    /// Return `true` for en passant captures.
    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    /// Square holding the piece this move captures on `board`, if it captures.
    pub fn capture_square(self, board: &Board) -> Option<Coord> {
        match self {
            Move::Normal { to, .. } => (!board.at(to).is_empty()).then_some(to),
            Move::EnPassant { capture, .. } => Some(capture),
            Move::Castling { .. } => None,
        }
    }

    /// Algebraic encoding `<from><to>[promo]`; castling uses the king's squares.
    pub fn to_uci(self) -> String {
        self.to_string()
    }

    /// Decode `<from><to>[promo]` against `board`, recovering the move variant.
    ///
    /// A king travelling two files is castling, a pawn moving diagonally onto
    /// the en passant target is an en passant capture, and a pawn reaching the
    /// last rank without a suffix promotes to a queen. Returns `None` for
    /// malformed text or an empty origin square; legality is not checked.
    pub fn from_uci(text: &str, board: &Board) -> Option<Move> {
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return None;
        }
        let from = Coord::from_algebraic(&text[0..2])?;
        let to = Coord::from_algebraic(&text[2..4])?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_fen_char(c) {
                Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen))
                    if c.is_ascii_lowercase() =>
                {
                    Some(kind)
                }
                _ => return None,
            },
        };

        let piece = board.at(from);
        let color = piece.color()?;
        let kind = piece.kind()?;

        if kind == PieceKind::King && from.rank() == to.rank() && (to.file() - from.file()).abs() == 2 {
            let side = if to.file() > from.file() {
                CastleSide::KingSide
            } else {
                CastleSide::QueenSide
            };
            return Some(Move::Castling {
                king_from: from,
                king_to: to,
                rook_from: Coord::new(side.rook_home(color).file(), from.rank()),
                rook_to: Coord::new(side.rook_target(color).file(), from.rank()),
            });
        }

        if kind == PieceKind::Pawn {
            if from.file() != to.file() && board.en_passant() == Some(to) && board.at(to).is_empty() {
                return Some(Move::en_passant(from, to));
            }
            if to.rank() == color.promotion_rank() {
                return Some(Move::promotion(from, to, promotion.unwrap_or(PieceKind::Queen)));
            }
        }

        Some(Move::Normal { from, to, promotion })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(kind) = self.promotion_kind() {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Move::Normal { .. } => "Normal",
            Move::Castling { .. } => "Castling",
            Move::EnPassant { .. } => "EnPassant",
        };
        write!(f, "Move({self} kind={kind})")
    }
}
