//! Castling rights: four independent flags.

use std::fmt;

use crate::color::Color;
use crate::coord::Coord;
use crate::error::FenError;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Home square of the rook that castles on this side.
    pub const fn rook_home(self, color: Color) -> Coord {
        let rank = color.back_rank();
        match self {
            CastleSide::KingSide => Coord::new(7, rank),
            CastleSide::QueenSide => Coord::new(0, rank),
        }
    }

    /// Destination of the king after castling on this side.
    pub const fn king_target(self, color: Color) -> Coord {
        let rank = color.back_rank();
        match self {
            CastleSide::KingSide => Coord::new(6, rank),
            CastleSide::QueenSide => Coord::new(2, rank),
        }
    }

    /// Destination of the rook after castling on this side.
    pub const fn rook_target(self, color: Color) -> Coord {
        let rank = color.back_rank();
        match self {
            CastleSide::KingSide => Coord::new(5, rank),
            CastleSide::QueenSide => Coord::new(3, rank),
        }
    }
}

/// Castling rights for both colors and both sides.
///
/// Rights are only ever revoked during play; nothing but FEN parsing grants them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    /// All castling rights.
    pub const ALL: CastleRights = CastleRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    /// Check whether `color` may still castle on `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_king_side,
            (Color::White, CastleSide::QueenSide) => self.white_queen_side,
            (Color::Black, CastleSide::KingSide) => self.black_king_side,
            (Color::Black, CastleSide::QueenSide) => self.black_queen_side,
        }
    }

    /// Drop the right for `color` on `side`.
    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_king_side = false,
            (Color::White, CastleSide::QueenSide) => self.white_queen_side = false,
            (Color::Black, CastleSide::KingSide) => self.black_king_side = false,
            (Color::Black, CastleSide::QueenSide) => self.black_queen_side = false,
        }
    }

    /// Drop both rights of `color`.
    #[inline]
    pub fn revoke_color(&mut self, color: Color) {
        self.revoke(color, CastleSide::KingSide);
        self.revoke(color, CastleSide::QueenSide);
    }

    /// Drop whichever right is tied to a rook standing on its home square `coord`.
    pub fn revoke_rook_home(&mut self, coord: Coord) {
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if side.rook_home(color) == coord {
                    self.revoke(color, side);
                }
            }
        }
    }

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        !(self.white_king_side || self.white_queen_side || self.black_king_side || self.black_queen_side)
    }

    /// Pack the four flags into bits 0-3 (WK, WQ, BK, BQ) for keyed tables.
    #[inline]
    pub const fn bits(self) -> u8 {
        (self.white_king_side as u8)
            | (self.white_queen_side as u8) << 1
            | (self.black_king_side as u8) << 2
            | (self.black_queen_side as u8) << 3
    }

    /// Parse the FEN castling field (e.g. "KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        let mut rights = CastleRights::NONE;
        if s == "-" {
            return Ok(rights);
        }
        for c in s.chars() {
            match c {
                'K' => rights.white_king_side = true,
                'Q' => rights.white_queen_side = true,
                'k' => rights.black_king_side = true,
                'q' => rights.black_queen_side = true,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            }
        }
        Ok(rights)
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        let mut s = String::with_capacity(4);
        for (flag, c) in [
            (self.white_king_side, 'K'),
            (self.white_queen_side, 'Q'),
            (self.black_king_side, 'k'),
            (self.black_queen_side, 'q'),
        ] {
            if flag {
                s.push(c);
            }
        }
        s
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
