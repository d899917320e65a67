//! Colored chess piece, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece (or an empty square), bit-packed into a single byte.
///
/// Bit layout:
/// - low nibble: [`PieceKind`] (1-6)
/// - high nibble: [`Color`] flag (`0x10` White, `0x20` Black)
///
/// The raw value 0 is [`Piece::EMPTY`], which has neither a kind nor a color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    /// Number of real (non-empty) pieces.
    pub const COUNT: usize = 12;

    /// Empty-square sentinel.
    pub const EMPTY: Piece = Piece(0);

    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All 12 real pieces: White pieces (indices 0-5) followed by Black pieces (6-11).
    pub const ALL: [Piece; 12] = [
        Self::WHITE_PAWN,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_ROOK,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_ROOK,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece(color.bits() | kind as u8)
    }

    /// Parse a FEN character. Uppercase is White, lowercase is Black.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Return `true` for the empty-square sentinel.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return the piece kind, or `None` for an empty square.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_bits(self.0 & 0x0F)
    }

    /// Return the color, or `None` for an empty square.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self.0 & 0xF0 {
            0x10 => Some(Color::White),
            0x20 => Some(Color::Black),
            _ => None,
        }
    }

    /// Return `true` if this is a real piece of `color`.
    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        self.0 & 0xF0 == color.bits()
    }

    /// Return `true` if this is a real piece of `kind`.
    #[inline]
    pub const fn is_kind(self, kind: PieceKind) -> bool {
        self.0 & 0x0F == kind as u8
    }

    /// Return `true` if this piece is exactly `kind` of `color`.
    #[inline]
    pub const fn is(self, kind: PieceKind, color: Color) -> bool {
        self.0 == Piece::new(kind, color).0
    }

    /// Contiguous index 0-11 for keyed tables, or `None` for an empty square.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match (self.kind(), self.color()) {
            (Some(kind), Some(color)) => Some(color.index() * 6 + kind.index()),
            _ => None,
        }
    }

    /// Return the raw packed byte.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// FEN character: uppercase for White, lowercase for Black, `.` when empty.
    pub fn fen_char(self) -> char {
        match (self.kind(), self.color()) {
            (Some(kind), Some(Color::White)) => kind.fen_char().to_ascii_uppercase(),
            (Some(kind), Some(Color::Black)) => kind.fen_char(),
            _ => '.',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind(), self.color()) {
            (Some(kind), Some(color)) => {
                let prefix = match color {
                    Color::White => 'W',
                    Color::Black => 'B',
                };
                write!(f, "{}{}", prefix, kind.fen_char().to_ascii_uppercase())
            }
            _ => write!(f, "--"),
        }
    }
}
