//! The chess board: piece placement, side to move, castling, en passant, and move counters.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::zobrist;

/// Complete chess position state.
///
/// Cloning yields a fully independent board. Nothing here enforces that each
/// side has exactly one king; callers keep that invariant by only applying
/// legal moves.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Piece on each square, indexed by `rank * 8 + file`.
    squares: [Piece; 64],
    /// Which side moves next.
    side_to_move: Color,
    /// Current castling rights.
    castling: CastleRights,
    /// En passant target square, if any.
    en_passant: Option<Coord>,
    /// Halfmove clock for the fifty-move rule.
    halfmove_clock: u16,
    /// Fullmove number (starts at 1, incremented after Black moves).
    fullmove_number: u16,
    /// 30-bit Zobrist hash of the position.
    hash: u32,
}

/// Full position state used to confirm that two boards with equal hashes
/// really are the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    squares: [Piece; 64],
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Coord>,
}

impl Board {
    /// Return a board with no pieces, White to move and no castling rights.
    pub fn empty() -> Board {
        let mut board = Board {
            squares: [Piece::EMPTY; 64],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
        };
        board.hash = zobrist::hash_from_scratch(&board);
        board
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                let file = file as i8;
                board.set(Coord::new(file, color.back_rank()), Piece::new(kind, color));
                board.set(
                    Coord::new(file, color.pawn_rank()),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board.castling = CastleRights::ALL;
        board.hash = zobrist::hash_from_scratch(&board);
        board
    }

    /// Return the piece on `coord`, or [`Piece::EMPTY`] when `coord` is off the board.
    #[inline]
    pub fn at(&self, coord: Coord) -> Piece {
        if coord.is_valid() {
            self.squares[coord.index()]
        } else {
            Piece::EMPTY
        }
    }

    /// Return `true` if `coord` is on the board and holds no piece.
    #[inline]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        coord.is_valid() && self.squares[coord.index()].is_empty()
    }

    /// Iterate over every occupied square with its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_empty())
            .map(|(index, &piece)| (Coord::from_index(index), piece))
    }

    /// Return the square of `color`'s king, if it is on the board.
    pub fn king_coord(&self, color: Color) -> Option<Coord> {
        let king = Piece::new(PieceKind::King, color);
        self.squares
            .iter()
            .position(|&piece| piece == king)
            .map(Coord::from_index)
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Coord> {
        self.en_passant
    }

    /// Return the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Return the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Return the 30-bit Zobrist hash of the position.
    #[inline]
    pub fn hash(&self) -> u32 {
        self.hash
    }

    /// Capture the full state that a hash stands for.
    pub fn signature(&self) -> Signature {
        Signature {
            squares: self.squares,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
        }
    }

    /// Place `piece` on `coord` without touching the hash. Off-board writes are ignored.
    #[inline]
    pub(crate) fn set(&mut self, coord: Coord, piece: Piece) {
        if coord.is_valid() {
            self.squares[coord.index()] = piece;
        }
    }

    #[inline]
    pub(crate) fn set_hash(&mut self, hash: u32) {
        self.hash = hash;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, coord: Option<Coord>) {
        self.en_passant = coord;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (0i8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0i8..8 {
                let c = board.at(Coord::new(file, rank)).fen_char();
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
