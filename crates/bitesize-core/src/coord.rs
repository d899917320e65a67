//! Board coordinates as (file, rank) pairs.

use std::fmt;

/// A board coordinate: file 0-7 (a-h) and rank 0-7 (1-8).
///
/// Values outside 0-7 are representable so that ray walks and offset tables
/// can step off the board; [`Coord::is_valid`] tells the two apart and
/// [`Board::at`](crate::Board::at) answers off-board queries with the empty
/// sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    file: i8,
    rank: i8,
}

impl Coord {
    /// Total number of on-board coordinates.
    pub const COUNT: usize = 64;

    /// Create a coordinate from a file and a rank (not bounds checked).
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Coord {
        Coord { file, rank }
    }

    /// Create a coordinate from a board index (`rank * 8 + file`).
    #[inline]
    pub const fn from_index(index: usize) -> Coord {
        debug_assert!(index < 64);
        Coord::new((index % 8) as i8, (index / 8) as i8)
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file_byte, rank_byte) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }
        Some(Coord::new((file_byte - b'a') as i8, (rank_byte - b'1') as i8))
    }

    /// Return the file (0 = a).
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Return the rank (0 = rank 1).
    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Return `true` if both file and rank lie in 0..=7.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }

    /// Board array index `rank * 8 + file`. Only meaningful for valid coordinates.
    #[inline]
    pub const fn index(self) -> usize {
        debug_assert!(self.is_valid());
        (self.rank as usize) * 8 + self.file as usize
    }

    /// Return the coordinate shifted by `(df, dr)`.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Coord {
        Coord::new(self.file + df, self.rank + dr)
    }

    #[inline]
    pub const fn north(self) -> Coord {
        self.offset(0, 1)
    }

    #[inline]
    pub const fn south(self) -> Coord {
        self.offset(0, -1)
    }

    #[inline]
    pub const fn east(self) -> Coord {
        self.offset(1, 0)
    }

    #[inline]
    pub const fn west(self) -> Coord {
        self.offset(-1, 0)
    }

    #[inline]
    pub const fn north_east(self) -> Coord {
        self.offset(1, 1)
    }

    #[inline]
    pub const fn north_west(self) -> Coord {
        self.offset(-1, 1)
    }

    #[inline]
    pub const fn south_east(self) -> Coord {
        self.offset(1, -1)
    }

    #[inline]
    pub const fn south_west(self) -> Coord {
        self.offset(-1, -1)
    }

    /// Iterate over all 64 coordinates in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..64).map(Coord::from_index)
    }

    pub const A1: Coord = Coord::new(0, 0);
    pub const B1: Coord = Coord::new(1, 0);
    pub const C1: Coord = Coord::new(2, 0);
    pub const D1: Coord = Coord::new(3, 0);
    pub const E1: Coord = Coord::new(4, 0);
    pub const F1: Coord = Coord::new(5, 0);
    pub const G1: Coord = Coord::new(6, 0);
    pub const H1: Coord = Coord::new(7, 0);
    pub const A8: Coord = Coord::new(0, 7);
    pub const B8: Coord = Coord::new(1, 7);
    pub const C8: Coord = Coord::new(2, 7);
    pub const D8: Coord = Coord::new(3, 7);
    pub const E8: Coord = Coord::new(4, 7);
    pub const F8: Coord = Coord::new(5, 7);
    pub const G8: Coord = Coord::new(6, 7);
    pub const H8: Coord = Coord::new(7, 7);
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            let file = (b'a' + self.file as u8) as char;
            write!(f, "{}{}", file, self.rank + 1)
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self)
    }
}
