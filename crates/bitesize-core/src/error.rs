//! Error types for FEN parsing and externally supplied moves.

/// Errors that occur when parsing a FEN string.
///
/// Only the syntax is checked; a well-formed FEN describing an impossible
/// position parses without complaint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index in FEN order (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// "halfmove clock" or "fullmove number".
        field: &'static str,
        /// The invalid string.
        found: String,
    },
}

/// Errors raised when an externally supplied move is applied to a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The text is not `<from><to>[promo]` algebraic encoding.
    #[error("unparseable move: {text}")]
    Unparseable {
        /// The offending text.
        text: String,
    },
    /// The move is not legal in the current position.
    #[error("illegal move: {mv}")]
    Illegal {
        /// The rejected move in algebraic encoding.
        mv: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{FenError, MoveError};

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 6 FEN fields, found 4");
        let err = FenError::InvalidMoveCounter {
            field: "halfmove clock",
            found: "x".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid halfmove clock: \"x\"");
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::Illegal {
            mv: "d1h5".to_string(),
        };
        assert_eq!(format!("{err}"), "illegal move: d1h5");
    }
}
