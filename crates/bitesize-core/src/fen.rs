//! FEN string parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::coord::Coord;
use crate::error::FenError;
use crate::piece::Piece;
use crate::zobrist;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Replace this board's whole state with the position described by `fen`.
    ///
    /// On error the board is left untouched.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = fen.parse()?;
        Ok(())
    }

    /// Serialize the position as a FEN string.
    pub fn to_fen(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Board {
    type Err = FenError;

    /// Parse the six FEN fields. Only syntax is checked.
    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount {
                found: ranks.len(),
            });
        }

        let mut board = Board::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN ranks go from 8 to 1
            let rank = 7 - rank_index as i8;
            let mut file: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file += digit as usize;
                } else {
                    let piece =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                    if file >= 8 {
                        return Err(FenError::BadRankLength {
                            rank_index,
                            length: file + 1,
                        });
                    }
                    board.set(Coord::new(file as i8, rank), piece);
                    file += 1;
                }
            }

            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file,
                });
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                Coord::from_algebraic(fields[3]).ok_or_else(|| FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                })?,
            )
        };

        let halfmove_clock = fields[4].parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field: "halfmove clock",
            found: fields[4].to_string(),
        })?;

        let fullmove_number = fields[5].parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field: "fullmove number",
            found: fields[5].to_string(),
        })?;

        board.set_side_to_move(side_to_move);
        board.set_castling(castling);
        board.set_en_passant(en_passant);
        board.set_halfmove_clock(halfmove_clock);
        board.set_fullmove_number(fullmove_number);
        board.set_hash(zobrist::hash_from_scratch(&board));
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0i8..8).rev() {
            let mut empty_count = 0u8;

            for file in 0i8..8 {
                let piece = self.at(Coord::new(file, rank));
                if piece.is_empty() {
                    empty_count += 1;
                    continue;
                }
                if empty_count > 0 {
                    write!(f, "{empty_count}")?;
                    empty_count = 0;
                }
                write!(f, "{}", piece.fen_char())?;
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {}", self.side_to_move())?;
        write!(f, " {}", self.castling())?;
        match self.en_passant() {
            Some(coord) => write!(f, " {coord}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::board::Board;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::error::FenError;
    use crate::piece::Piece;

    fn roundtrip(fen: &str) {
        let board: Board = fen.parse().unwrap();
        let output = format!("{board}");
        assert_eq!(output, fen, "FEN roundtrip failed");
        let board2: Board = output.parse().unwrap();
        assert_eq!(board, board2);
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip(STARTING_FEN);
    }

    #[test]
    fn roundtrip_sicilian() {
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2");
    }

    #[test]
    fn roundtrip_kiwipete() {
        roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    }

    #[test]
    fn roundtrip_black_to_move() {
        roundtrip("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    }

    #[test]
    fn starting_position_matches_fen() {
        let from_constructor = Board::starting_position();
        let from_fen: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(from_constructor, from_fen);
    }

    #[test]
    fn fields_are_parsed() {
        let board: Board = "8/8/8/3pP3/8/8/8/4K2k b - d6 12 40".parse().unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert!(board.castling().is_empty());
        assert_eq!(board.en_passant(), Coord::from_algebraic("d6"));
        assert_eq!(board.halfmove_clock(), 12);
        assert_eq!(board.fullmove_number(), 40);
        assert_eq!(board.at(Coord::H1), Piece::BLACK_KING);
    }

    #[test]
    fn set_fen_replaces_state() {
        let mut board = Board::starting_position();
        board.set_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(board.pieces().count(), 2);
        assert!(board.set_fen("garbage").is_err());
        assert_eq!(board.pieces().count(), 2);
    }

    #[test]
    fn semantic_nonsense_still_parses() {
        // No kings and a pawn on the back rank are syntactically fine.
        let board: Board = "P7/8/8/8/8/8/8/8 w - - 0 1".parse().unwrap();
        assert_eq!(board.king_coord(Color::White), None);
    }

    #[test]
    fn error_wrong_field_count() {
        assert_eq!(
            "e4 e5".parse::<Board>(),
            Err(FenError::WrongFieldCount { found: 2 })
        );
    }

    #[test]
    fn error_invalid_piece_char() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1".parse::<Board>();
        assert_eq!(result, Err(FenError::InvalidPieceChar { character: 'X' }));
    }

    #[test]
    fn error_bad_rank_length() {
        let result = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Board>();
        assert_eq!(
            result,
            Err(FenError::BadRankLength {
                rank_index: 1,
                length: 7
            })
        );
    }

    #[test]
    fn error_invalid_color() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidColor { .. })));
    }

    #[test]
    fn error_invalid_castling() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1".parse::<Board>();
        assert_eq!(result, Err(FenError::InvalidCastlingChar { character: 'X' }));
    }

    #[test]
    fn error_invalid_en_passant() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn error_invalid_move_counter() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - abc 1".parse::<Board>();
        assert!(matches!(
            result,
            Err(FenError::InvalidMoveCounter {
                field: "halfmove clock",
                ..
            })
        ));
    }
}
