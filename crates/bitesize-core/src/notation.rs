//! Short algebraic notation for display.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;

/// Render `mv`, played from `board`, in short algebraic notation.
///
/// Pawn moves show the destination, prefixed by the origin file and `x` when
/// capturing, with `=Q` style suffixes for promotions. Piece moves show the
/// piece letter, an `x` when capturing, and the destination. Check markers
/// and disambiguation are not produced.
pub fn notate_move(board: &Board, mv: Move) -> String {
    match mv {
        Move::Castling {
            king_from, king_to, ..
        } => {
            if king_to.file() > king_from.file() {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            }
        }
        Move::EnPassant { from, to, .. } => format!("{}x{}", file_char(from.file()), to),
        Move::Normal {
            from,
            to,
            promotion,
        } => {
            let capture = !board.at(to).is_empty();
            let mut text = String::with_capacity(7);
            match board.at(from).kind() {
                Some(PieceKind::Pawn) | None => {
                    if capture {
                        text.push(file_char(from.file()));
                        text.push('x');
                    }
                }
                Some(kind) => {
                    text.push(kind.fen_char().to_ascii_uppercase());
                    if capture {
                        text.push('x');
                    }
                }
            }
            text.push_str(&to.to_string());
            if let Some(kind) = promotion {
                text.push('=');
                text.push(kind.fen_char().to_ascii_uppercase());
            }
            text
        }
    }
}

fn file_char(file: i8) -> char {
    (b'a' + file as u8) as char
}
