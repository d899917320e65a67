//! Core chess types: board representation, move generation, and game rules.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod coord;
mod error;
mod fen;
mod game;
mod make_move;
pub mod movegen;
mod notation;
pub mod perft;
mod piece;
mod piece_kind;
pub mod zobrist;

pub use attacks::{is_attacked, is_in_check};
pub use board::{Board, PrettyBoard, Signature};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::Move;
pub use color::Color;
pub use coord::Coord;
pub use error::{FenError, MoveError};
pub use fen::STARTING_FEN;
pub use game::{Game, Outcome};
pub use movegen::{
    MoveList, generate_legal_moves, generate_quasi_legal_moves, has_legal_move, is_legal_move,
};
pub use notation::notate_move;
pub use piece::Piece;
pub use piece_kind::PieceKind;
