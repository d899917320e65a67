//! A game record: the current board plus every move and position reached.

use std::fmt;

use tracing::debug;

use crate::attacks::is_in_check;
use crate::board::{Board, Signature};
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{FenError, MoveError};
use crate::movegen::{has_legal_move, is_legal_move};

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The side to move is checkmated.
    Checkmate { winner: Color },
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// The current position has occurred three times.
    ThreefoldRepetition,
    /// A hundred plies passed without a capture or pawn move.
    FiftyMoveRule,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate {
                winner: Color::White,
            } => write!(f, "1-0 (checkmate)"),
            Outcome::Checkmate {
                winner: Color::Black,
            } => write!(f, "0-1 (checkmate)"),
            Outcome::Stalemate => write!(f, "1/2-1/2 (stalemate)"),
            Outcome::ThreefoldRepetition => write!(f, "1/2-1/2 (threefold repetition)"),
            Outcome::FiftyMoveRule => write!(f, "1/2-1/2 (fifty-move rule)"),
        }
    }
}

/// Current board plus the history needed for repetition detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
    /// `(hash, signature)` of every position reached, starting position included.
    positions: Vec<(u32, Signature)>,
}

impl Game {
    /// Start a game from `board`.
    pub fn new(board: Board) -> Game {
        Game {
            board,
            moves: Vec::new(),
            positions: vec![(board.hash(), board.signature())],
        }
    }

    /// Start a game from the standard starting position.
    pub fn starting_position() -> Game {
        Game::new(Board::starting_position())
    }

    /// Start a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Game, FenError> {
        Ok(Game::new(fen.parse()?))
    }

    /// Return the current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the moves played so far.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Return `(hash, signature)` for every position reached, oldest first.
    #[inline]
    pub fn positions(&self) -> &[(u32, Signature)] {
        &self.positions
    }

    /// Apply `mv` after a full legality check.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        if !is_legal_move(&self.board, mv, false) {
            return Err(MoveError::Illegal { mv: mv.to_uci() });
        }
        self.board.execute_move(mv);
        self.moves.push(mv);
        self.positions.push((self.board.hash(), self.board.signature()));
        debug!(mv = %mv, hash = self.board.hash(), "move played");
        Ok(())
    }

    /// Parse `text` in `<from><to>[promo]` form against the current board and play it.
    pub fn play_uci(&mut self, text: &str) -> Result<Move, MoveError> {
        let mv = Move::from_uci(text, &self.board).ok_or_else(|| MoveError::Unparseable {
            text: text.to_string(),
        })?;
        self.play(mv)?;
        Ok(mv)
    }

    /// How many times the current position has occurred, this occurrence included.
    pub fn repetition_count(&self) -> usize {
        let hash = self.board.hash();
        let signature = self.board.signature();
        self.positions
            .iter()
            .filter(|(h, s)| *h == hash && *s == signature)
            .count()
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// Return the result if the game is over.
    ///
    /// Mate and stalemate take precedence over the draw rules.
    pub fn outcome(&self) -> Option<Outcome> {
        let us = self.board.side_to_move();
        if !has_legal_move(&self.board) {
            return Some(if is_in_check(&self.board, us) {
                Outcome::Checkmate { winner: us.flip() }
            } else {
                Outcome::Stalemate
            });
        }
        if self.is_threefold_repetition() {
            return Some(Outcome::ThreefoldRepetition);
        }
        if self.is_fifty_move_draw() {
            return Some(Outcome::FiftyMoveRule);
        }
        None
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::starting_position()
    }
}
