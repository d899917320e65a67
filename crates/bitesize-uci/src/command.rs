//! UCI command parsing.

use bitesize_core::Game;

use crate::error::UciError;

/// Parameters for the `go` command.
///
/// Time-control tokens are accepted and skipped; the search is bounded by depth only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search to this depth; the configured default otherwise.
    pub depth: Option<u32>,
    /// Run `perft` to this depth instead of searching.
    pub perft: Option<usize>,
}

/// An engine option set through `setoption name <X> value <Y>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UciOption {
    /// Default depth for a `go` without `depth`.
    Depth(u32),
    /// Transposition table size as a power of two.
    HashBits(u8),
    PieceSquareTables(bool),
    /// Centipawns per rank of pawn advancement.
    PawnAdvancement(i32),
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- set up a game with optional moves applied.
    Position(Game),
    /// `go` -- search or count perft nodes.
    Go(GoParams),
    /// `setoption` -- change an engine option.
    SetOption(UciOption),
    /// `d` -- print the current board.
    Display,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (silently ignored per the UCI protocol).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&first, rest)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match first {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "quit" => Ok(Command::Quit),
        "d" => Ok(Command::Display),
        "position" => parse_position(rest),
        "go" => parse_go(rest),
        "setoption" => parse_setoption(rest),
        _ => Ok(Command::Unknown(first.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
///
/// Every move is checked for legality as it is played.
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    let (mut game, rest) = match tokens.split_first() {
        Some((&"startpos", rest)) => (Game::starting_position(), rest),
        Some((&"fen", rest)) => {
            // FEN is 6 space-separated fields
            let end = rest.iter().position(|&t| t == "moves").unwrap_or(rest.len());
            let fen = rest[..end].join(" ");
            let game = Game::from_fen(&fen).map_err(|source| UciError::InvalidFen { fen, source })?;
            (game, &rest[end..])
        }
        _ => return Err(UciError::MalformedPosition),
    };

    if let Some((&"moves", moves)) = rest.split_first() {
        for text in moves {
            game.play_uci(text)?;
        }
    }

    Ok(Command::Position(game))
}

/// Parse the `go` command arguments.
///
/// Supports `depth N` and `perft N`. Unknown tokens, including the time
/// controls, are silently skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                params.depth = Some(parse_int(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            "perft" => {
                params.perft = Some(parse_int(tokens.get(i + 1), "perft")?);
                i += 2;
            }
            _ => {
                // Unknown token -- skip per UCI convention
                i += 1;
            }
        }
    }

    Ok(Command::Go(params))
}

/// Parse `name <X...> value <Y...>`. Option names match case-insensitively.
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    let Some((&"name", rest)) = tokens.split_first() else {
        return Err(UciError::MalformedOption);
    };
    let split = rest.iter().position(|&t| t == "value").unwrap_or(rest.len());
    let name = rest[..split].join(" ");
    let value = rest.get(split + 1..).unwrap_or_default().join(" ");

    let invalid = || UciError::InvalidOptionValue {
        name: name.clone(),
        value: value.clone(),
    };
    let option = match name.to_ascii_lowercase().as_str() {
        "depth" => UciOption::Depth(value.parse().map_err(|_| invalid())?),
        "hashbits" => UciOption::HashBits(value.parse().map_err(|_| invalid())?),
        "piecesquaretables" => UciOption::PieceSquareTables(value.parse().map_err(|_| invalid())?),
        "pawnadvancement" => UciOption::PawnAdvancement(value.parse().map_err(|_| invalid())?),
        _ => return Err(UciError::UnknownOption { name }),
    };
    Ok(Command::SetOption(option))
}

/// Parse an integer value from a token.
fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, UciError> {
    let value = token.ok_or_else(|| UciError::MissingGoValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| UciError::InvalidGoValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitesize_core::{Color, Coord, Piece};

    fn position(line: &str) -> Game {
        match parse_command(line).unwrap() {
            Command::Position(game) => game,
            other => panic!("expected Position, got {other:?}"),
        }
    }

    fn go(line: &str) -> GoParams {
        match parse_command(line).unwrap() {
            Command::Go(params) => params,
            other => panic!("expected Go, got {other:?}"),
        }
    }

    fn option(line: &str) -> UciOption {
        match parse_command(line).unwrap() {
            Command::SetOption(option) => option,
            other => panic!("expected SetOption, got {other:?}"),
        }
    }

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("uci").unwrap(), Command::Uci));
        assert!(matches!(parse_command("isready").unwrap(), Command::IsReady));
        assert!(matches!(parse_command("ucinewgame").unwrap(), Command::UciNewGame));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
        assert!(matches!(parse_command("d").unwrap(), Command::Display));
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        let game = position("position startpos moves e2e4 e7e5");
        assert_eq!(game.moves().len(), 2);
        assert_eq!(game.board().at(Coord::from_algebraic("e5").unwrap()), Piece::BLACK_PAWN);
        assert_eq!(game.board().side_to_move(), Color::White);
    }

    #[test]
    fn parse_position_fen() {
        let game = position("position fen rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
        assert_eq!(game.board().side_to_move(), Color::Black);
        assert!(game.moves().is_empty());
    }

    #[test]
    fn parse_position_fen_with_castling_move() {
        let game = position("position fen r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1 moves e1g1");
        assert_eq!(game.board().at(Coord::F1), Piece::WHITE_ROOK);
    }

    #[test]
    fn parse_position_rejects_illegal_move() {
        let result = parse_command("position startpos moves d2d4 e7e5 d1h5");
        assert!(matches!(result, Err(UciError::InvalidMove { .. })));
    }

    #[test]
    fn parse_position_missing_keyword() {
        assert!(matches!(parse_command("position"), Err(UciError::MalformedPosition)));
        assert!(matches!(parse_command("position e2e4"), Err(UciError::MalformedPosition)));
    }

    #[test]
    fn parse_position_invalid_fen() {
        assert!(matches!(parse_command("position fen invalid"), Err(UciError::InvalidFen { .. })));
    }

    #[test]
    fn parse_go_depth() {
        assert_eq!(go("go depth 6").depth, Some(6));
        assert_eq!(go("go"), GoParams::default());
    }

    #[test]
    fn parse_go_skips_time_controls() {
        let params = go("go wtime 300000 btime 300000 winc 2000 binc 2000 depth 3");
        assert_eq!(params.depth, Some(3));
        assert_eq!(params.perft, None);
    }

    #[test]
    fn parse_go_perft() {
        assert_eq!(go("go perft 3").perft, Some(3));
    }

    #[test]
    fn parse_go_invalid_depth_value() {
        assert!(parse_command("go depth abc").is_err());
        assert!(parse_command("go depth").is_err());
    }

    #[test]
    fn parse_setoption_values() {
        assert_eq!(option("setoption name Depth value 6"), UciOption::Depth(6));
        assert_eq!(option("setoption name hashbits value 12"), UciOption::HashBits(12));
        assert_eq!(
            option("setoption name PieceSquareTables value true"),
            UciOption::PieceSquareTables(true)
        );
        assert_eq!(option("setoption name PawnAdvancement value 10"), UciOption::PawnAdvancement(10));
    }

    #[test]
    fn parse_setoption_errors() {
        assert!(matches!(parse_command("setoption"), Err(UciError::MalformedOption)));
        assert!(matches!(
            parse_command("setoption name Threads value 4"),
            Err(UciError::UnknownOption { .. })
        ));
        assert!(matches!(
            parse_command("setoption name Depth value deep"),
            Err(UciError::InvalidOptionValue { .. })
        ));
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(parse_command("foobar").unwrap(), Command::Unknown(_)));
        assert!(matches!(parse_command("").unwrap(), Command::Unknown(_)));
    }
}
