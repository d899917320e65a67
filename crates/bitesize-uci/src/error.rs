//! UCI protocol errors.

use bitesize_core::{FenError, MoveError};
use bitesize_engine::ConfigError;

/// Errors that can occur during UCI protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        source: FenError,
    },

    /// A move in the `position` command could not be parsed or is illegal.
    #[error("invalid move in position command: {source}")]
    InvalidMove {
        #[from]
        source: MoveError,
    },

    /// A `go` parameter is missing its value.
    #[error("missing value for go parameter: {param}")]
    MissingGoValue {
        /// The parameter name.
        param: String,
    },

    /// A `go` parameter value could not be parsed.
    #[error("invalid value for go parameter {param}: {value}")]
    InvalidGoValue {
        /// The parameter name.
        param: String,
        /// The value that failed to parse.
        value: String,
    },

    /// `setoption` without a `name` clause.
    #[error("malformed setoption command")]
    MalformedOption,

    /// `setoption` named an option the engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// `setoption` value has the wrong type for its option.
    #[error("invalid value for option {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The engine rejected a configuration change.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An I/O error occurred while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
