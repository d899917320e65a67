//! UCI protocol handling for bitesize.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{Command, GoParams, UciOption, parse_command};
pub use engine::{EngineConfig, UciEngine};
pub use error::UciError;
