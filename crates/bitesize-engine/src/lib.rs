//! Search and evaluation for bitesize.

pub mod error;
pub mod eval;
pub mod search;

pub use error::ConfigError;
pub use eval::{EvalNode, EvalParams};
pub use search::score::{
    INFINITY, MATE, MATE_THRESHOLD, UciScore, is_mate_score, mate_by_black, mate_by_white,
    mate_moves,
};
pub use search::tt::{Bound, TranspositionTable, TtEntry};
pub use search::{Search, SearchConfig, SearchResult};
