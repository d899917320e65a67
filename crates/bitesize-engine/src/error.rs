//! Engine configuration errors.

/// Errors raised when validating a [`SearchConfig`](crate::SearchConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The transposition table size is outside the supported range.
    #[error("hash bits must be between {min} and {max}, got {bits}")]
    HashBitsOutOfRange {
        /// The rejected value.
        bits: u8,
        /// Smallest accepted value.
        min: u8,
        /// Largest accepted value.
        max: u8,
    },
}
