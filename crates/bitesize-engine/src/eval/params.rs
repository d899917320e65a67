//! Tunable evaluation weights.

/// Weights applied to the incremental counters at a leaf.
///
/// The defaults give `100 * material + 20 * development`, i.e. material
/// plus a fifth of a point per developed piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalParams {
    /// Centipawns per developed piece.
    pub development_weight: i32,
    /// Centipawns per rank of pawn advancement.
    pub pawn_advancement_weight: i32,
    /// Add the piece-square table bonus.
    pub piece_square_tables: bool,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            development_weight: 20,
            pawn_advancement_weight: 0,
            piece_square_tables: false,
        }
    }
}
