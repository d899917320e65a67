//! Transposition table keyed by the 30-bit Zobrist hash.
//!
//! One entry per bucket, always replaced. Every entry carries the full board
//! signature so that hash collisions are detected on probe rather than
//! returning a score for the wrong position.

use bitesize_core::{Move, Signature};

use super::FIFTY_MOVE_PLIES;
use super::score::MATE_THRESHOLD;

/// How the stored score relates to the true minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score is the exact value.
    Exact,
    /// The search failed high; the true value is at least the score.
    Lower,
    /// The search failed low; the true value is at most the score.
    Upper,
}

impl Bound {
    /// Classify `score` against the window the node was searched with.
    ///
    /// The window is inclusive: a score equal to either edge is exact,
    /// matching the strict cutoff comparisons of the search.
    pub fn classify(score: i32, alpha: i32, beta: i32, alpha_beta: bool) -> Bound {
        if !alpha_beta {
            Bound::Exact
        } else if score > beta {
            Bound::Lower
        } else if score < alpha {
            Bound::Upper
        } else {
            Bound::Exact
        }
    }

    /// Whether a stored `score` with this bound settles a node searched with `[alpha, beta]`.
    pub fn is_usable(self, score: i32, alpha: i32, beta: i32) -> bool {
        match self {
            Bound::Exact => true,
            Bound::Lower => score > beta,
            Bound::Upper => score < alpha,
        }
    }
}

/// A stored search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtEntry {
    pub hash: u32,
    pub signature: Signature,
    /// Half-move clock of the position when it was searched.
    pub halfmove_clock: u16,
    /// Remaining depth the entry was searched to.
    pub depth: u32,
    /// Node-relative score; see [`score_to_tt`].
    pub score: i32,
    pub bound: Bound,
    /// Principal variation from this position.
    pub line: Vec<Move>,
}

impl TtEntry {
    /// First move of the stored line.
    #[inline]
    pub fn best_move(&self) -> Option<Move> {
        self.line.first().copied()
    }

    /// Whether the stored result holds for the same position at `halfmove_clock`.
    ///
    /// The fifty-move rule can only fire inside the searched subtree when the
    /// clock plus the depth reaches the limit. Below that, any two clocks agree.
    pub fn matches_clock(&self, halfmove_clock: u16) -> bool {
        let settled = |clock: u16| u32::from(clock) + self.depth < u32::from(FIFTY_MOVE_PLIES);
        self.halfmove_clock == halfmove_clock
            || (settled(self.halfmove_clock) && settled(halfmove_clock))
    }
}

/// Convert a root-relative score to node-relative form before storing.
///
/// Mate scores depend on the ply they were found at; storing the distance
/// from the node instead makes them valid wherever the position recurs.
pub fn score_to_tt(score: i32, ply: u32) -> i32 {
    let ply = ply as i32;
    if score >= MATE_THRESHOLD {
        score + ply
    } else if score <= -MATE_THRESHOLD {
        score - ply
    } else {
        score
    }
}

/// Reverse [`score_to_tt`] for a probe at `ply`.
pub fn score_from_tt(score: i32, ply: u32) -> i32 {
    let ply = ply as i32;
    if score >= MATE_THRESHOLD {
        score - ply
    } else if score <= -MATE_THRESHOLD {
        score + ply
    } else {
        score
    }
}

/// Fixed-size table of `2^bits` buckets, owned by a single search.
pub struct TranspositionTable {
    entries: Vec<Option<Box<TtEntry>>>,
    mask: usize,
    occupied: usize,
}

impl TranspositionTable {
    /// Create an empty table with `2^bits` buckets.
    pub fn new(bits: u8) -> TranspositionTable {
        let len = 1usize << bits;
        TranspositionTable {
            entries: vec![None; len],
            mask: len - 1,
            occupied: 0,
        }
    }

    /// Drop every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|slot| *slot = None);
        self.occupied = 0;
    }

    /// Number of buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Number of buckets currently holding an entry.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.occupied
    }

    /// Look up the entry for a position, verifying the full signature and
    /// that the half-move clock cannot change the stored score.
    pub fn probe(&self, hash: u32, signature: &Signature, halfmove_clock: u16) -> Option<&TtEntry> {
        self.entries[self.index(hash)].as_deref().filter(|entry| {
            entry.hash == hash
                && entry.signature == *signature
                && entry.matches_clock(halfmove_clock)
        })
    }

    /// Store `entry`, replacing whatever occupied its bucket.
    pub fn store(&mut self, entry: TtEntry) {
        let index = self.index(entry.hash);
        let slot = &mut self.entries[index];
        if slot.is_none() {
            self.occupied += 1;
        }
        *slot = Some(Box::new(entry));
    }

    #[inline]
    fn index(&self, hash: u32) -> usize {
        hash as usize & self.mask
    }
}

impl std::fmt::Debug for TranspositionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("buckets", &self.entries.len())
            .field("occupied", &self.occupied)
            .finish()
    }
}
