//! Depth-limited minimax with alpha-beta pruning and a transposition table.
//!
//! White maximizes and Black minimizes a White-relative score. Legality is
//! checked lazily, one move at a time, so a cutoff skips validating the rest
//! of the list.

pub mod ordering;
pub mod score;
pub mod tt;

use bitesize_core::{
    Board, Color, Move, Signature, generate_quasi_legal_moves, has_legal_move, is_in_check,
    is_legal_move,
};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::eval::{EvalNode, EvalParams};
use ordering::order_moves;
use score::{INFINITY, mate_by_black, mate_by_white};
use tt::{Bound, TranspositionTable, TtEntry, score_from_tt, score_to_tt};

/// Half-moves without a capture or pawn move after which the game is drawn.
/// Half-moves without a capture or pawn move after which the game is drawn.
pub(crate) const FIFTY_MOVE_PLIES: u16 = 100;

/// Tunable search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// The transposition table holds `2^tt_bits` buckets.
    pub tt_bits: u8,
    pub use_transposition_table: bool,
    pub alpha_beta: bool,
}

impl SearchConfig {
    pub const MIN_TT_BITS: u8 = 1;
    pub const MAX_TT_BITS: u8 = 22;

    /// Reference minimax: no pruning, no table.
    pub const fn minimax() -> SearchConfig {
        SearchConfig {
            tt_bits: 16,
            use_transposition_table: false,
            alpha_beta: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if (Self::MIN_TT_BITS..=Self::MAX_TT_BITS).contains(&self.tt_bits) {
            Ok(())
        } else {
            Err(ConfigError::HashBitsOutOfRange {
                bits: self.tt_bits,
                min: Self::MIN_TT_BITS,
                max: Self::MAX_TT_BITS,
            })
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            tt_bits: 16,
            use_transposition_table: true,
            alpha_beta: true,
        }
    }
}

/// Result of a search from one root position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// White-relative score in centipawns, or a mate score.
    pub score: i32,
    /// `None` when the root has no move to play (mate, stalemate, or a draw by rule).
    pub best_move: Option<Move>,
    /// Principal variation starting with `best_move`.
    pub line: Vec<Move>,
    /// Nodes visited by this search.
    pub nodes: u64,
    pub depth: u32,
}

/// Score and principal variation of one node.
struct Scored {
    score: i32,
    line: Vec<Move>,
}

impl Scored {
    fn draw() -> Scored {
        Scored {
            score: 0,
            line: Vec::new(),
        }
    }
}

/// A searcher owning its transposition table and repetition history.
pub struct Search {
    tt: TranspositionTable,
    config: SearchConfig,
    params: EvalParams,
    /// Positions before the current node: game history, then the search path.
    path: Vec<(u32, Signature)>,
    nodes: u64,
}

impl Search {
    /// Create a searcher, rejecting an out-of-range table size.
    pub fn new(config: SearchConfig, params: EvalParams) -> Result<Search, ConfigError> {
        config.validate()?;
        Ok(Search {
            tt: TranspositionTable::new(config.tt_bits),
            config,
            params,
            path: Vec::new(),
            nodes: 0,
        })
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn params(&self) -> &EvalParams {
        &self.params
    }

    #[inline]
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Replace the configuration. The table is reallocated (and so emptied)
    /// only when its size changes.
    pub fn set_config(&mut self, config: SearchConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if config.tt_bits != self.config.tt_bits {
            self.tt = TranspositionTable::new(config.tt_bits);
        }
        self.config = config;
        Ok(())
    }

    /// Replace the evaluation parameters. Stored scores were computed with
    /// the old parameters, so the table is cleared.
    pub fn set_params(&mut self, params: EvalParams) {
        if params != self.params {
            self.tt.clear();
        }
        self.params = params;
    }

    /// Positions played before the root, oldest first, excluding the root itself.
    pub fn set_history(&mut self, positions: &[(u32, Signature)]) {
        self.path.clear();
        self.path.extend_from_slice(positions);
    }

    /// Forget the table and the game history.
    pub fn clear(&mut self) {
        self.tt.clear();
        self.path.clear();
    }

    /// Search `node` to `depth` plies within the window `[alpha, beta]`.
    pub fn find_best_move(&mut self, node: &EvalNode, depth: u32, alpha: i32, beta: i32) -> SearchResult {
        self.nodes = 0;
        let Scored { score, line } = self.search(node, depth, 0, alpha, beta);
        SearchResult {
            score,
            best_move: line.first().copied(),
            line,
            nodes: self.nodes,
            depth,
        }
    }

    /// Iterative deepening from depth 1 to `max_depth`, calling `on_iter`
    /// after each completed depth. Stops early once the root has no move.
    pub fn iterate<F>(&mut self, node: &EvalNode, max_depth: u32, mut on_iter: F) -> SearchResult
    where
        F: FnMut(&SearchResult),
    {
        let mut total_nodes = 0;
        let mut result = SearchResult {
            score: 0,
            best_move: None,
            line: Vec::new(),
            nodes: 0,
            depth: 0,
        };

        for depth in 1..=max_depth.max(1) {
            result = self.find_best_move(node, depth, -INFINITY, INFINITY);
            total_nodes += result.nodes;
            debug!(depth, score = result.score, nodes = result.nodes, "iteration complete");
            on_iter(&result);
            if result.best_move.is_none() {
                break;
            }
        }

        result.nodes = total_nodes;
        info!(
            depth = result.depth,
            score = result.score,
            nodes = total_nodes,
            occupancy = self.tt.occupancy(),
            "search finished"
        );
        result
    }

    fn search(&mut self, node: &EvalNode, depth: u32, ply: u32, mut alpha: i32, mut beta: i32) -> Scored {
        self.nodes += 1;
        let board = node.board();
        let hash = board.hash();
        let signature = board.signature();

        if self.repetitions(hash, &signature) >= 3 {
            return Scored::draw();
        }

        if depth == 0 {
            return Scored {
                score: self.leaf_score(node, ply),
                line: Vec::new(),
            };
        }

        let mut tt_move = None;
        if self.config.use_transposition_table {
            if let Some(entry) = self.tt.probe(hash, &signature, board.halfmove_clock()) {
                tt_move = entry.best_move();
                let score = score_from_tt(entry.score, ply);
                if entry.depth >= depth && entry.bound.is_usable(score, alpha, beta) {
                    return Scored {
                        score,
                        line: entry.line.clone(),
                    };
                }
            }
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let us = board.side_to_move();
        let mut moves = generate_quasi_legal_moves(board);
        order_moves(board, &mut moves, tt_move);

        let mut best = match us {
            Color::White => -INFINITY,
            Color::Black => INFINITY,
        };
        let mut best_line = Vec::new();
        let mut any_legal = false;

        self.path.push((hash, signature));
        for &mv in &moves {
            if !is_legal_move(board, mv, true) {
                continue;
            }
            any_legal = true;

            let child = self.search(&node.child(mv), depth - 1, ply + 1, alpha, beta);
            let improves = match us {
                Color::White => child.score > best,
                Color::Black => child.score < best,
            };
            if improves {
                best = child.score;
                best_line.clear();
                best_line.push(mv);
                best_line.extend(child.line);
            }

            if self.config.alpha_beta {
                match us {
                    Color::White => {
                        alpha = alpha.max(best);
                        if best > beta {
                            break;
                        }
                    }
                    Color::Black => {
                        beta = beta.min(best);
                        if best < alpha {
                            break;
                        }
                    }
                }
            }
        }
        self.path.pop();

        let mut bound = Bound::classify(best, alpha_orig, beta_orig, self.config.alpha_beta);
        if !any_legal {
            best = no_move_score(board, ply);
            bound = Bound::Exact;
        } else if board.halfmove_clock() >= FIFTY_MOVE_PLIES {
            // Drawn by the clock, but the line still names a move to play.
            best = 0;
            bound = Bound::Exact;
        }

        if self.config.use_transposition_table && depth > 1 {
            self.tt.store(TtEntry {
                hash,
                signature,
                halfmove_clock: board.halfmove_clock(),
                depth,
                score: score_to_tt(best, ply),
                bound,
                line: best_line.clone(),
            });
        }

        Scored {
            score: best,
            line: best_line,
        }
    }

    /// Occurrences of this position along the game history and search path, itself included.
    fn repetitions(&self, hash: u32, signature: &Signature) -> usize {
        1 + self
            .path
            .iter()
            .filter(|(h, s)| *h == hash && s == signature)
            .count()
    }

    fn leaf_score(&self, node: &EvalNode, ply: u32) -> i32 {
        let board = node.board();
        if !has_legal_move(board) {
            no_move_score(board, ply)
        } else if board.halfmove_clock() >= FIFTY_MOVE_PLIES {
            0
        } else {
            node.evaluate(&self.params)
        }
    }
}

impl Default for Search {
    fn default() -> Self {
        Search {
            tt: TranspositionTable::new(SearchConfig::default().tt_bits),
            config: SearchConfig::default(),
            params: EvalParams::default(),
            path: Vec::new(),
            nodes: 0,
        }
    }
}

impl std::fmt::Debug for Search {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Search")
            .field("tt", &self.tt)
            .field("config", &self.config)
            .field("params", &self.params)
            .field("history", &self.path.len())
            .finish()
    }
}

/// Checkmate or stalemate score for a side with no legal move.
fn no_move_score(board: &Board, ply: u32) -> i32 {
    let us = board.side_to_move();
    if !is_in_check(board, us) {
        0
    } else {
        match us {
            Color::White => mate_by_black(ply),
            Color::Black => mate_by_white(ply),
        }
    }
}
