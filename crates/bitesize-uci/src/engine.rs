//! Synchronous UCI engine loop.
//!
//! Commands are handled one at a time on the calling thread; `go` blocks
//! until the search reaches its depth.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use bitesize_core::{Color, Game, perft};
use bitesize_engine::{EvalNode, EvalParams, Search, SearchConfig, SearchResult, UciScore};

use crate::command::{Command, GoParams, UciOption, parse_command};
use crate::error::UciError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Depth searched by a `go` without `depth`.
    pub depth: u32,
    /// The transposition table holds `2^hash_bits` buckets.
    pub hash_bits: u8,
    pub piece_square_tables: bool,
    pub pawn_advancement: i32,
}

impl EngineConfig {
    pub const MAX_DEPTH: u32 = 64;

    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            tt_bits: self.hash_bits,
            ..SearchConfig::default()
        }
    }

    fn eval_params(&self) -> EvalParams {
        EvalParams {
            piece_square_tables: self.piece_square_tables,
            pawn_advancement_weight: self.pawn_advancement,
            ..EvalParams::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            hash_bits: SearchConfig::default().tt_bits,
            piece_square_tables: false,
            pawn_advancement: 0,
        }
    }
}

/// The UCI engine, holding the current game and the searcher.
pub struct UciEngine {
    game: Game,
    search: Search,
    config: EngineConfig,
}

impl UciEngine {
    /// Create a new engine with the starting position.
    pub fn new() -> Self {
        Self {
            game: Game::starting_position(),
            search: Search::default(),
            config: EngineConfig::default(),
        }
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing replies to `output`.
    ///
    /// Malformed commands are logged and skipped; only I/O failures end the loop early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), UciError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => {
                    if let Err(e) = self.handle(cmd, &mut output) {
                        match e {
                            UciError::Io { .. } => return Err(e),
                            _ => warn!(error = %e, "UCI command rejected"),
                        }
                    }
                }
                Err(e) => warn!(error = %e, "UCI parse error"),
            }
            output.flush()?;
        }

        info!("bitesize shutting down");
        Ok(())
    }

    /// Execute one parsed command.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), UciError> {
        match cmd {
            Command::Uci => self.handle_uci(out),
            Command::IsReady => {
                writeln!(out, "readyok")?;
                Ok(())
            }
            Command::UciNewGame => {
                self.handle_ucinewgame();
                Ok(())
            }
            Command::Position(game) => {
                self.game = game;
                Ok(())
            }
            Command::Go(params) => self.handle_go(params, out),
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Display => self.handle_display(out),
            Command::Quit | Command::Unknown(_) => Ok(()),
        }
    }

    fn handle_uci<W: Write>(&self, out: &mut W) -> Result<(), UciError> {
        let defaults = EngineConfig::default();
        writeln!(out, "id name bitesize {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author the bitesize developers")?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {}",
            defaults.depth,
            EngineConfig::MAX_DEPTH
        )?;
        writeln!(
            out,
            "option name HashBits type spin default {} min {} max {}",
            defaults.hash_bits,
            SearchConfig::MIN_TT_BITS,
            SearchConfig::MAX_TT_BITS
        )?;
        writeln!(out, "option name PieceSquareTables type check default false")?;
        writeln!(out, "option name PawnAdvancement type spin default 0 min 0 max 100")?;
        writeln!(out, "uciok")?;
        Ok(())
    }

    fn handle_ucinewgame(&mut self) {
        self.game = Game::starting_position();
        self.search.clear();
        info!("new game");
    }

    fn handle_setoption(&mut self, option: UciOption) -> Result<(), UciError> {
        let mut config = self.config;
        match option {
            UciOption::Depth(depth) => config.depth = depth.clamp(1, EngineConfig::MAX_DEPTH),
            UciOption::HashBits(bits) => config.hash_bits = bits,
            UciOption::PieceSquareTables(enabled) => config.piece_square_tables = enabled,
            UciOption::PawnAdvancement(weight) => config.pawn_advancement = weight,
        }
        self.search.set_config(config.search_config())?;
        self.search.set_params(config.eval_params());
        self.config = config;
        debug!(?option, "option set");
        Ok(())
    }

    fn handle_go<W: Write>(&mut self, params: GoParams, out: &mut W) -> Result<(), UciError> {
        if let Some(depth) = params.perft {
            return self.handle_perft(depth, out);
        }

        let depth = params.depth.unwrap_or(self.config.depth).clamp(1, EngineConfig::MAX_DEPTH);
        let board = *self.game.board();
        let history = self.game.positions().split_last().map_or(&[][..], |(_, rest)| rest);
        self.search.set_history(history);

        let side = board.side_to_move();
        let mut written = Ok(());
        let result = self.search.iterate(&EvalNode::new(board), depth, |iteration| {
            if written.is_ok() {
                written = write_info(out, iteration, side);
            }
        });
        written?;

        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {mv}")?,
            None => writeln!(out, "bestmove 0000")?,
        }
        Ok(())
    }

    fn handle_perft<W: Write>(&self, depth: usize, out: &mut W) -> Result<(), UciError> {
        let mut total = 0;
        for (mv, count) in perft::divide(self.game.board(), depth) {
            writeln!(out, "{mv}: {count}")?;
            total += count;
        }
        writeln!(out)?;
        writeln!(out, "Nodes searched: {total}")?;
        Ok(())
    }

    fn handle_display<W: Write>(&self, out: &mut W) -> Result<(), UciError> {
        let board = self.game.board();
        write!(out, "{}", board.pretty())?;
        writeln!(out, "Fen: {board}")?;
        writeln!(out, "Key: {:08x}", board.hash())?;
        if let Some(outcome) = self.game.outcome() {
            writeln!(out, "Result: {outcome}")?;
        }
        Ok(())
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Write one `info` line for a completed iteration.
fn write_info<W: Write>(out: &mut W, result: &SearchResult, side: Color) -> std::io::Result<()> {
    write!(
        out,
        "info depth {} score {} nodes {}",
        result.depth,
        UciScore::new(result.score, side),
        result.nodes
    )?;
    if !result.line.is_empty() {
        let pv: Vec<String> = result.line.iter().map(|mv| mv.to_uci()).collect();
        write!(out, " pv {}", pv.join(" "))?;
    }
    writeln!(out)?;
    out.flush()
}
