//! Iterative deepening driver
//!
//! `Searcher::decide` answers "what do I play, given this position and this
//! many milliseconds". It searches depth 1, then 2, and so on, adopting the
//! move of each completed iteration and discarding the one the clock cuts
//! short. Shallow iterations are cheap and their table entries order the
//! deeper ones, so the restarts cost little and the engine always has an
//! answer ready when time runs out.

use crate::constants::{DEFAULT_TT_CAPACITY, INFINITY, MATE_THRESHOLD, MAX_DEPTH};
use crate::error::{EngineError, EngineResult};
use crate::limits::TimeBudget;
use crate::tt::TranspositionTable;
use chess::{Board, ChessMove, MoveGen};
use tracing::{debug, trace};

/// What happens to the transposition table between decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtPolicy {
    /// Cleared at the top of every `decide`. Predictable memory and no
    /// stale-entry interactions between decisions.
    PerDecision,
    /// Kept across decisions, so consecutive searches of a continuing game
    /// start warm.
    Persistent,
}

/// Tunables for a `Searcher`.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Iterative deepening ceiling.
    pub max_depth: u8,
    /// Transposition table slot count.
    pub tt_capacity: usize,
    pub tt_policy: TtPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: MAX_DEPTH,
            tt_capacity: DEFAULT_TT_CAPACITY,
            tt_policy: TtPolicy::PerDecision,
        }
    }
}

/// Diagnostic counters for one decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Interior nodes visited by the main search.
    pub nodes: u64,
    /// Nodes visited by the capture extension.
    pub qnodes: u64,
    /// Beta cutoffs taken.
    pub cutoffs: u64,
    /// Depth-sufficient transposition table answers.
    pub tt_hits: u64,
    /// Transposition table writes.
    pub tt_stores: u64,
}

/// One completed decision.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best_move: ChessMove,
    /// Score of `best_move` from the mover's perspective, in centipawns.
    pub score: i32,
    /// Deepest fully completed iteration; 0 if the budget expired before
    /// depth 1 finished and the fallback move was used.
    pub depth: u8,
    pub stats: SearchStats,
}

/// Time-budgeted game-tree searcher.
///
/// Holds the transposition table, the counters and the in-flight search
/// state. One instance serves one game; `decide` may be called repeatedly.
pub struct Searcher {
    pub(crate) tt: TranspositionTable,
    pub(crate) stats: SearchStats,
    pub(crate) budget: TimeBudget,
    pub(crate) aborted: bool,
    pub(crate) root_move: Option<ChessMove>,
    /// Hashes of the positions on the current search path, for repetition
    /// detection.
    pub(crate) position_stack: Vec<u64>,
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> EngineResult<Self> {
        Ok(Searcher {
            tt: TranspositionTable::new(config.tt_capacity)?,
            stats: SearchStats::default(),
            budget: TimeBudget::unlimited(),
            aborted: false,
            root_move: None,
            position_stack: Vec::new(),
            config,
        })
    }

    /// Pick a move for `board` within `budget_ms` milliseconds.
    ///
    /// Always returns a legal move when one exists, even on a zero budget:
    /// the first generated legal move is adopted as a fallback before any
    /// searching starts. A position with no legal moves is a protocol error,
    /// the game is already over.
    pub fn decide(&mut self, board: &Board, budget_ms: u64) -> EngineResult<SearchResult> {
        let fallback = MoveGen::new_legal(board)
            .next()
            .ok_or(EngineError::NoLegalMoves)?;

        if self.config.tt_policy == TtPolicy::PerDecision {
            self.tt.clear();
        }
        self.stats = SearchStats::default();
        self.budget = TimeBudget::start(budget_ms);
        self.position_stack.clear();

        let mut best_move = fallback;
        let mut best_score = 0;
        let mut completed_depth = 0;

        for depth in 1..=self.config.max_depth {
            self.aborted = false;
            self.root_move = None;

            let score = self.alphabeta(board, depth, -INFINITY, INFINITY, 0);

            if self.aborted {
                trace!(depth, "iteration cut short, keeping previous result");
                break;
            }
            if let Some(mv) = self.root_move {
                best_move = mv;
            }
            best_score = score;
            completed_depth = depth;
            debug!(
                depth,
                score,
                nodes = self.stats.nodes,
                qnodes = self.stats.qnodes,
                elapsed_ms = self.budget.elapsed_millis() as u64,
                "iteration complete"
            );

            // A mate score cannot improve and the clock check saves starting
            // an iteration that cannot finish.
            if score.abs() >= MATE_THRESHOLD || self.budget.expired() {
                break;
            }
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            depth: completed_depth,
            stats: self.stats,
        })
    }
}
