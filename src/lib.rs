//! Time-budgeted chess move search.
//!
//! Give [`Searcher::decide`] a position and a millisecond budget and it
//! returns the move to play, the score it expects and the depth it reached.
//! Under the hood: negamax alpha-beta with iterative deepening, a capture
//! extension at the horizon, a direct-mapped transposition table and a
//! material plus piece-square evaluation. Board rules, move generation and
//! position hashing come from the `chess` crate.
//!
//! ```no_run
//! use chess::Board;
//! use pawnstorm::{SearchConfig, Searcher};
//!
//! # fn main() -> pawnstorm::EngineResult<()> {
//! let mut searcher = Searcher::new(SearchConfig::default())?;
//! let result = searcher.decide(&Board::default(), 500)?;
//! println!("playing {} (score {})", result.best_move, result.score);
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod evaluation;
pub mod limits;
pub mod search;
pub mod tt;

pub use error::{EngineError, EngineResult};
pub use evaluation::evaluate;
pub use limits::TimeBudget;
pub use search::{SearchConfig, SearchResult, SearchStats, Searcher, TtPolicy};
pub use tt::{Bound, TranspositionTable, TtEntry};
