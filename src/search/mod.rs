//! Game-tree search
//!
//! Negamax alpha-beta over the rules library's board, driven by iterative
//! deepening against a time budget.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core alpha-beta search algorithm
//! - `quiescence` - Capture extension to avoid the horizon effect
//! - `ordering` - Move ordering heuristics
//! - `iterative` - Iterative deepening driver and the `Searcher` itself

mod alphabeta;
mod iterative;
mod ordering;
mod quiescence;

pub use iterative::{SearchConfig, SearchResult, SearchStats, Searcher, TtPolicy};
