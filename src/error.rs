//! Error types for the search engine
//!
//! Steady-state search signaling (time overrun, terminal nodes) is done with
//! return values, never errors. The error enum covers protocol misuse only.

use thiserror::Error;

/// Errors that can occur when driving the search
#[derive(Error, Debug)]
pub enum EngineError {
    /// `decide` was called on a position with no legal moves; the game is
    /// already over and there is no move to return.
    #[error("no legal moves in the given position (checkmate or stalemate)")]
    NoLegalMoves,

    /// A transposition table cannot be built with zero slots.
    #[error("invalid transposition table capacity: {capacity}")]
    InvalidTableCapacity { capacity: usize },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
