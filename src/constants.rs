//! Score sentinels, piece values and search tuning parameters
//!
//! All scores are centipawns. Scores are always relative to the side to move
//! at the node that produced them; callers negate before use.

use chess::Piece;

/// Window bound for the full search window. Larger than any reachable score.
pub const INFINITY: i32 = 1_000_000;

/// Base score for delivering checkmate. Actual mate scores are ply-adjusted:
/// a mate found at ply `p` scores `MATE_SCORE - p`, so faster mates score
/// higher and the search never prefers a slower mate.
pub const MATE_SCORE: i32 = 100_000;

/// Scores at or above this are mate scores and carry a ply distance.
/// The margin leaves room for the deepest reachable ply.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

/// Score for stalemate, repetition and other drawn outcomes.
pub const DRAW_SCORE: i32 = 0;

/// Hard ceiling for iterative deepening.
pub const MAX_DEPTH: u8 = 64;

/// Default number of transposition table slots.
pub const DEFAULT_TT_CAPACITY: usize = 1 << 20;

// Move ordering tiers. Captures land in one of two bands depending on
// whether the trade looks safe; the exact values only shape the sort order.
pub const ORDER_PRINCIPAL: i32 = 1_000_000;
pub const ORDER_CAPTURE_GOOD: i32 = 8_000;
pub const ORDER_CAPTURE_BAD: i32 = 2_000;
pub const ORDER_PROMOTION: i32 = 6_000;
pub const ORDER_CASTLE: i32 = 50;
pub const ORDER_EARLY_KING_PENALTY: i32 = -40;

/// Plies from the root below which a non-castling king move is penalized
/// by the move orderer.
pub const EARLY_KING_PLY: u8 = 12;

/// Material value of a piece type in centipawns. The king carries no
/// material value; losing it is expressed through mate scores instead.
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 320,
        Piece::Bishop => 330,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 0,
    }
}
