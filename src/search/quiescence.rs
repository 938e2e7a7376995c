//! Capture-only search extension
//!
//! Ran at the main search horizon so the last counted move is never half of
//! an unresolved exchange. Only captures are expanded, so each line strictly
//! shrinks the material on the board and the extension bottoms out on its
//! own. The side to move may always "stand pat" on the static evaluation
//! instead of capturing.

use super::iterative::Searcher;
use crate::constants::{piece_value, DRAW_SCORE, MATE_SCORE};
use crate::evaluation::evaluate;
use chess::{Board, BoardStatus, MoveGen};
use std::cmp::Reverse;

impl Searcher {
    /// Resolve captures below the horizon within the `(alpha, beta)` window.
    /// `ply` is the distance from the root, continuing the main search's
    /// count.
    pub(crate) fn quiescence(&mut self, board: &Board, mut alpha: i32, beta: i32, ply: u8) -> i32 {
        if self.budget.expired() {
            self.aborted = true;
            return 0;
        }
        self.stats.qnodes += 1;

        // Terminal positions keep the main search's ply-adjusted mate
        // convention; the evaluator's flat sentinel carries no distance.
        let stand_pat = match board.status() {
            BoardStatus::Checkmate => -(MATE_SCORE - i32::from(ply)),
            BoardStatus::Stalemate => DRAW_SCORE,
            BoardStatus::Ongoing => evaluate(board),
        };
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut movegen = MoveGen::new_legal(board);
        movegen.set_iterator_mask(*board.color_combined(!board.side_to_move()));
        let mut captures: Vec<_> = movegen.collect();

        // Most valuable victim first, cheapest attacker breaking ties.
        captures.sort_by_cached_key(|mv| {
            let victim = board.piece_on(mv.get_dest()).map_or(0, piece_value);
            let attacker = board.piece_on(mv.get_source()).map_or(0, piece_value);
            Reverse(victim * 10 - attacker)
        });

        for mv in captures {
            let child = board.make_move_new(mv);
            let score = -self.quiescence(&child, -beta, -alpha, ply + 1);
            if self.aborted {
                return 0;
            }
            if score >= beta {
                self.stats.cutoffs += 1;
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INFINITY;
    use crate::search::SearchConfig;
    use std::str::FromStr;

    fn searcher() -> Searcher {
        Searcher::new(SearchConfig {
            tt_capacity: 1024,
            ..SearchConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_quiet_position_returns_stand_pat() {
        let board = Board::default();
        let mut searcher = searcher();

        let score = searcher.quiescence(&board, -INFINITY, INFINITY, 0);

        assert_eq!(score, evaluate(&board), "no captures, nothing to resolve");
    }

    #[test]
    fn test_hanging_queen_is_collected() {
        // exd5 wins a queen for nothing.
        let board = Board::from_str("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let mut searcher = searcher();

        let score = searcher.quiescence(&board, -INFINITY, INFINITY, 0);

        assert!(
            score >= evaluate(&board) + 700,
            "resolving the exchange must be worth about a queen, got {score}"
        );
    }

    #[test]
    fn test_stand_pat_respects_beta() {
        // The static score already clears the window, fail hard on beta.
        let board = Board::default();
        let mut searcher = searcher();

        assert_eq!(searcher.quiescence(&board, -200, -100, 0), -100);
    }

    #[test]
    fn test_losing_recapture_is_declined() {
        // Qxe5 would win a pawn but loses the queen to dxe5; black may
        // stand pat instead, so white's quiescence score from the parent
        // never banks the pawn.
        let board = Board::from_str("4k3/8/3p4/4p3/8/8/4Q3/4K3 w - - 0 1").unwrap();
        let mut searcher = searcher();

        let score = searcher.quiescence(&board, -INFINITY, INFINITY, 0);

        assert!(
            score <= evaluate(&board),
            "grabbing a defended pawn with the queen must not raise the score"
        );
    }

    #[test]
    fn test_checkmate_at_the_horizon_carries_its_ply() {
        // Black is already mated; seen three plies down the line the score
        // must say so, not claim a mate faster than mate-in-one.
        let board = Board::from_str("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        let mut searcher = searcher();

        let score = searcher.quiescence(&board, -INFINITY, INFINITY, 3);

        assert_eq!(score, -(MATE_SCORE - 3));
    }
}
