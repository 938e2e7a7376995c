//! Negamax alpha-beta search
//!
//! Plain recursion with a fail-hard window: a node never returns outside
//! `[alpha, beta]`. Positions are copy-made with `make_move_new`, so the
//! parent board is untouched and "unmake" is the child going out of scope
//! at every exit path. Mate scores are ply-adjusted at the node that sees
//! the mate, which makes a faster mate worth more than a slower one, and
//! are re-adjusted when they cross the transposition table (the table keeps
//! them root-relative).

use super::iterative::Searcher;
use super::ordering::order_moves;
use crate::constants::{DRAW_SCORE, MATE_SCORE};
use crate::tt::Bound;
use chess::{Board, ChessMove, MoveGen};

impl Searcher {
    /// Search `board` to `depth` plies within the fail-hard window
    /// `(alpha, beta)`. `ply` is the distance from the root.
    ///
    /// Returns 0 and sets the abort flag once the time budget runs out; the
    /// whole line unwinds on the flag and the driver discards the iteration.
    pub(crate) fn alphabeta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        ply: u8,
    ) -> i32 {
        if self.budget.expired() {
            self.aborted = true;
            return 0;
        }
        self.stats.nodes += 1;

        let key = board.get_hash();

        // A position already on the path from the root is a repetition draw.
        if ply > 0 && self.position_stack.contains(&key) {
            return DRAW_SCORE;
        }

        // Table probe. A depth-sufficient entry can answer the node outright
        // or tighten the window; a shallower one still donates its best move
        // as the ordering hint. The root never takes a probe cutoff, so a
        // completed iteration always settles on a move.
        let mut hint: Option<ChessMove> = None;
        if let Some(entry) = self.tt.probe(key) {
            hint = entry.best;
            if ply > 0 && entry.depth >= depth {
                self.stats.tt_hits += 1;
                let value = entry.score_at(ply);
                match entry.bound {
                    Bound::Exact => return value,
                    Bound::Lower => alpha = alpha.max(value),
                    Bound::Upper => beta = beta.min(value),
                }
                if alpha >= beta {
                    return value;
                }
            }
        }

        if depth == 0 {
            return self.quiescence(board, alpha, beta, ply);
        }

        let mut moves: Vec<ChessMove> = MoveGen::new_legal(board).collect();
        if moves.is_empty() {
            return if board.checkers().popcnt() > 0 {
                -(MATE_SCORE - i32::from(ply))
            } else {
                DRAW_SCORE
            };
        }
        order_moves(board, &mut moves, hint, ply);

        let original_alpha = alpha;
        let mut best = moves[0];

        self.position_stack.push(key);
        for mv in moves {
            let child = board.make_move_new(mv);
            let score = -self.alphabeta(&child, depth - 1, -beta, -alpha, ply + 1);
            if self.aborted {
                self.position_stack.pop();
                return 0;
            }
            if score >= beta {
                self.position_stack.pop();
                self.stats.cutoffs += 1;
                self.stats.tt_stores += 1;
                self.tt.store(key, beta, depth, Bound::Lower, Some(mv), ply);
                return beta;
            }
            if score > alpha {
                alpha = score;
                best = mv;
                if ply == 0 {
                    self.root_move = Some(mv);
                }
            }
        }
        self.position_stack.pop();

        let bound = if alpha > original_alpha {
            Bound::Exact
        } else {
            Bound::Upper
        };
        self.stats.tt_stores += 1;
        self.tt.store(key, alpha, depth, bound, Some(best), ply);
        alpha
    }
}
