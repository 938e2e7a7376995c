//! Move ordering for alpha-beta pruning
//!
//! Scores and sorts a move list so the moves most likely to cause a cutoff
//! are searched first. The principal move recorded for the position always
//! goes first; captures land in one of two bands depending on whether the
//! trade looks safe; quiet promotions, castling and early king walks get
//! small nudges. Ties keep generation order (the sort is stable), which
//! only affects pruning efficiency, never the result.

use crate::constants::{
    piece_value, EARLY_KING_PLY, ORDER_CAPTURE_BAD, ORDER_CAPTURE_GOOD, ORDER_CASTLE,
    ORDER_EARLY_KING_PENALTY, ORDER_PRINCIPAL, ORDER_PROMOTION,
};
use chess::{Board, ChessMove, Color, Piece, Square};
use std::cmp::Reverse;

/// Sort `moves` in descending search priority.
pub(crate) fn order_moves(
    board: &Board,
    moves: &mut [ChessMove],
    principal: Option<ChessMove>,
    ply: u8,
) {
    moves.sort_by_cached_key(|mv| Reverse(score_move(board, *mv, principal, ply)));
}

/// Heuristic priority of a single move; higher is searched first.
fn score_move(board: &Board, mv: ChessMove, principal: Option<ChessMove>, ply: u8) -> i32 {
    if principal == Some(mv) {
        return ORDER_PRINCIPAL;
    }

    let mut score = 0;
    let mover = board.piece_on(mv.get_source()).unwrap_or(Piece::Pawn);

    if let Some(victim) = board.piece_on(mv.get_dest()) {
        let delta = piece_value(victim) - piece_value(mover);
        let defended = is_attacked_by(board, mv.get_dest(), !board.side_to_move());
        // Undefended target or an even/winning trade goes in the high band;
        // grabbing a defended piece with a bigger one goes in the low band.
        let tier = if !defended || delta >= 0 {
            ORDER_CAPTURE_GOOD
        } else {
            ORDER_CAPTURE_BAD
        };
        score += tier + delta;
    } else if mv.get_promotion().is_some() {
        score += ORDER_PROMOTION;
    }

    if mover == Piece::King {
        if is_castle(board, mv) {
            score += ORDER_CASTLE;
        } else if ply < EARLY_KING_PLY {
            score += ORDER_EARLY_KING_PENALTY;
        }
    }

    score
}

/// A king moving two files can only be castling.
pub(crate) fn is_castle(board: &Board, mv: ChessMove) -> bool {
    board.piece_on(mv.get_source()) == Some(Piece::King)
        && file_distance(mv.get_source(), mv.get_dest()) >= 2
}

fn file_distance(a: Square, b: Square) -> i32 {
    (a.get_file().to_index() as i32 - b.get_file().to_index() as i32).abs()
}

/// Whether any piece of `attacker` attacks `square`, composed from the rules
/// library's attack lookups over the current occupancy.
pub(crate) fn is_attacked_by(board: &Board, square: Square, attacker: Color) -> bool {
    let theirs = *board.color_combined(attacker);
    let occupied = *board.combined();

    // A pawn of `attacker` attacks `square` exactly when a pawn of the other
    // color standing on `square` would attack it back. The lookup masks
    // against its blockers argument, so hand it the attacker's pawns.
    let their_pawns = *board.pieces(Piece::Pawn) & theirs;
    if chess::get_pawn_attacks(square, !attacker, their_pawns).popcnt() > 0 {
        return true;
    }
    if (chess::get_knight_moves(square) & *board.pieces(Piece::Knight) & theirs).popcnt() > 0 {
        return true;
    }
    if (chess::get_king_moves(square) & *board.pieces(Piece::King) & theirs).popcnt() > 0 {
        return true;
    }

    let diagonal = *board.pieces(Piece::Bishop) | *board.pieces(Piece::Queen);
    if (chess::get_bishop_moves(square, occupied) & diagonal & theirs).popcnt() > 0 {
        return true;
    }
    let straight = *board.pieces(Piece::Rook) | *board.pieces(Piece::Queen);
    (chess::get_rook_moves(square, occupied) & straight & theirs).popcnt() > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::MoveGen;
    use std::str::FromStr;

    fn legal_moves(board: &Board) -> Vec<ChessMove> {
        MoveGen::new_legal(board).collect()
    }

    #[test]
    fn test_principal_move_is_ordered_first() {
        let board = Board::default();
        let mut moves = legal_moves(&board);
        let principal = *moves.last().unwrap();

        order_moves(&board, &mut moves, Some(principal), 0);

        assert_eq!(moves[0], principal, "principal move must be searched first");
    }

    #[test]
    fn test_even_capture_outranks_losing_capture() {
        // Rxa8 is an even rook trade; Qxf7 grabs a king-defended pawn.
        let board = Board::from_str("r3k3/5p2/8/7Q/8/8/8/R3K3 w - - 0 1").unwrap();
        let mut moves = legal_moves(&board);
        order_moves(&board, &mut moves, None, 0);

        let rook_trade = ChessMove::new(Square::A1, Square::A8, None);
        let pawn_grab = ChessMove::new(Square::H5, Square::F7, None);
        let trade_at = moves.iter().position(|m| *m == rook_trade).unwrap();
        let grab_at = moves.iter().position(|m| *m == pawn_grab).unwrap();

        assert!(trade_at < grab_at, "even trade must come before losing grab");
        assert_eq!(trade_at, 0, "the best capture must lead the list");
    }

    #[test]
    fn test_pawn_defended_piece_drops_to_the_low_band() {
        // Rxe5 wins a knight but the d6 pawn recaptures; Bxh7 takes a free
        // pawn. The defended grab must sort below the free one.
        let board = Board::from_str("4k3/7p/3p4/4n3/8/8/2B5/4R1K1 w - - 0 1").unwrap();
        let mut moves = legal_moves(&board);
        order_moves(&board, &mut moves, None, 0);

        let free_pawn = ChessMove::new(Square::C2, Square::H7, None);
        let defended_knight = ChessMove::new(Square::E1, Square::E5, None);
        let free_at = moves.iter().position(|m| *m == free_pawn).unwrap();
        let defended_at = moves.iter().position(|m| *m == defended_knight).unwrap();

        assert!(
            free_at < defended_at,
            "a pawn defender must demote the capture to the low band"
        );
    }

    #[test]
    fn test_quiet_promotion_outranks_quiet_moves() {
        let board = Board::from_str("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let mut moves = legal_moves(&board);
        order_moves(&board, &mut moves, None, 0);

        assert!(
            moves[0].get_promotion().is_some(),
            "a promotion must be tried before king shuffles"
        );
    }

    #[test]
    fn test_castling_outranks_early_king_walk() {
        let board = Board::from_str("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let mut moves = legal_moves(&board);
        order_moves(&board, &mut moves, None, 0);

        let castle = ChessMove::new(Square::E1, Square::G1, None);
        assert_eq!(moves[0], castle, "castling must be tried first");

        let walk = ChessMove::new(Square::E1, Square::F1, None);
        let walk_at = moves.iter().position(|m| *m == walk).unwrap();
        let last_rook = moves
            .iter()
            .rposition(|m| board.piece_on(m.get_source()) == Some(Piece::Rook))
            .unwrap();
        assert!(
            walk_at > last_rook,
            "an early king walk must sort behind quiet rook moves"
        );
    }

    #[test]
    fn test_ties_keep_generation_order() {
        // Startposition: no captures, no promotions, no king moves, so every
        // move scores zero and the stable sort must not reshuffle anything.
        let board = Board::default();
        let generated = legal_moves(&board);
        let mut moves = generated.clone();
        order_moves(&board, &mut moves, None, 0);

        assert_eq!(moves, generated);
    }

    #[test]
    fn test_attack_query_sees_every_piece_kind() {
        let board =
            Board::from_str("4k3/8/2n5/8/3P4/8/8/4K2R b - - 0 1").unwrap();
        // The knight on c6 attacks d4; the pawn on d4 attacks c5 and e5.
        assert!(is_attacked_by(&board, Square::D4, Color::Black));
        assert!(is_attacked_by(&board, Square::C5, Color::White));
        assert!(is_attacked_by(&board, Square::E5, Color::White));
        // The rook on h1 sweeps the first rank up to the king.
        assert!(is_attacked_by(&board, Square::F1, Color::White));
        assert!(!is_attacked_by(&board, Square::A8, Color::White));
    }
}
