//! Static position evaluation
//!
//! Terminal states are decided first (checkmate, stalemate); everything else
//! is a weighted sum of material and piece-square tables, returned from the
//! side-to-move perspective. The king's middlegame table rewards staying
//! castled and penalizes early walks; once the material thins out into an
//! endgame the king switches to a centralization table and pawn advancement
//! earns an extra push toward promotion.

use crate::constants::{piece_value, DRAW_SCORE, MATE_SCORE};
use chess::{Board, BoardStatus, Color, Piece, Square};

/// Piece-square tables in centipawns, from white's perspective, indexed by
/// square (a1 = 0). Black reads them mirrored.

const PAWN_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-10, -5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];

const KNIGHT_PST: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

const BISHOP_PST: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

const ROOK_PST: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

const QUEEN_PST: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  5,  5,  5,  5,  5,  0,-10,
     0,  0,  5,  5,  5,  5,  0, -5,
    -5,  0,  5,  5,  5,  5,  0, -5,
   -10,  0,  5,  5,  5,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

const KING_PST_MIDDLEGAME: [i32; 64] = [
    20, 30, 10,  0,  0, 10, 30, 20,
    20, 20,  0,  0,  0,  0, 20, 20,
   -10,-20,-20,-20,-20,-20,-20,-10,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
];

const KING_PST_ENDGAME: [i32; 64] = [
   -50,-30,-30,-30,-30,-30,-30,-50,
   -30,-30,  0,  0,  0,  0,-30,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-20,-10,  0,  0,-10,-20,-30,
   -50,-40,-30,-20,-20,-30,-40,-50,
];

/// Extra centipawns per rank a pawn has advanced, endgame only.
const PAWN_ADVANCE_ENDGAME: i32 = 6;

/// Evaluate the position from the side-to-move perspective.
///
/// Terminal short-circuits come first: the side to move being checkmated is
/// the extreme negative sentinel, stalemate is a dead draw. These take
/// priority over any heuristic term.
pub fn evaluate(board: &Board) -> i32 {
    match board.status() {
        BoardStatus::Checkmate => return -MATE_SCORE,
        BoardStatus::Stalemate => return DRAW_SCORE,
        BoardStatus::Ongoing => {}
    }

    let endgame = is_endgame(board);
    let mut white_score = 0i32;

    for square in *board.combined() {
        let piece = match board.piece_on(square) {
            Some(piece) => piece,
            None => continue,
        };
        let color = match board.color_on(square) {
            Some(color) => color,
            None => continue,
        };

        let mut score = piece_value(piece) + pst_value(piece, square, color, endgame);
        if endgame && piece == Piece::Pawn {
            score += PAWN_ADVANCE_ENDGAME * pawn_progress(square, color);
        }

        white_score += if color == Color::White { score } else { -score };
    }

    match board.side_to_move() {
        Color::White => white_score,
        Color::Black => -white_score,
    }
}

/// Positional bonus for `piece` of `color` on `square`.
fn pst_value(piece: Piece, square: Square, color: Color, endgame: bool) -> i32 {
    // Black sees the board upside down.
    let index = match color {
        Color::White => square.to_index(),
        Color::Black => 63 - square.to_index(),
    };

    match piece {
        Piece::Pawn => PAWN_PST[index],
        Piece::Knight => KNIGHT_PST[index],
        Piece::Bishop => BISHOP_PST[index],
        Piece::Rook => ROOK_PST[index],
        Piece::Queen => QUEEN_PST[index],
        Piece::King => {
            if endgame {
                KING_PST_ENDGAME[index]
            } else {
                KING_PST_MIDDLEGAME[index]
            }
        }
    }
}

/// Ranks a pawn has advanced from its starting rank (0..=5).
fn pawn_progress(square: Square, color: Color) -> i32 {
    let rank = square.get_rank().to_index() as i32;
    match color {
        Color::White => rank - 1,
        Color::Black => 6 - rank,
    }
}

/// Endgame once the queens are off or very few pieces remain.
pub fn is_endgame(board: &Board) -> bool {
    let queens = board.pieces(Piece::Queen).popcnt();
    let others = board.pieces(Piece::Knight).popcnt()
        + board.pieces(Piece::Bishop).popcnt()
        + board.pieces(Piece::Rook).popcnt();

    queens == 0 || queens + others <= 6
}
