//! Move legality for arcade chess.
//!
//! Moves are judged on geometry and occupancy alone. There is no check
//! concept: leaving your own king en prise is legal, and the game ends when a
//! king is actually captured. Castling, en passant and promotion do not exist.

use crate::board::Board;
use crate::types::*;

/// Whether `side_to_move` may play `from -> to`.
///
/// Checks run in order and stop at the first failure: both squares are on
/// the board, a piece of the mover stands on `from`, the destination does not
/// hold one of the mover's own pieces, and the move fits the piece's geometry.
pub fn is_legal(board: &Board, from: Square, to: Square, side_to_move: Color) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let pc = match board.piece_at(from) {
        Some(p) if p.color == side_to_move => p,
        _ => return false,
    };
    if let Some(target) = board.piece_at(to)
        && target.color == side_to_move
    {
        return false;
    }

    let dr = to.row as i8 - from.row as i8;
    let dc = to.col as i8 - from.col as i8;

    match pc.kind {
        PieceKind::Pawn => pawn_ok(board, from, to, pc.color, dr, dc),
        PieceKind::Knight => knight_ok(dr, dc),
        PieceKind::Bishop => bishop_ok(board, from, to, dr, dc),
        PieceKind::Rook => rook_ok(board, from, to, dr, dc),
        PieceKind::Queen => bishop_ok(board, from, to, dr, dc) || rook_ok(board, from, to, dr, dc),
        PieceKind::King => king_ok(dr, dc),
    }
}

fn pawn_ok(board: &Board, from: Square, to: Square, c: Color, dr: i8, dc: i8) -> bool {
    let dir = c.forward();

    if dc == 0 {
        if dr == dir {
            return board.is_empty(to);
        }
        if from.row == c.home_rank() && dr == 2 * dir {
            return match from.offset(dir, 0) {
                Some(mid) => board.is_empty(mid) && board.is_empty(to),
                None => false,
            };
        }
        return false;
    }

    // diagonal capture
    dc.abs() == 1
        && dr == dir
        && matches!(board.piece_at(to), Some(pc) if pc.color != c)
}

fn knight_ok(dr: i8, dc: i8) -> bool {
    matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
}

fn bishop_ok(board: &Board, from: Square, to: Square, dr: i8, dc: i8) -> bool {
    dr != 0 && dr.abs() == dc.abs() && path_clear(board, from, to)
}

fn rook_ok(board: &Board, from: Square, to: Square, dr: i8, dc: i8) -> bool {
    ((dr == 0) ^ (dc == 0)) && path_clear(board, from, to)
}

fn king_ok(dr: i8, dc: i8) -> bool {
    dr.abs().max(dc.abs()) == 1
}

/// True when no piece stands strictly between `from` and `to`.
///
/// Walks one unit step at a time along the line joining the two squares, so
/// it is only meaningful for straight or diagonal lines.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_r = (to.row as i8 - from.row as i8).signum();
    let step_c = (to.col as i8 - from.col as i8).signum();

    let mut cur = from;
    loop {
        cur = match cur.offset(step_r, step_c) {
            Some(s) => s,
            None => return true,
        };
        if cur == to {
            return true;
        }
        if !board.is_empty(cur) {
            return false;
        }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
