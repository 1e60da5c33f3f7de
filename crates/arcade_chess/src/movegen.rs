use crate::{board::Board, rules::is_legal, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAG: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHO: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Squares a `kind` piece of `color` on `from` could geometrically reach.
///
/// Whose turn it is and same-color captures are ignored; run the results
/// through [`is_legal`] to filter. Sliders stop at, and include, the first
/// occupied square in each direction.
pub fn candidate_targets(board: &Board, from: Square, kind: PieceKind, color: Color) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    match kind {
        PieceKind::Pawn => gen_pawn(from, color, &mut out),
        PieceKind::Knight => gen_steps(from, &KNIGHT_DELTAS, &mut out),
        PieceKind::Bishop => gen_slider(board, from, &DIAG, &mut out),
        PieceKind::Rook => gen_slider(board, from, &ORTHO, &mut out),
        PieceKind::Queen => {
            gen_slider(board, from, &DIAG, &mut out);
            gen_slider(board, from, &ORTHO, &mut out);
        }
        PieceKind::King => gen_steps(from, &KING_DELTAS, &mut out),
    }
    out
}

fn gen_pawn(from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.forward();

    // forward 1
    out.extend(from.offset(dir, 0));
    // forward 2 from home rank
    if from.row == c.home_rank() {
        out.extend(from.offset(2 * dir, 0));
    }
    // both diagonals, occupied or not
    for dc in [-1, 1] {
        out.extend(from.offset(dir, dc));
    }
}

fn gen_steps(from: Square, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    out.extend(deltas.iter().filter_map(|&(dr, dc)| from.offset(dr, dc)));
}

fn gen_slider(board: &Board, from: Square, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            out.push(to);
            if !board.is_empty(to) {
                break;
            }
            cur = to;
        }
    }
}

/// Every legal move for `side`, in board order.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, pc) in board.pieces(side) {
        for to in candidate_targets(board, from, pc.kind, pc.color) {
            if is_legal(board, from, to, side) {
                out.push(Move::new(from, to));
            }
        }
    }
    out
}

/// Legal destinations for the piece on `from`, empty when it is not `side`'s.
pub fn legal_targets(board: &Board, from: Square, side: Color) -> Vec<Square> {
    match board.piece_at(from) {
        Some(pc) if pc.color == side => candidate_targets(board, from, pc.kind, pc.color)
            .into_iter()
            .filter(|&to| is_legal(board, from, to, side))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
