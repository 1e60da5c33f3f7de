//! Whole-board checks of the movement rules.
//!
//! Each property is checked for every from/to pair on a handful of
//! positions rather than a single hand-picked move.

use arcade_chess::{Board, Color, PieceKind, Square, is_legal, legal_moves, path_clear};

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
    "4k3/8/2n5/8/3Q4/5p2/1P6/4K3",
    "8/8/8/8/8/8/8/8",
];

fn boards() -> Vec<Board> {
    POSITIONS
        .iter()
        .map(|p| Board::from_placement(p).unwrap())
        .collect()
}

fn pairs() -> impl Iterator<Item = (Square, Square)> {
    Square::all().flat_map(|from| Square::all().map(move |to| (from, to)))
}

fn delta(from: Square, to: Square) -> (i8, i8) {
    (
        to.row as i8 - from.row as i8,
        to.col as i8 - from.col as i8,
    )
}

#[test]
fn pawn_never_moves_forward_onto_a_piece_or_diagonally_onto_nothing() {
    for b in boards() {
        for (from, to) in pairs() {
            let Some(pc) = b.piece_at(from) else { continue };
            if pc.kind != PieceKind::Pawn || !is_legal(&b, from, to, pc.color) {
                continue;
            }
            let (_, dc) = delta(from, to);
            if dc == 0 {
                assert!(b.is_empty(to), "pawn {from}->{to} moved onto a piece");
            } else {
                assert!(!b.is_empty(to), "pawn {from}->{to} moved diagonally to nothing");
            }
        }
    }
}

#[test]
fn sliders_are_blocked_by_anything_in_between() {
    for b in boards() {
        for (from, to) in pairs() {
            let Some(pc) = b.piece_at(from) else { continue };
            if !pc.kind.is_slider() {
                continue;
            }
            if is_legal(&b, from, to, pc.color) {
                assert!(path_clear(&b, from, to), "{from}->{to} jumped a piece");
            }
        }
    }
}

#[test]
fn knight_legality_depends_only_on_shape() {
    for b in boards() {
        for (from, to) in pairs() {
            let Some(pc) = b.piece_at(from) else { continue };
            if pc.kind != PieceKind::Knight {
                continue;
            }
            let (dr, dc) = delta(from, to);
            let shape = matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1));
            let own = matches!(b.piece_at(to), Some(t) if t.color == pc.color);
            assert_eq!(is_legal(&b, from, to, pc.color), shape && !own);
        }
    }
}

#[test]
fn king_moves_exactly_one_step() {
    for b in boards() {
        for (from, to) in pairs() {
            let Some(pc) = b.piece_at(from) else { continue };
            if pc.kind != PieceKind::King {
                continue;
            }
            let (dr, dc) = delta(from, to);
            let own = matches!(b.piece_at(to), Some(t) if t.color == pc.color);
            assert_eq!(
                is_legal(&b, from, to, pc.color),
                dr.abs().max(dc.abs()) == 1 && !own
            );
        }
    }
}

#[test]
fn generated_moves_match_brute_force_legality() {
    for b in boards() {
        for side in [Color::White, Color::Black] {
            let mut generated = legal_moves(&b, side);
            let mut brute: Vec<_> = pairs()
                .filter(|&(from, to)| is_legal(&b, from, to, side))
                .map(|(from, to)| arcade_chess::Move::new(from, to))
                .collect();
            generated.sort_by_key(|m| (m.from.row, m.from.col, m.to.row, m.to.col));
            brute.sort_by_key(|m| (m.from.row, m.from.col, m.to.row, m.to.col));
            assert_eq!(generated, brute);
        }
    }
}

#[test]
fn scenario_double_step_from_home_rank() {
    let b = Board::new();
    assert!(is_legal(&b, Square::new(6, 4), Square::new(4, 4), Color::White));
}

#[test]
fn scenario_black_piece_on_whites_turn() {
    let b = Board::new();
    for (from, to) in pairs() {
        if matches!(b.piece_at(from), Some(pc) if pc.color == Color::Black) {
            assert!(!is_legal(&b, from, to, Color::White));
        }
    }
}

#[test]
fn scenario_rook_blocked_by_own_pawn() {
    let b = Board::new();
    assert!(!is_legal(&b, Square::new(7, 0), Square::new(5, 0), Color::White));
}
