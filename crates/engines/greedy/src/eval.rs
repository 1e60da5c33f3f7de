use arcade_chess::{Board, Move, Square};

/// Score of a single candidate move. Higher is better.
///
/// Every move starts at 1. Capturing adds ten times the victim's value, and
/// the destination earns up to 1.75 more the closer it is to the middle of the
/// board.
pub fn score_move(board: &Board, mv: Move) -> f64 {
    1.0 + capture_bonus(board, mv) + center_bonus(mv.to)
}

/// Ten times the value of the piece standing on the destination, if any.
pub fn capture_bonus(board: &Board, mv: Move) -> f64 {
    match (board.piece_at(mv.from), board.piece_at(mv.to)) {
        (Some(mover), Some(victim)) if victim.color != mover.color => {
            f64::from(victim.kind.value()) * 10.0
        }
        _ => 0.0,
    }
}

/// 0.25 anywhere on the rim up to 1.75 on the four central squares.
pub fn center_bonus(to: Square) -> f64 {
    let dr = (3.5 - f64::from(to.row)).abs();
    let dc = (3.5 - f64::from(to.col)).abs();
    (4.0 - dr.max(dc)) * 0.5
}
