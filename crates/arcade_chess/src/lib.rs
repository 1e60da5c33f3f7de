pub mod board;
pub mod game;
pub mod log;
pub mod movegen;
pub mod rules;
pub mod scheduler;
pub mod types;

// Re-export the rules engine (not selector-specific)
pub use board::*;
pub use game::*;
pub use log::*;
pub use movegen::*;
pub use rules::*;
pub use scheduler::*;
pub use types::*;

// =============================================================================
// Selector trait - implemented by every computer player
// =============================================================================

/// Trait that computer players implement.
///
/// The controller asks for a move whenever a computer-controlled side is to
/// move. Returning `None` means the side has no legal move, which the
/// controller treats as a loss for that side.
pub trait MoveSelector {
    /// Pick a move for `side` on `board`.
    ///
    /// Implementations must only return moves that [`is_legal`] accepts.
    fn select_move(&mut self, board: &Board, side: Color) -> Option<Move>;

    /// Short name for logs
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
