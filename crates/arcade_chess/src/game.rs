//! Turn and mode controller.
//!
//! `Game` owns the board and move log and is the only thing that mutates
//! them. Input arrives as square selections from a UI and as think tickets
//! coming back from the host scheduler.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::MoveSelector;
use crate::board::Board;
use crate::log::{MoveLog, MoveRecord};
use crate::movegen::{legal_moves, legal_targets};
use crate::rules::is_legal;
use crate::scheduler::{CancelHandle, Scheduler, ThinkTicket};
use crate::types::*;

/// Who controls which side. The human always plays White.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    HumanVsComputer,
    ComputerVsComputer,
}

impl GameMode {
    pub fn is_computer(self, c: Color) -> bool {
        match self {
            GameMode::HumanVsComputer => c == Color::Black,
            GameMode::ComputerVsComputer => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    AwaitingSelection,
    PieceSelected(Square),
    ComputerThinking,
    GameOver(Color),
}

/// Snapshot of where the game stands, for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub turn_state: TurnState,
    pub side_to_move: Color,
    pub winner: Option<Color>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pause before a computer move so the UI can show it is thinking
    pub think_delay_ms: u64,
    /// Mode a fresh controller starts in
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: 500,
            mode: GameMode::HumanVsComputer,
        }
    }
}

impl GameConfig {
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

pub struct Game<E, S> {
    board: Board,
    log: MoveLog,
    side_to_move: Color,
    mode: GameMode,
    state: TurnState,
    /// Bumped on every scheduled computer turn; only the latest ticket is honoured.
    generation: u64,
    expected: Option<ThinkTicket>,
    pending: Option<CancelHandle>,
    config: GameConfig,
    engine: E,
    scheduler: S,
}

impl<E: MoveSelector, S: Scheduler> Game<E, S> {
    pub fn new(engine: E, scheduler: S, config: GameConfig) -> Self {
        Self::with_position(engine, scheduler, config, Board::new(), Color::White)
    }

    /// Start from an arbitrary position instead of the standard layout.
    /// `new_game` still resets to the standard layout.
    pub fn with_position(
        engine: E,
        scheduler: S,
        config: GameConfig,
        board: Board,
        side_to_move: Color,
    ) -> Self {
        let mut game = Game {
            board,
            log: MoveLog::new(),
            side_to_move,
            mode: config.mode,
            state: TurnState::AwaitingSelection,
            generation: 0,
            expected: None,
            pending: None,
            config,
            engine,
            scheduler,
        };
        game.hand_over();
        game
    }

    /// Throw away the current game and set up the starting position.
    /// Any computer turn still pending is cancelled.
    pub fn new_game(&mut self) {
        self.cancel_pending();
        self.board.reset();
        self.log = MoveLog::new();
        self.side_to_move = Color::White;
        self.state = TurnState::AwaitingSelection;
        self.engine.new_game();
        info!(mode = ?self.mode, engine = self.engine.name(), "new game");
        self.hand_over();
    }

    /// The only input event: a human clicked `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinates are off the board.
    pub fn select_square(&mut self, row: u8, col: u8) {
        let sq = Square::new(row, col);
        match self.state {
            TurnState::AwaitingSelection => {
                if self.selectable(sq) {
                    self.state = TurnState::PieceSelected(sq);
                }
            }
            TurnState::PieceSelected(sel) => {
                if sq == sel {
                    self.state = TurnState::AwaitingSelection;
                } else if is_legal(&self.board, sel, sq, self.side_to_move) {
                    self.play(sel, sq);
                } else if self.selectable(sq) {
                    self.state = TurnState::PieceSelected(sq);
                } else {
                    self.state = TurnState::AwaitingSelection;
                }
            }
            TurnState::ComputerThinking | TurnState::GameOver(_) => {}
        }
    }

    /// Switch who controls the sides. The board is kept; a pending computer
    /// turn is dropped and rescheduled if a computer is still to move.
    pub fn set_mode(&mut self, mode: GameMode) {
        if mode == self.mode {
            return;
        }
        info!(from = ?self.mode, to = ?mode, "mode switch");
        self.mode = mode;
        if matches!(self.state, TurnState::GameOver(_)) {
            return;
        }
        self.cancel_pending();
        self.hand_over();
    }

    /// Host timer callback. Returns false when the ticket is stale and
    /// nothing happened.
    pub fn on_think(&mut self, ticket: ThinkTicket) -> bool {
        if self.expected != Some(ticket) || self.state != TurnState::ComputerThinking {
            debug!(generation = ticket.generation, "ignoring stale think ticket");
            return false;
        }
        self.expected = None;
        self.pending = None;

        let side = self.side_to_move;
        match self.engine.select_move(&self.board, side) {
            Some(mv) => {
                assert!(
                    is_legal(&self.board, mv.from, mv.to, side),
                    "{} proposed illegal move {mv}",
                    self.engine.name()
                );
                self.play(mv.from, mv.to);
            }
            None => {
                info!(side = %side, "no legal moves");
                self.finish(side.other());
            }
        }
        true
    }

    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        let winner = match self.state {
            TurnState::GameOver(w) => Some(w),
            _ => None,
        };
        Status {
            turn_state: self.state,
            side_to_move: self.side_to_move,
            winner,
        }
    }

    pub fn move_log(&self, limit: usize) -> &[MoveRecord] {
        self.log.last_n(limit)
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.log.last()
    }

    /// Legal destinations for the selected piece, for move hints.
    pub fn selected_targets(&self) -> Vec<Square> {
        match self.state {
            TurnState::PieceSelected(sq) => legal_targets(&self.board, sq, self.side_to_move),
            _ => Vec::new(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn selectable(&self, sq: Square) -> bool {
        !self.mode.is_computer(self.side_to_move)
            && matches!(self.board.piece_at(sq), Some(pc) if pc.color == self.side_to_move)
    }

    fn play(&mut self, from: Square, to: Square) {
        let rec = self.board.commit_move(from, to);
        debug!(ply = self.log.len() + 1, "{rec}");
        self.log.push(rec);

        if rec.captured_king() {
            self.finish(rec.color);
            return;
        }
        self.side_to_move = self.side_to_move.other();
        self.hand_over();
    }

    /// Enter the state appropriate for whoever is now to move.
    fn hand_over(&mut self) {
        let side = self.side_to_move;
        if self.mode.is_computer(side) {
            self.state = TurnState::ComputerThinking;
            self.generation += 1;
            let ticket = ThinkTicket {
                generation: self.generation,
            };
            self.expected = Some(ticket);
            self.pending = Some(self.scheduler.schedule(self.config.think_delay(), ticket));
        } else if legal_moves(&self.board, side).is_empty() {
            info!(side = %side, "no legal moves");
            self.finish(side.other());
        } else {
            self.state = TurnState::AwaitingSelection;
        }
    }

    fn finish(&mut self, winner: Color) {
        info!(winner = %winner, plies = self.log.len(), "game over");
        self.state = TurnState::GameOver(winner);
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.expected = None;
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
