//! Self-play runner: drives the controller in computer-vs-computer mode and
//! plays the part of the host event loop's timer.

use arcade_chess::{Game, GameConfig, GameMode, MoveSelector, QueueScheduler, TurnState};
use greedy_engine::{GreedyConfig, GreedyEngine};
use tracing::{debug, info, warn};

use crate::config::ArenaConfig;
use crate::results::{ArenaResults, Ending, GameRecord};

/// Plays a series of greedy self-play games
pub struct SelfPlayRunner {
    config: ArenaConfig,
}

impl SelfPlayRunner {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Play every configured game from `base_seed`.
    pub fn run(&self, base_seed: u64) -> ArenaResults {
        let engine_name = self.engine(base_seed).name().to_string();
        let mut results = ArenaResults::new(&engine_name, base_seed, self.config.clone());

        for index in 0..self.config.games {
            let seed = base_seed.wrapping_add(u64::from(index));
            let record = self.play_game(index, seed);

            if self.config.verbose {
                let winner = record
                    .winner
                    .map_or_else(|| "none".to_string(), |c| c.to_string());
                println!(
                    "Game {}/{}: winner {} by {:?} after {} plies",
                    index + 1,
                    self.config.games,
                    winner,
                    record.ending,
                    record.plies()
                );
            }
            results.add_game(record);
        }

        info!(
            games = results.games.len(),
            white = results.wins(arcade_chess::Color::White),
            black = results.wins(arcade_chess::Color::Black),
            "self-play finished"
        );
        results
    }

    /// Play one game to completion or to the ply limit.
    pub fn play_game(&self, index: u32, seed: u64) -> GameRecord {
        let game_config = GameConfig {
            think_delay_ms: self.config.think_delay_ms,
            mode: GameMode::ComputerVsComputer,
        };
        let mut game = Game::new(self.engine(seed), QueueScheduler::new(), game_config);

        while game.log().len() < self.config.max_plies {
            let Some(due) = game.scheduler_mut().next_due() else {
                warn!(index, "no computer turn pending; stopping game");
                break;
            };
            if !due.delay.is_zero() {
                std::thread::sleep(due.delay);
            }
            if !game.on_think(due.ticket) {
                debug!(index, "stale ticket skipped");
                continue;
            }
            if matches!(game.status().turn_state, TurnState::GameOver(_)) {
                break;
            }
        }

        let status = game.status();
        let ending = match status.turn_state {
            TurnState::GameOver(_) => match game.last_move() {
                Some(rec) if rec.captured_king() => Ending::KingCaptured,
                _ => Ending::NoMoves,
            },
            _ => Ending::PlyLimit,
        };

        GameRecord {
            index,
            seed,
            winner: status.winner,
            ending,
            moves: game.log().iter().copied().collect(),
        }
    }

    fn engine(&self, seed: u64) -> GreedyEngine {
        GreedyEngine::seeded(seed).with_config(GreedyConfig {
            top_moves: self.config.top_moves,
        })
    }
}
