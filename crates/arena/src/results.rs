//! Self-play results storage and reporting

use arcade_chess::{Color, MoveRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// How a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    KingCaptured,
    /// The side to move had no legal move and lost
    NoMoves,
    /// Abandoned at the configured ply limit
    PlyLimit,
}

/// One finished (or abandoned) game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub index: u32,
    pub seed: u64,
    pub winner: Option<Color>,
    pub ending: Ending,
    pub moves: Vec<MoveRecord>,
}

impl GameRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Complete run results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaResults {
    pub engine: String,
    pub base_seed: u64,
    pub config: ArenaConfig,
    pub games: Vec<GameRecord>,
}

impl ArenaResults {
    pub fn new(engine: &str, base_seed: u64, config: ArenaConfig) -> Self {
        Self {
            engine: engine.to_string(),
            base_seed,
            config,
            games: Vec::new(),
        }
    }

    pub fn add_game(&mut self, game: GameRecord) {
        self.games.push(game);
    }

    pub fn wins(&self, color: Color) -> usize {
        self.games
            .iter()
            .filter(|g| g.winner == Some(color))
            .count()
    }

    pub fn count(&self, ending: Ending) -> usize {
        self.games.iter().filter(|g| g.ending == ending).count()
    }

    pub fn average_plies(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        let total: usize = self.games.iter().map(GameRecord::plies).sum();
        total as f64 / self.games.len() as f64
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ArenaError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Self-play: {} ===\n\n", self.engine));
        report.push_str(&format!(
            "Config: {} games, top {} moves, ply limit {}, base seed {}\n\n",
            self.config.games, self.config.top_moves, self.config.max_plies, self.base_seed
        ));

        report.push_str(&format!(
            "{:<6} {:<12} {:<8} {:<14} {:>6}\n",
            "Game", "Seed", "Winner", "Ending", "Plies"
        ));
        report.push_str(&"-".repeat(50));
        report.push('\n');

        for g in &self.games {
            let winner = g.winner.map_or_else(|| "-".to_string(), |c| c.to_string());
            report.push_str(&format!(
                "{:<6} {:<12} {:<8} {:<14} {:>6}\n",
                g.index + 1,
                g.seed,
                winner,
                format!("{:?}", g.ending),
                g.plies()
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "White wins: {}, Black wins: {}, unfinished: {}\n",
            self.wins(Color::White),
            self.wins(Color::Black),
            self.count(Ending::PlyLimit)
        ));
        report.push_str(&format!(
            "King captures: {}, no-move losses: {}, average plies: {:.1}\n",
            self.count(Ending::KingCaptured),
            self.count(Ending::NoMoves),
            self.average_plies()
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
