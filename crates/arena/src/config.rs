//! Arena configuration, read from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ArenaError;

/// Settings for a self-play run. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies after which an unfinished game is abandoned
    pub max_plies: usize,
    /// Pause before each computer move, in milliseconds
    pub think_delay_ms: u64,
    /// Width of the greedy engine's random pick
    pub top_moves: usize,
    /// Base seed; game `i` uses `seed + i`. Drawn at random when absent.
    pub seed: Option<u64>,
    /// Where to write JSON results
    pub results_path: Option<PathBuf>,
    /// Print one line per finished game
    pub verbose: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 400,
            think_delay_ms: 0,
            top_moves: greedy_engine::DEFAULT_TOP_MOVES,
            seed: None,
            results_path: None,
            verbose: true,
        }
    }
}

impl ArenaConfig {
    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ArenaError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}
