//! Self-play arena for arcade chess
//!
//! A headless host for the turn controller. It supplies the timer the
//! controller schedules computer turns on, plays the greedy engine against
//! itself, and reports how the games ended.
//!
//! # Usage
//!
//! ```bash
//! # 20 games from a fixed seed, results written as JSON
//! cargo run -p arena -- --games 20 --seed 7 --out results.json
//!
//! # Settings from a file, with a visible thinking pause
//! cargo run -p arena -- --config arena.toml --delay-ms 250
//! ```

mod config;
mod error;
mod results;
mod runner;

pub use config::*;
pub use error::*;
pub use results::*;
pub use runner::*;
