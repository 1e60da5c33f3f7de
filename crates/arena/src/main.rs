//! Arena CLI
//!
//! Play greedy self-play games and report the results.

use anyhow::Context;
use arena::{ArenaConfig, SelfPlayRunner};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "arena", about = "Arcade chess self-play runner")]
struct Cli {
    /// TOML file with arena settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of games to play
    #[arg(short, long)]
    games: Option<u32>,

    /// Base seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Abandon games after this many plies
    #[arg(long)]
    max_plies: Option<usize>,

    /// Thinking pause before each computer move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Width of the random pick among the best moves
    #[arg(long)]
    top_moves: Option<usize>,

    /// Write JSON results here
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Only print the final report
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Command-line flags win over the config file.
    fn apply(self, mut config: ArenaConfig) -> ArenaConfig {
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
        if let Some(delay) = self.delay_ms {
            config.think_delay_ms = delay;
        }
        if let Some(top) = self.top_moves {
            config.top_moves = top;
        }
        if self.out.is_some() {
            config.results_path = self.out;
        }
        if self.quiet {
            config.verbose = false;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ArenaConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ArenaConfig::default(),
    };
    let config = cli.apply(config);

    let base_seed = config.seed.unwrap_or_else(rand::random);
    info!(base_seed, games = config.games, "starting self-play");

    let runner = SelfPlayRunner::new(config);
    let results = runner.run(base_seed);
    results.print_report();

    if let Some(path) = &runner.config().results_path {
        results
            .save(path)
            .with_context(|| format!("writing results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }

    Ok(())
}
