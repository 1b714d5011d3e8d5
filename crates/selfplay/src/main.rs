//! Self-play CLI
//!
//! Run a match between two search strategies and report the result.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use selfplay::{MatchConfig, MatchRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-chess Self-Play Runner");
    println!();
    println!("Usage:");
    println!("  selfplay [config.toml]");
    println!();
    println!("Config keys (all optional):");
    println!("  games = 2              - games to play");
    println!("  max_moves = 200        - plies before a game is drawn");
    println!("  seed = 7               - seed for the random strategy");
    println!("  white = \"greedy\"       - random | greedy | minimax");
    println!("  black = \"random\"");
    println!("  alternate_colors = true");
    println!("  output = \"results.json\"");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if matches!(
        args.get(1).map(String::as_str),
        Some("help" | "--help" | "-h")
    ) {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let config_path = args.get(1).map(Path::new);
    let config = MatchConfig::load_or_default(config_path).context("Failed to load match config")?;
    info!(?config, "starting match");

    let output = config.output.clone();
    let mut runner = MatchRunner::new(config);
    let result = runner.run_match().context("Match aborted")?;

    println!();
    println!("{}", result.report());

    if let Some(path) = output {
        result
            .save(&path)
            .with_context(|| format!("Failed to save results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }

    Ok(())
}
