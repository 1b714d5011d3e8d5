//! Self-play runner
//!
//! Plays search strategies against each other from the starting position
//! and records the results:
//! - [`MatchConfig`] is read from TOML, every key optional
//! - [`MatchRunner`] plays the games through a [`chess_core::Game`]
//! - [`MatchResult`] is written as JSON and rendered as a text report
//!
//! # Usage
//!
//! ```bash
//! # Defaults: two games, greedy vs random
//! cargo run -p selfplay
//!
//! # From a config file
//! cargo run -p selfplay -- crates/selfplay/selfplay.toml
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
