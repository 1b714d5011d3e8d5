//! Match results storage and reporting

use std::fmt::Write as _;
use std::path::Path;

use crate::error::SelfplayError;
use crate::match_runner::MatchResult;

impl MatchResult {
    /// Save results to a pretty-printed JSON file
    pub fn save(&self, path: &Path) -> Result<(), SelfplayError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SelfplayError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from a JSON file
    pub fn load(path: &Path) -> Result<Self, SelfplayError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SelfplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "=== Match: {} vs {} ===\n", self.first, self.second);

        let _ = writeln!(
            report,
            "{:<5} {:<8} {:<8} {:<8} {:<11} {:>6}",
            "Game", "White", "Black", "Result", "Ended by", "Plies"
        );
        report.push_str(&"-".repeat(51));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            let _ = writeln!(
                report,
                "{:<5} {:<8} {:<8} {:<8} {:<11} {:>6}",
                i + 1,
                game.white.to_string(),
                game.black.to_string(),
                game.result.notation(),
                format!("{:?}", game.termination),
                game.moves.len()
            );
        }

        let _ = writeln!(
            report,
            "\n{}: {} wins, {} losses, {} draws",
            self.first, self.wins, self.losses, self.draws
        );
        let _ = write!(report, "Score: {:.1}%", self.score() * 100.0);
        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
