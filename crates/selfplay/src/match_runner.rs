//! Match runner for playing games between search strategies

use chess_core::{ChessResult, Color, Game, Outcome, PieceKind, Players};
use search_engine::{SearchEngine, Strategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MatchConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same result seen from the other side.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// Score notation, reading the result as white's.
    pub fn notation(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    MoveLimit,
}

/// One finished game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub white: Strategy,
    pub black: Strategy,
    /// From white's perspective
    pub result: GameResult,
    pub termination: Termination,
    /// Coordinate notation, e.g. `e2e4`
    pub moves: Vec<String>,
}

/// Result of a match, from the first strategy's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub first: Strategy,
    pub second: Strategy,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new(first: Strategy, second: Strategy) -> Self {
        Self {
            first,
            second,
            ..Default::default()
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// 1 per win, 0.5 per draw, over games played
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Counts `result` (first strategy's view) and keeps the game.
    pub fn record(&mut self, result: GameResult, game: GameRecord) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games.push(game);
    }
}

/// Runs matches between two strategies sharing one engine
pub struct MatchRunner {
    config: MatchConfig,
    engine: SearchEngine,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => SearchEngine::with_seed(seed),
            None => SearchEngine::new(),
        };
        Self { config, engine }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play `games` games between the configured strategies.
    ///
    /// Returns the result from the `white` strategy's perspective
    pub fn run_match(&mut self) -> ChessResult<MatchResult> {
        let first = self.config.white;
        let second = self.config.black;
        let mut result = MatchResult::new(first, second);

        for game_num in 0..self.config.games {
            let first_white = !self.config.alternate_colors || game_num % 2 == 0;

            let (record, game_result) = if first_white {
                let record = self.play_game(first, second)?;
                let game_result = record.result;
                (record, game_result)
            } else {
                // Flip result since the first strategy is black
                let record = self.play_game(second, first)?;
                let game_result = record.result.flipped();
                (record, game_result)
            };

            info!(
                game = game_num + 1,
                of = self.config.games,
                result = record.result.notation(),
                termination = ?record.termination,
                first_color = if first_white { "white" } else { "black" },
                "game finished"
            );
            result.record(game_result, record);
        }

        info!(
            wins = result.wins,
            losses = result.losses,
            draws = result.draws,
            "match finished"
        );
        Ok(result)
    }

    /// Play a single game, result from white's perspective
    pub fn play_game(&mut self, white: Strategy, black: Strategy) -> ChessResult<GameRecord> {
        let mut game = Game::new(Players::engines());
        info!(%white, %black, "game started");

        for _ply in 0..self.config.max_moves {
            if game.is_over() {
                break;
            }

            let color = game.next_player();
            let strategy = match color {
                Color::White => white,
                Color::Black => black,
            };
            let mv = self.engine.search(game.position(), color, strategy)?.best_move;
            game.play(mv.from, mv.to)?;

            if let Some(square) = game.promoting() {
                debug!(%square, "promoting to queen");
                game.promote(PieceKind::Queen)?;
            }
        }

        let (result, termination) = match game.outcome() {
            Some(Outcome::Checkmate { loser: Color::White }) => {
                (GameResult::Loss, Termination::Checkmate)
            }
            Some(Outcome::Checkmate { loser: Color::Black }) => {
                (GameResult::Win, Termination::Checkmate)
            }
            Some(Outcome::Stalemate) => (GameResult::Draw, Termination::Stalemate),
            None => (GameResult::Draw, Termination::MoveLimit),
        };

        Ok(GameRecord {
            white,
            black,
            result,
            termination,
            moves: game.moves().iter().map(|mv| mv.to_string()).collect(),
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
