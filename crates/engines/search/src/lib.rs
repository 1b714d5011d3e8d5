//! Search Engine
//!
//! Picks a move for the automated side. Candidates are gathered into an
//! accumulator first, then one of three strategies chooses among them:
//! - [`Strategy::Random`]: uniform over the candidates
//! - [`Strategy::Greedy`]: best material right after the move
//! - [`Strategy::Minimax`]: best material after the opponent's best reply
//!
//! Scores are always from the chooser's point of view, which the caller
//! fixes with a coefficient of +1 for white and -1 for black.

use std::fmt;
use std::str::FromStr;

use chess_core::{legal_moves_into, ChessError, ChessResult, Color, Move, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub mod eval;
pub mod search;

pub use eval::{evaluate, DRAW_SCORE, WIN_SCORE};


/// How the engine chooses among its candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Random,
    #[default]
    Greedy,
    Minimax,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Random, Strategy::Greedy, Strategy::Minimax];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
            Strategy::Minimax => "minimax",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown strategy '{s}' (expected random, greedy or minimax)"))
    }
}

/// Outcome of a single search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// `None` for [`Strategy::Random`], which never scores.
    pub score: Option<i32>,
    pub nodes: u64,
}

/// Move chooser with a candidate accumulator.
///
/// [`SearchEngine::collect_moves`] appends to the accumulator without
/// clearing it. Call [`SearchEngine::clear`] between decisions, or use
/// [`SearchEngine::search`], which does both.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    valid_moves: Vec<Move>,
    collected_for: Option<Color>,
    rng: StdRng,
    nodes: u64,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Engine whose random choices repeat for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            valid_moves: Vec::with_capacity(64),
            collected_for: None,
            rng,
            nodes: 0,
        }
    }

    /// Appends every legal move of `color` to the accumulator.
    pub fn collect_moves(&mut self, pos: &Position, color: Color) {
        legal_moves_into(pos, color, &mut self.valid_moves);
        self.collected_for = Some(color);
    }

    pub fn clear(&mut self) {
        self.valid_moves.clear();
        self.collected_for = None;
    }

    pub fn valid_moves(&self) -> &[Move] {
        &self.valid_moves
    }

    /// Positions visited by the last [`SearchEngine::best_move`] call.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Chooses among the accumulated candidates.
    ///
    /// `coefficient` is +1 when white is choosing and -1 for black. Fails
    /// with [`ChessError::NoLegalMoves`] when the accumulator is empty.
    pub fn best_move(
        &mut self,
        pos: &Position,
        coefficient: i32,
        strategy: Strategy,
    ) -> ChessResult<Move> {
        self.choose(pos, coefficient, strategy)
            .map(|result| result.best_move)
    }

    /// Clears the accumulator, collects `color`'s moves and chooses one.
    pub fn search(
        &mut self,
        pos: &Position,
        color: Color,
        strategy: Strategy,
    ) -> ChessResult<SearchResult> {
        self.clear();
        self.collect_moves(pos, color);
        self.choose(pos, color.sign(), strategy)
    }

    fn choose(
        &mut self,
        pos: &Position,
        coefficient: i32,
        strategy: Strategy,
    ) -> ChessResult<SearchResult> {
        self.nodes = 0;
        trace!(
            %strategy,
            candidates = self.valid_moves.len(),
            coefficient,
            "running strategy"
        );
        let color = self.collected_for.unwrap_or(if coefficient >= 0 {
            Color::White
        } else {
            Color::Black
        });

        let chosen = match strategy {
            Strategy::Random => {
                self.nodes = 1;
                self.valid_moves
                    .choose(&mut self.rng)
                    .map(|&mv| (mv, None))
            }
            Strategy::Greedy => {
                search::greedy(pos, &self.valid_moves, coefficient, &mut self.nodes)
                    .map(|(mv, score)| (mv, Some(score)))
            }
            Strategy::Minimax => {
                search::minimax(pos, &self.valid_moves, coefficient, &mut self.nodes)
                    .map(|(mv, score)| (mv, Some(score)))
            }
        };

        let Some((best_move, score)) = chosen else {
            trace!(%color, %strategy, "no candidates");
            return Err(ChessError::NoLegalMoves { color });
        };

        debug!(
            %color,
            %strategy,
            %best_move,
            ?score,
            candidates = self.valid_moves.len(),
            nodes = self.nodes,
            "engine move"
        );

        Ok(SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        })
    }
}
