//! A game in progress: the live position plus what the caller has to track
//! around it (turn, move log, undo records, pending promotion, result).

use tracing::debug;

use crate::{
    board::Position,
    error::{ChessError, ChessResult},
    terminal::Outcome,
    types::*,
};

/// Who makes the moves for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Player {
    #[default]
    Human,
    Engine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Players {
    pub white: Player,
    pub black: Player,
}

impl Players {
    pub fn get(&self, color: Color) -> Player {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn engines() -> Self {
        Self {
            white: Player::Engine,
            black: Player::Engine,
        }
    }
}

impl Default for Players {
    /// Human with white against the engine.
    fn default() -> Self {
        Self {
            white: Player::Human,
            black: Player::Engine,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    next_player: Color,
    moves: Vec<Move>,
    /// One undo record per entry in `moves`.
    history: Vec<Vec<Square>>,
    promoting: Option<Square>,
    outcome: Option<Outcome>,
    players: Players,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Players::default())
    }
}

impl Game {
    pub fn new(players: Players) -> Self {
        Self {
            position: Position::startpos(),
            next_player: Color::White,
            moves: Vec::new(),
            history: Vec::new(),
            promoting: None,
            outcome: None,
            players,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn next_player(&self) -> Color {
        self.next_player
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The square of a pawn waiting for its promotion piece.
    pub fn promoting(&self) -> Option<Square> {
        self.promoting
    }

    pub fn players(&self) -> Players {
        self.players
    }

    pub fn engine_to_move(&self) -> bool {
        self.players.get(self.next_player) == Player::Engine
    }

    /// Legal moves of the piece on `square`, which must belong to the side
    /// to move. Off-board coordinates count as an empty square.
    pub fn select(&self, square: Square) -> ChessResult<Vec<Move>> {
        let square = Square::new(square.row, square.col);
        let piece = square
            .on_board()
            .then(|| self.position.piece_at(square))
            .flatten()
            .ok_or(ChessError::EmptySquare { square })?;
        if piece.color != self.next_player {
            return Err(ChessError::WrongColor {
                square,
                expected: self.next_player,
            });
        }
        Ok(self.position.generate_moves(piece, square, true))
    }

    /// Play `from` -> `to` for the side to move and return its undo record.
    pub fn play(&mut self, from: Square, to: Square) -> ChessResult<Vec<Square>> {
        if self.outcome.is_some() {
            return Err(ChessError::GameOver);
        }
        if let Some(square) = self.promoting {
            return Err(ChessError::PromotionPending { square });
        }

        let mv = self
            .select(from)?
            .into_iter()
            .find(|m| m.to == to)
            .ok_or(ChessError::InvalidMove { from, to })?;
        let piece = self
            .position
            .piece_at(mv.from)
            .ok_or(ChessError::EmptySquare { square: mv.from })?;

        let changed = self.position.apply(piece, &mv, false);
        self.position.set_en_passant(&mv);
        self.history.push(changed.clone());
        self.moves.push(mv);
        debug!(color = %self.next_player, %mv, "move played");

        if self.position.is_promotion(piece, mv.to) {
            self.promoting = Some(mv.to);
        }
        self.next_player = self.next_player.other();
        if self.promoting.is_none() {
            self.classify();
        }
        Ok(changed)
    }

    /// Replace the pending promotion pawn with `kind`.
    pub fn promote(&mut self, kind: PieceKind) -> ChessResult<()> {
        let square = self.promoting.ok_or(ChessError::NoPromotionPending)?;
        if matches!(kind, PieceKind::Pawn | PieceKind::King) {
            return Err(ChessError::InvalidPromotion { kind });
        }
        let color = self
            .position
            .piece_at(square)
            .map_or(self.next_player.other(), |p| p.color);
        let mut piece = Piece::new(kind, color);
        piece.has_moved = true;
        self.position.place(square, piece);
        self.promoting = None;
        debug!(%square, ?kind, "promoted");
        self.classify();
        Ok(())
    }

    /// Take back the last move. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(changed) = self.history.pop() else {
            return false;
        };
        self.moves.pop();
        self.position.undo(&changed);
        self.position.last_move = self.moves.last().copied();
        match self.moves.last().copied() {
            Some(prev) => self.position.set_en_passant(&prev),
            None => self.position.clear_en_passant(),
        }
        self.next_player = self.next_player.other();
        self.promoting = None;
        self.outcome = None;
        self.position.checkmate = false;
        self.position.stalemate = false;
        true
    }

    pub fn reset(&mut self) {
        *self = Game::new(self.players);
    }

    fn classify(&mut self) {
        self.outcome = self.position.outcome(self.next_player);
        self.position.checkmate = matches!(self.outcome, Some(Outcome::Checkmate { .. }));
        self.position.stalemate = self.outcome == Some(Outcome::Stalemate);
        if let Some(outcome) = self.outcome {
            debug!(?outcome, "game over");
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
