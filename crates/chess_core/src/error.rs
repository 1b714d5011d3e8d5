//! Error types for game-level operations.
//!
//! Move legality is never reported through these: an illegal move simply does
//! not appear in a generated move list. Errors cover callers acting on the
//! wrong square, replaying a move that was not generated, or asking an engine
//! to move in a finished game.

use thiserror::Error;

use crate::types::{Color, PieceKind, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The move is not among the piece's current legal moves
    #[error("Invalid move: {from} to {to}")]
    InvalidMove { from: Square, to: Square },

    #[error("No piece on {square}")]
    EmptySquare { square: Square },

    #[error("Piece on {square} does not belong to {expected}")]
    WrongColor { square: Square, expected: Color },

    /// A best move was requested with nothing to choose from
    #[error("No legal moves for {color}")]
    NoLegalMoves { color: Color },

    #[error("No promotion is pending")]
    NoPromotionPending,

    #[error("A promotion is pending on {square}")]
    PromotionPending { square: Square },

    #[error("Cannot promote to {kind:?}")]
    InvalidPromotion { kind: PieceKind },

    #[error("Game is over")]
    GameOver,
}

pub type ChessResult<T> = Result<T, ChessError>;
