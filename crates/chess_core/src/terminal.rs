//! Checkmate and stalemate detection.

use crate::{board::Position, types::*};

/// How a game ended for the side that could not move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { loser: Color },
    Stalemate,
}

impl Outcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Checkmate { loser } => Some(loser.other()),
            Outcome::Stalemate => None,
        }
    }
}

impl Position {
    /// True if `color` has at least one legal move. Stops at the first piece
    /// that has one.
    pub fn moves_left(&self, color: Color) -> bool {
        let mut buf = Vec::with_capacity(28);
        for (at, piece) in self.pieces_of(color) {
            buf.clear();
            self.generate_moves_into(piece, at, true, &mut buf);
            if !buf.is_empty() {
                return true;
            }
        }
        false
    }

    /// True if some opposing piece has a pseudo-legal move onto a king of
    /// `color`.
    pub fn king_checked(&self, color: Color) -> bool {
        let mut buf = Vec::with_capacity(28);
        for (at, piece) in self.pieces_of(color.other()) {
            buf.clear();
            self.generate_moves_into(piece, at, false, &mut buf);
            let hits_king = buf.iter().any(|m| {
                self.piece_at(m.to)
                    .is_some_and(|t| t.is(PieceKind::King) && t.color == color)
            });
            if hits_king {
                return true;
            }
        }
        false
    }

    /// Classify the position for `side`, the side to move. `None` while the
    /// game goes on.
    pub fn outcome(&self, side: Color) -> Option<Outcome> {
        if self.moves_left(side) {
            return None;
        }
        if self.king_checked(side) {
            Some(Outcome::Checkmate { loser: side })
        } else {
            Some(Outcome::Stalemate)
        }
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod terminal_tests;
