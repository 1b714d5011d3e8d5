//! Legality probes: does a move expose the mover's king, and which squares
//! does the opponent currently hit.

use crate::{board::Position, types::*};

/// Squares `piece` on `at` threatens.
///
/// Pawns threaten their two forward diagonals whether or not anything stands
/// there, and never the squares they push onto. Other pieces threaten their
/// pseudo-legal destinations, castling excluded.
pub fn attacked_squares(pos: &Position, piece: Piece, at: Square) -> Vec<Square> {
    if piece.is(PieceKind::Pawn) {
        let dir = piece.color.pawn_direction();
        return [-1, 1]
            .into_iter()
            .filter_map(|dc| at.offset(dir, dc))
            .collect();
    }
    pos.generate_moves(piece, at, false)
        .into_iter()
        .filter(|m| m.castle.is_none())
        .map(|m| m.to)
        .collect()
}

impl Position {
    /// True if playing `mv` with `piece` would leave a king of `piece`'s color
    /// attacked. The move is tried on a copy; `self` is untouched.
    pub fn in_check(&self, piece: Piece, mv: &Move) -> bool {
        let mut probe = self.clone();
        probe.apply(piece, mv, true);
        probe.king_checked(piece.color)
    }

    /// True if any piece of `color`'s opponent threatens `square`.
    pub fn square_under_attack(&self, square: Square, color: Color) -> bool {
        self.pieces_of(color.other())
            .any(|(at, p)| attacked_squares(self, p, at).contains(&square))
    }

    /// A king may castle from `from` to `to` only if no square on that
    /// stretch, both ends included, is under attack.
    pub fn castling_path_safe(&self, from: Square, to: Square, color: Color) -> bool {
        let (start, end) = (from.col.min(to.col), from.col.max(to.col));
        (start..=end).all(|col| !self.square_under_attack(Square::new(from.row, col), color))
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
