//! Material-based scoring of positions reached during search.

use chess_core::{Color, Outcome, Position};

/// Score for delivering checkmate. Material sums stay far below this.
pub const WIN_SCORE: i32 = 1_000_000;

/// Score for stalemating the opponent.
pub const DRAW_SCORE: i32 = 0;

/// Material from the mover's perspective: `coefficient` is +1 when white
/// is choosing, -1 when black is.
pub fn evaluate(pos: &Position, coefficient: i32) -> i32 {
    pos.material_score() * coefficient
}

/// Sentinel score if `side_to_move` has no legal reply, as seen by the side
/// that just moved. `None` while the game goes on.
pub fn terminal_score(pos: &Position, side_to_move: Color) -> Option<i32> {
    pos.outcome(side_to_move).map(|outcome| match outcome {
        Outcome::Checkmate { .. } => WIN_SCORE,
        Outcome::Stalemate => DRAW_SCORE,
    })
}
