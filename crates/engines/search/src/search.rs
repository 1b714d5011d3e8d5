//! Greedy and one-reply minimax selection over a candidate list.

use chess_core::{legal_moves_into, Color, Move, Position};

use crate::eval::{evaluate, terminal_score, WIN_SCORE};

/// Plays `mv` on a copy of `pos` and flags en passant the way a real move
/// would. Returns the copy and the color that moved.
fn play_on_copy(pos: &Position, mv: &Move) -> Option<(Position, Color)> {
    let piece = pos.piece_at(mv.from)?;
    let mut child = pos.clone();
    child.apply(piece, mv, true);
    child.set_en_passant(mv);
    Some((child, piece.color))
}

/// Picks the candidate whose resulting position scores highest.
///
/// Checkmating the opponent scores [`WIN_SCORE`], stalemating it
/// [`DRAW_SCORE`](crate::eval::DRAW_SCORE), anything else is material times `coefficient`.
/// Ties keep the earliest candidate.
pub fn greedy(
    pos: &Position,
    moves: &[Move],
    coefficient: i32,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let mut best = None;
    let mut best_score = i32::MIN;

    for mv in moves {
        let Some((child, mover)) = play_on_copy(pos, mv) else {
            continue;
        };
        *nodes += 1;

        let score =
            terminal_score(&child, mover.other()).unwrap_or_else(|| evaluate(&child, coefficient));

        if score > best_score {
            best_score = score;
            best = Some((*mv, score));
        }
    }

    best
}

/// Scores each candidate by the opponent's best material reply and picks
/// the candidate whose worst case is highest.
///
/// A candidate that leaves the opponent without replies scores
/// [`WIN_SCORE`], stalemate included. Ties keep the earliest candidate.
pub fn minimax(
    pos: &Position,
    moves: &[Move],
    coefficient: i32,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let mut best = None;
    let mut best_score = i32::MIN;
    let mut replies = Vec::with_capacity(64);

    for mv in moves {
        let Some((child, mover)) = play_on_copy(pos, mv) else {
            continue;
        };
        *nodes += 1;

        let opponent = mover.other();
        replies.clear();
        legal_moves_into(&child, opponent, &mut replies);

        let worst = if replies.is_empty() {
            WIN_SCORE
        } else {
            let mut worst = i32::MAX;
            for reply in &replies {
                if let Some((grandchild, _)) = play_on_copy(&child, reply) {
                    *nodes += 1;
                    worst = worst.min(evaluate(&grandchild, coefficient));
                }
            }
            worst
        };

        if worst > best_score {
            best_score = worst;
            best = Some((*mv, worst));
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
