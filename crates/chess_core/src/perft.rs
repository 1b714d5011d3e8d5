use crate::{board::Position, movegen::legal_moves_into, types::*};

/// Pure perft node count.
/// Counts all legal positions reachable from `pos` with `color` to move,
/// `depth` plies down. Promotions count once (the pawn stays a pawn).
pub fn perft(pos: &Position, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(pos: &Position, color: Color, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        buf.clear();
        legal_moves_into(pos, color, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter() {
            let Some(piece) = pos.piece_at(mv.from) else {
                continue;
            };
            let mut child = pos.clone();
            child.apply(piece, mv, true);
            child.set_en_passant(mv);
            nodes += inner(&child, color.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, color, depth, &mut layers[..])
}
