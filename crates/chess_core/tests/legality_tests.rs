//! Property checks over positions reached by random play.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;

use chess_core::{Color, Outcome, PieceKind, Position, legal_moves};

const GAMES: u64 = 12;
const MAX_PLIES: usize = 80;

fn flagged_pawns(pos: &Position) -> usize {
    pos.pieces()
        .filter(|(_, p)| p.is(PieceKind::Pawn) && p.en_passant)
        .count()
}

fn random_game(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::startpos();
    let mut side = Color::White;

    for ply in 0..MAX_PLIES {
        let moves = legal_moves(&pos, side);

        for mv in &moves {
            let piece = pos.piece_at(mv.from).unwrap();
            let mut probe = pos.clone();
            let changed = probe.apply(piece, mv, true);
            assert!(
                !probe.king_checked(side),
                "seed {seed} ply {ply}: {mv} leaves the {side} king attacked"
            );
            probe.undo(&changed);
            assert_eq!(
                probe.squares, pos.squares,
                "seed {seed} ply {ply}: undo of {mv} is not exact"
            );
        }

        let Some(mv) = moves.choose(&mut rng).copied() else {
            let outcome = pos.outcome(side);
            match outcome {
                Some(Outcome::Checkmate { loser }) => {
                    assert_eq!(loser, side);
                    assert!(pos.king_checked(side));
                }
                Some(Outcome::Stalemate) => assert!(!pos.king_checked(side)),
                None => panic!("seed {seed}: no moves but no outcome"),
            }
            return;
        };

        let piece = pos.piece_at(mv.from).unwrap();
        pos.apply(piece, &mv, false);
        pos.set_en_passant(&mv);

        let double_step = piece.is(PieceKind::Pawn) && mv.from.row.abs_diff(mv.to.row) == 2;
        assert_eq!(
            flagged_pawns(&pos),
            usize::from(double_step),
            "seed {seed} ply {ply}: en passant flags after {mv}"
        );

        side = side.other();
    }
}

#[test]
fn random_games_stay_consistent() {
    (0..GAMES).into_par_iter().for_each(random_game);
}
