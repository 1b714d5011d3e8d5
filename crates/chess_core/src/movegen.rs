use crate::{board::Position, types::*};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
];

// Clockwise from straight up.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Every legal move for `color`, in row-major board order and per-piece
/// generation order within each square.
pub fn legal_moves(pos: &Position, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, color, &mut out);
    out
}

/// Append every legal move for `color` to `out`.
pub fn legal_moves_into(pos: &Position, color: Color, out: &mut Vec<Move>) {
    for (at, piece) in pos.pieces_of(color) {
        pos.generate_moves_into(piece, at, true, out);
    }
}

impl Position {
    /// Moves for `piece` standing on `at`.
    ///
    /// With `check` set, each candidate is kept only if it does not leave the
    /// mover's king attacked, and castling also requires an unattacked king
    /// path. Without it the result is pseudo-legal, which is what attack
    /// probes use.
    pub fn generate_moves(&self, piece: Piece, at: Square, check: bool) -> Vec<Move> {
        let mut out = Vec::with_capacity(28);
        self.generate_moves_into(piece, at, check, &mut out);
        out
    }

    pub fn generate_moves_into(&self, piece: Piece, at: Square, check: bool, out: &mut Vec<Move>) {
        let from = Square::new(at.row, at.col);
        match piece.kind {
            PieceKind::Pawn => gen_pawn(self, piece, from, check, out),
            PieceKind::Knight => gen_knight(self, piece, from, check, out),
            PieceKind::Bishop => gen_slider(self, piece, from, check, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(self, piece, from, check, out, &ORTHOGONALS),
            PieceKind::Queen => gen_slider(self, piece, from, check, out, &QUEEN_DIRS),
            PieceKind::King => {
                gen_king(self, piece, from, check, out);
                gen_castle(self, piece, from, check, out);
            }
        }
    }
}

fn push(pos: &Position, piece: Piece, mv: Move, check: bool, out: &mut Vec<Move>) {
    if !check || !pos.in_check(piece, &mv) {
        out.push(mv);
    }
}

fn gen_pawn(pos: &Position, piece: Piece, from: Square, check: bool, out: &mut Vec<Move>) {
    let dir = piece.color.pawn_direction();

    // forward, two squares only while unmoved and only through an empty square
    let steps = if piece.has_moved { 1 } else { 2 };
    let mut ahead = from;
    for _ in 0..steps {
        match ahead.offset(dir, 0) {
            Some(to) if pos.is_empty(to) => {
                push(pos, piece, Move::new(from, to), check, out);
                ahead = to;
            }
            _ => break,
        }
    }

    // captures
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && pos.has_enemy_piece(to, piece.color)
        {
            push(pos, piece, Move::new(from, pos.snapshot(to)), check, out);
        }
    }

    // en passant: the victim sits beside us, we land behind it
    let ep_row = match piece.color {
        Color::White => 3,
        Color::Black => 4,
    };
    if from.row != ep_row {
        return;
    }
    for dc in [-1, 1] {
        let Some(beside) = from.offset(0, dc) else {
            continue;
        };
        if let Some(victim) = pos.piece_at(beside)
            && victim.color != piece.color
            && victim.is(PieceKind::Pawn)
            && victim.en_passant
            && let Some(land) = from.offset(dir, dc)
            && pos.is_empty(land)
        {
            let to = Square::with_piece(land.row, land.col, Some(victim));
            push(pos, piece, Move::new(from, to), check, out);
        }
    }
}

fn gen_knight(pos: &Position, piece: Piece, from: Square, check: bool, out: &mut Vec<Move>) {
    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(dr, dc)
            && !pos.has_team_piece(to, piece.color)
        {
            push(pos, piece, Move::new(from, pos.snapshot(to)), check, out);
        }
    }
}

fn gen_slider(
    pos: &Position,
    piece: Piece,
    from: Square,
    check: bool,
    out: &mut Vec<Move>,
    dirs: &[(i8, i8)],
) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match pos.piece_at(to) {
                None => push(pos, piece, Move::new(from, to), check, out),
                Some(pc) if pc.color != piece.color => {
                    push(pos, piece, Move::new(from, pos.snapshot(to)), check, out);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

fn gen_king(pos: &Position, piece: Piece, from: Square, check: bool, out: &mut Vec<Move>) {
    for (dr, dc) in KING_OFFSETS {
        if let Some(to) = from.offset(dr, dc)
            && !pos.has_team_piece(to, piece.color)
        {
            push(pos, piece, Move::new(from, pos.snapshot(to)), check, out);
        }
    }
}

fn gen_castle(pos: &Position, piece: Piece, from: Square, check: bool, out: &mut Vec<Move>) {
    if piece.has_moved {
        return;
    }
    for side in [CastleSide::Queen, CastleSide::King] {
        let rook_sq = Square::new(from.row, side.rook_col());
        let Some(rook) = pos.piece_at(rook_sq) else {
            continue;
        };
        if !rook.is(PieceKind::Rook) || rook.color != piece.color || rook.has_moved {
            continue;
        }

        let step = side.step();
        let mut col = from.col as i8 + step;
        let mut blocked = false;
        while col != rook_sq.col as i8 {
            if !pos.is_empty(Square::new(from.row, col as u8)) {
                blocked = true;
                break;
            }
            col += step;
        }
        if blocked {
            continue;
        }

        let Some(to) = from.offset(0, 2 * step) else {
            continue;
        };
        if check && !pos.castling_path_safe(from, to, piece.color) {
            continue;
        }
        out.push(Move::castling(from, to, side));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
