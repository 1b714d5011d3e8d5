use std::fmt;

use tracing::debug;

use crate::types::*;

/// The 8x8 board. Row 0 is black's back rank, row 7 is white's.
///
/// A position is a plain value: cloning it yields an independent board that
/// can be mutated freely while probing legality or searching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub squares: [[Option<Piece>; COLS as usize]; ROWS as usize],
    pub last_move: Option<Move>,
    /// Advisory flags, set by callers after consulting the terminal-state
    /// detector. `apply` never touches them.
    pub checkmate: bool,
    pub stalemate: bool,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn empty() -> Self {
        Position {
            squares: [[None; COLS as usize]; ROWS as usize],
            last_move: None,
            checkmate: false,
            stalemate: false,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
        p.add_pieces(Color::White);
        p.add_pieces(Color::Black);
        p
    }

    fn add_pieces(&mut self, color: Color) {
        let pawn_row = color.pawn_row();
        let back_row = color.back_row();
        for col in 0..COLS {
            self.place(Square::new(pawn_row, col), Piece::new(PieceKind::Pawn, color));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            self.place(Square::new(back_row, col as u8), Piece::new(kind, color));
        }
    }

    /// Build a position from eight rows of text, row 0 first. Uppercase is
    /// white, lowercase black, `.` an empty square.
    ///
    /// Pawns off their starting row, and kings or rooks off their home
    /// squares, are marked as having moved.
    pub fn from_diagram(rows: &[&str]) -> Option<Self> {
        if rows.len() != ROWS as usize {
            return None;
        }
        let mut p = Position::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != COLS as usize {
                return None;
            }
            for (col, ch) in cells.into_iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let kind = match ch.to_ascii_lowercase() {
                    'p' => PieceKind::Pawn,
                    'n' => PieceKind::Knight,
                    'b' => PieceKind::Bishop,
                    'r' => PieceKind::Rook,
                    'q' => PieceKind::Queen,
                    'k' => PieceKind::King,
                    _ => return None,
                };
                let (row, col) = (row as u8, col as u8);
                let mut piece = Piece::new(kind, color);
                piece.has_moved = match kind {
                    PieceKind::Pawn => row != color.pawn_row(),
                    PieceKind::King => row != color.back_row() || col != 4,
                    PieceKind::Rook => row != color.back_row() || (col != 0 && col != 7),
                    _ => false,
                };
                p.place(Square::new(row, col), piece);
            }
        }
        Some(p)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row as usize][sq.col as usize]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.row as usize][sq.col as usize] = pc;
    }

    pub fn place(&mut self, sq: Square, pc: Piece) {
        self.set_piece(sq, Some(pc));
    }

    /// The square annotated with its current occupant.
    pub fn snapshot(&self, sq: Square) -> Square {
        Square::with_piece(sq.row, sq.col, self.piece_at(sq))
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    pub fn has_enemy_piece(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color != color)
    }

    pub fn has_team_piece(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color == color)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..ROWS).flat_map(move |row| {
            (0..COLS).filter_map(move |col| {
                let sq = Square::new(row, col);
                self.piece_at(sq).map(|p| (sq, p))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.is(PieceKind::King))
            .map(|(sq, _)| sq)
    }

    /// Move `piece` along `mv` and return the prior contents of every square
    /// touched, oldest first, plus any pawn whose en-passant flag the
    /// following [`Position::set_en_passant`] will clear. Feeding that list to
    /// [`Position::undo`] restores the board exactly.
    ///
    /// En passant (a pawn stepping diagonally onto an empty square) also
    /// clears the bypassed pawn. A king travelling two columns drags the rook
    /// on that side next to it. `testing` only silences logging; the board
    /// changes are the same either way.
    pub fn apply(&mut self, piece: Piece, mv: &Move, testing: bool) -> Vec<Square> {
        let from = mv.from;
        let to = mv.to;
        let target_was_empty = self.is_empty(to);

        let mut changed = Vec::with_capacity(6);
        changed.push(self.snapshot(from));
        changed.push(self.snapshot(to));
        let flagged = self.en_passant_pawns();

        let mut moved = piece;
        moved.has_moved = true;
        self.set_piece(from, None);
        self.set_piece(to, Some(moved));

        if piece.is(PieceKind::Pawn) && from.col != to.col && target_was_empty {
            let bypassed = Square::new(from.row, to.col);
            changed.push(self.snapshot(bypassed));
            self.set_piece(bypassed, None);
            if !testing {
                debug!(%mv, "en passant capture on {bypassed}");
            }
        } else if !testing && !target_was_empty {
            debug!(%mv, "capture");
        }

        let travel = to.col as i8 - from.col as i8;
        if piece.is(PieceKind::King) && travel.abs() == 2 {
            let side = mv.castle.unwrap_or(CastleSide::from_step(travel));
            let rook_from = Square::new(from.row, side.rook_col());
            let rook_to = Square::new(from.row, (from.col as i8 + side.step()) as u8);
            if let Some(rook) = self.piece_at(rook_from)
                && rook.is(PieceKind::Rook)
            {
                changed.push(self.snapshot(rook_from));
                changed.push(self.snapshot(rook_to));
                self.apply(rook, &Move::new(rook_from, rook_to), testing);
                if !testing {
                    debug!(%mv, ?side, "castled");
                }
            }
        }

        // The next set_en_passant clears this flag; record it so undo restores it.
        for sq in flagged {
            if !changed.contains(&sq) {
                changed.push(sq);
            }
        }

        self.last_move = Some(*mv);
        changed
    }

    /// Snapshots of the pawns currently eligible for en passant capture.
    fn en_passant_pawns(&self) -> Vec<Square> {
        self.pieces()
            .filter(|(_, p)| p.is(PieceKind::Pawn) && p.en_passant)
            .map(|(sq, p)| Square::with_piece(sq.row, sq.col, Some(p)))
            .collect()
    }

    /// Restore every recorded square to the piece it held.
    pub fn undo(&mut self, changed: &[Square]) {
        for sq in changed {
            self.set_piece(*sq, sq.piece);
        }
    }

    /// True if `mv` is one of the legal moves `piece` has right now.
    pub fn valid(&self, piece: Piece, mv: &Move) -> bool {
        self.generate_moves(piece, mv.from, true).contains(mv)
    }

    pub fn is_promotion(&self, piece: Piece, to: Square) -> bool {
        piece.is(PieceKind::Pawn) && (to.row == 0 || to.row == ROWS - 1)
    }

    /// Refresh en-passant eligibility after `mv` has been applied.
    ///
    /// Every pawn loses the flag; the pawn now standing on `mv.to` regains it
    /// if `mv` was its two-square advance. Callers run this after each move,
    /// once promotion and capture bookkeeping are done.
    pub fn set_en_passant(&mut self, mv: &Move) {
        self.clear_en_passant();
        let double_step = (mv.to.row as i8 - mv.from.row as i8).abs() == 2 && mv.from.col == mv.to.col;
        if let Some(pc) = self.squares[mv.to.row as usize][mv.to.col as usize].as_mut()
            && pc.is(PieceKind::Pawn)
            && double_step
        {
            pc.en_passant = true;
        }
    }

    pub fn clear_en_passant(&mut self) {
        for pc in self.squares.iter_mut().flatten().flatten() {
            if pc.is(PieceKind::Pawn) {
                pc.en_passant = false;
            }
        }
    }

    /// Signed material sum: white pieces count positive, black negative.
    pub fn material_score(&self) -> i32 {
        self.pieces().map(|(_, p)| p.signed_value()).sum()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                match self.piece_at(Square::new(row, col)) {
                    Some(p) => write!(f, "{p}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
