use std::fmt;
use std::hash::{Hash, Hasher};

pub const ROWS: u8 = 8;
pub const COLS: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row step of this side's pawns. White starts at the bottom of the grid (row 6)
    /// and moves towards row 0.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    /// Sign applied to material: white counts positive, black negative.
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value in pawns. The king is priced far above everything else
    /// so that its loss would dominate any sum.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 10_000,
        }
    }

    fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A piece together with the flags the rules need to remember about it.
///
/// `en_passant` is only meaningful for pawns: it marks the single pawn that
/// may be captured en passant on the next move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
    pub en_passant: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
            en_passant: false,
        }
    }

    pub fn is(&self, kind: PieceKind) -> bool {
        self.kind == kind
    }

    pub fn value(&self) -> i32 {
        self.kind.value()
    }

    pub fn signed_value(&self) -> i32 {
        self.kind.value() * self.color.sign()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.kind.symbol();
        match self.color {
            Color::White => write!(f, "{}", c.to_ascii_uppercase()),
            Color::Black => write!(f, "{c}"),
        }
    }
}

/// Board coordinates, optionally annotated with the piece that stood there
/// when the square was captured into a move or an undo record.
///
/// Two squares are equal when their coordinates match; the annotation is
/// ignored.
#[derive(Clone, Copy, Debug)]
pub struct Square {
    pub row: u8,
    pub col: u8,
    pub piece: Option<Piece>,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self {
            row,
            col,
            piece: None,
        }
    }

    pub const fn with_piece(row: u8, col: u8, piece: Option<Piece>) -> Self {
        Self { row, col, piece }
    }

    pub fn in_range(row: i8, col: i8) -> bool {
        (0..ROWS as i8).contains(&row) && (0..COLS as i8).contains(&col)
    }

    pub fn on_board(&self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// The square `(dr, dc)` away, if it is still on the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if Square::in_range(row, col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Parse algebraic coordinates such as `e2`. Row 0 is rank 8.
    pub fn from_coord(c: &str) -> Option<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square::new(b'8' - r, f - b'a'))
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}
impl Eq for Square {}

impl Hash for Square {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.on_board() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}

/// Which rook a castling king travels towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Towards the rook on column 0.
    Queen,
    /// Towards the rook on column 7.
    King,
}

impl CastleSide {
    pub fn from_step(step: i8) -> Self {
        if step < 0 {
            CastleSide::Queen
        } else {
            CastleSide::King
        }
    }
    pub fn rook_col(self) -> u8 {
        match self {
            CastleSide::Queen => 0,
            CastleSide::King => 7,
        }
    }
    pub fn step(self) -> i8 {
        match self {
            CastleSide::Queen => -1,
            CastleSide::King => 1,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub from: Square,
    /// Destination; carries the captured piece, if any. For en passant that
    /// is the pawn beside the mover, not the (empty) destination occupant.
    pub to: Square,
    /// Set on the king's two-square castling move.
    pub castle: Option<CastleSide>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            castle: None,
        }
    }

    pub fn castling(from: Square, to: Square, side: CastleSide) -> Self {
        Self {
            from,
            to,
            castle: Some(side),
        }
    }

    pub fn captured(&self) -> Option<Piece> {
        self.to.piece
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}
impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
