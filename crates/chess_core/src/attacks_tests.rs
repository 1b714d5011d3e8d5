use super::*;

fn sq(c: &str) -> Square {
    Square::from_coord(c).unwrap()
}

#[test]
fn test_pawn_attacks_diagonals_only() {
    let mut pos = Position::empty();
    pos.place(sq("e4"), Piece::new(PieceKind::Pawn, Color::White));
    let pawn = pos.piece_at(sq("e4")).unwrap();
    let attacks = attacked_squares(&pos, pawn, sq("e4"));
    assert_eq!(attacks, vec![sq("d5"), sq("f5")]);

    // Edge file: one diagonal only
    let mut pos = Position::empty();
    pos.place(sq("a2"), Piece::new(PieceKind::Pawn, Color::White));
    let pawn = pos.piece_at(sq("a2")).unwrap();
    assert_eq!(attacked_squares(&pos, pawn, sq("a2")), vec![sq("b3")]);
}

#[test]
fn test_square_under_attack() {
    let pos = Position::startpos();
    // Black knight on g8 covers f6 and h6; black pawns cover the sixth rank.
    assert!(pos.square_under_attack(sq("f6"), Color::White));
    assert!(pos.square_under_attack(sq("a6"), Color::White));
    assert!(!pos.square_under_attack(sq("e4"), Color::White));
    assert!(!pos.square_under_attack(sq("e5"), Color::White));
    assert!(pos.square_under_attack(sq("e3"), Color::Black));
}

#[test]
fn test_in_check_does_not_touch_position() {
    let pos = Position::from_diagram(&[
        "....r..k", "........", "........", "........", "........", "........", "....N...",
        "....K...",
    ])
    .unwrap();
    let before = pos.clone();
    let knight = pos.piece_at(sq("e2")).unwrap();
    assert!(pos.in_check(knight, &Move::new(sq("e2"), sq("c3"))));
    assert_eq!(pos, before);

    let king = pos.piece_at(sq("e1")).unwrap();
    assert!(!pos.in_check(king, &Move::new(sq("e1"), sq("f2"))));
    assert!(!pos.in_check(king, &Move::new(sq("e1"), sq("d1"))));
}

#[test]
fn test_castling_path_includes_start() {
    // King in check from e8 rook: castling path fails on the start square.
    let pos = Position::from_diagram(&[
        "....r..k", "........", "........", "........", "........", "........", "........",
        "R...K..R",
    ])
    .unwrap();
    assert!(!pos.castling_path_safe(sq("e1"), sq("g1"), Color::White));
    assert!(!pos.castling_path_safe(sq("e1"), sq("c1"), Color::White));
}
