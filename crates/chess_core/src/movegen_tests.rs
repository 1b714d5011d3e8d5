use super::*;

fn sq(c: &str) -> Square {
    Square::from_coord(c).unwrap()
}

fn targets(pos: &Position, at: &str, check: bool) -> Vec<String> {
    let at = sq(at);
    let piece = pos.piece_at(at).unwrap();
    pos.generate_moves(piece, at, check)
        .iter()
        .map(|m| m.to.to_string())
        .collect()
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    // Starting position has 20 legal moves for either side
    assert_eq!(legal_moves(&pos, Color::White).len(), 20);
    assert_eq!(legal_moves(&pos, Color::Black).len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos = Position::from_diagram(&[
        "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
        "R...K..R",
    ])
    .unwrap();
    assert_eq!(legal_moves(&pos, Color::White).len(), 48);
}

#[test]
fn test_scan_order() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos, Color::White);
    // Row 6 (white pawns) comes before row 7 (knights), pawn single step first.
    assert_eq!(moves[0].to_string(), "a2a3");
    assert_eq!(moves[1].to_string(), "a2a4");
    assert_eq!(moves[16].to_string(), "b1c3");
    assert_eq!(moves[17].to_string(), "b1a3");
}

#[test]
fn test_pawn_blocked() {
    let mut pos = Position::startpos();
    pos.place(sq("e3"), Piece::new(PieceKind::Knight, Color::Black));
    // Diagonals are empty, so nothing to capture either.
    assert!(targets(&pos, "e2", true).is_empty());
    pos.place(sq("d3"), Piece::new(PieceKind::Bishop, Color::Black));
    assert_eq!(targets(&pos, "e2", true), vec!["d3"]);

    // Blocked on the second square only: single step still offered.
    let mut pos = Position::startpos();
    pos.place(sq("e4"), Piece::new(PieceKind::Knight, Color::Black));
    assert_eq!(targets(&pos, "e2", true), vec!["e3"]);
}

#[test]
fn test_moved_pawn_single_step() {
    let mut pos = Position::empty();
    let mut pawn = Piece::new(PieceKind::Pawn, Color::Black);
    pawn.has_moved = true;
    pos.place(sq("c6"), pawn);
    assert_eq!(targets(&pos, "c6", false), vec!["c5"]);
}

#[test]
fn test_capture_carries_victim() {
    let mut pos = Position::empty();
    pos.place(sq("d4"), Piece::new(PieceKind::Knight, Color::White));
    pos.place(sq("e6"), Piece::new(PieceKind::Rook, Color::Black));
    pos.place(sq("c6"), Piece::new(PieceKind::Pawn, Color::White));
    let knight = pos.piece_at(sq("d4")).unwrap();
    let moves = pos.generate_moves(knight, sq("d4"), false);
    assert_eq!(moves.len(), 7);
    let capture = moves.iter().find(|m| m.to == sq("e6")).unwrap();
    assert_eq!(capture.captured().map(|p| p.kind), Some(PieceKind::Rook));
    assert!(!moves.iter().any(|m| m.to == sq("c6")));
}

#[test]
fn test_slider_rays_stop() {
    let pos = Position::from_diagram(&[
        "........", "........", "........", "........", "...p....", "........", "........",
        "R..P...k",
    ])
    .unwrap();
    let t = targets(&pos, "a1", false);
    // up the file to a8, right along the rank until the own pawn on d1
    assert_eq!(t, vec!["a2", "a3", "a4", "a5", "a6", "a7", "a8", "b1", "c1"]);
}

#[test]
fn test_queen_on_empty_board() {
    let mut pos = Position::empty();
    pos.place(sq("d4"), Piece::new(PieceKind::Queen, Color::White));
    assert_eq!(targets(&pos, "d4", false).len(), 27);
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    let pos = Position::from_diagram(&[
        "....r..k", "........", "........", "........", "........", "........", "....N...",
        "....K...",
    ])
    .unwrap();
    assert!(targets(&pos, "e2", true).is_empty());
    assert_eq!(targets(&pos, "e2", false).len(), 6);
}

#[test]
fn test_king_cannot_step_next_to_king() {
    let pos = Position::from_diagram(&[
        "........", "........", "........", "...k....", "........", "...K....", "........",
        "........",
    ])
    .unwrap();
    let t = targets(&pos, "d3", true);
    assert!(!t.contains(&"d4".to_string()));
    assert!(!t.contains(&"c4".to_string()));
    assert!(!t.contains(&"e4".to_string()));
    assert_eq!(t.len(), 5);
}

#[test]
fn test_castling_both_sides() {
    let pos = Position::from_diagram(&[
        "....k...", "........", "........", "........", "........", "........", "........",
        "R...K..R",
    ])
    .unwrap();
    let at = sq("e1");
    let king = pos.piece_at(at).unwrap();
    let moves = pos.generate_moves(king, at, true);
    let queen_side = moves.iter().find(|m| m.to == sq("c1")).unwrap();
    let king_side = moves.iter().find(|m| m.to == sq("g1")).unwrap();
    assert_eq!(queen_side.castle, Some(CastleSide::Queen));
    assert_eq!(king_side.castle, Some(CastleSide::King));
}

#[test]
fn test_no_castling_through_attack() {
    // Black rook covers f1: no king-side castling, queen side unaffected.
    let pos = Position::from_diagram(&[
        "....k...", ".....r..", "........", "........", "........", "........", "........",
        "R...K..R",
    ])
    .unwrap();
    let t = targets(&pos, "e1", true);
    assert!(!t.contains(&"g1".to_string()));
    assert!(t.contains(&"c1".to_string()));
    // The unchecked generator still offers it.
    assert!(targets(&pos, "e1", false).contains(&"g1".to_string()));
}

#[test]
fn test_no_castling_into_pawn_attack() {
    // Black pawn on h2 hits g1 even though g1 is empty.
    let pos = Position::from_diagram(&[
        "....k...", "........", "........", "........", "........", "........", ".......p",
        "R...K..R",
    ])
    .unwrap();
    assert!(!targets(&pos, "e1", true).contains(&"g1".to_string()));
}

#[test]
fn test_no_castling_when_blocked_or_moved() {
    let blocked = Position::from_diagram(&[
        "....k...", "........", "........", "........", "........", "........", "........",
        "RN..K..R",
    ])
    .unwrap();
    let t = targets(&blocked, "e1", true);
    assert!(!t.contains(&"c1".to_string()));
    assert!(t.contains(&"g1".to_string()));

    let mut moved = blocked.clone();
    let mut rook = moved.piece_at(sq("h1")).unwrap();
    rook.has_moved = true;
    moved.place(sq("h1"), rook);
    assert!(!targets(&moved, "e1", true).contains(&"g1".to_string()));
}

#[test]
fn test_en_passant_offered_only_after_double_step() {
    let mut pos = Position::from_diagram(&[
        "....k...", "...p....", "........", "....P...", "........", "........", "........",
        "....K...",
    ])
    .unwrap();
    let pawn_sq = sq("d7");
    let pawn = pos.piece_at(pawn_sq).unwrap();
    let mv = Move::new(pawn_sq, sq("d5"));
    pos.apply(pawn, &mv, true);
    pos.set_en_passant(&mv);

    let e5 = sq("e5");
    let white = pos.piece_at(e5).unwrap();
    let moves = pos.generate_moves(white, e5, true);
    let ep = moves.iter().find(|m| m.to == sq("d6")).unwrap();
    assert_eq!(ep.captured().map(|p| p.kind), Some(PieceKind::Pawn));
    assert_eq!(moves.len(), 2);
}
