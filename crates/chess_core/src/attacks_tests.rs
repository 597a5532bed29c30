use super::*;

#[test]
fn test_knight_attacks() {
    // Knight on e4 (square 28) should attack 8 squares
    assert_eq!(knight_attacks(28).popcount(), 8);

    // Knight on a1 attacks b3 and c2 only
    let attacks = knight_attacks(0);
    assert_eq!(attacks.popcount(), 2);
    assert!(attacks.contains(10)); // c2
    assert!(attacks.contains(17)); // b3
}

#[test]
fn test_king_attacks() {
    assert_eq!(king_attacks(28).popcount(), 8);
    assert_eq!(king_attacks(0).popcount(), 3);
    assert_eq!(king_attacks(60).popcount(), 5); // e8
}

#[test]
fn test_pawn_attacks_by_colour() {
    let white = pawn_attacks(28, Color::White);
    assert!(white.contains(35) && white.contains(37)); // d5, f5

    let black = pawn_attacks(28, Color::Black);
    assert!(black.contains(19) && black.contains(21)); // d3, f3

    // Edge pawns only attack inward
    assert_eq!(pawn_attacks(8, Color::White), Bitboard::from_square(17));
}

#[test]
fn test_slider_attacks_empty_board() {
    assert_eq!(rook_attacks(28, Bitboard::EMPTY).popcount(), 14);
    assert_eq!(bishop_attacks(28, Bitboard::EMPTY).popcount(), 13);
    assert_eq!(queen_attacks(28, Bitboard::EMPTY).popcount(), 27);
}

#[test]
fn test_rook_attacks_with_blockers() {
    // Rook on a1, blocker on a4
    let attacks = rook_attacks(0, Bitboard::from_square(24));
    assert!(attacks.contains(8)); // a2
    assert!(attacks.contains(24)); // a4 (blocker included)
    assert!(!attacks.contains(32)); // a5 (blocked)
    assert!(attacks.contains(7)); // h1
}

#[test]
fn test_bishop_attacks_negative_ray_blocker() {
    // Bishop on f6, blocker on c3: stops at c3 on the south-west ray
    let attacks = bishop_attacks(45, Bitboard::from_square(18));
    assert!(attacks.contains(36)); // e5
    assert!(attacks.contains(18)); // c3
    assert!(!attacks.contains(9)); // b2
}

#[test]
fn test_attacks_from_dispatch() {
    let occ = Bitboard::EMPTY;
    assert_eq!(attacks_from(PieceKind::Knight, Color::White, 28, occ), knight_attacks(28));
    assert_eq!(attacks_from(PieceKind::Queen, Color::Black, 28, occ), queen_attacks(28, occ));
    assert_eq!(attacks_from(PieceKind::Pawn, Color::Black, 28, occ), pawn_attacks(28, Color::Black));
}
