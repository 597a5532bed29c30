use super::*;

#[test]
fn test_popcount() {
    assert_eq!(Bitboard::EMPTY.popcount(), 0);
    assert_eq!(Bitboard::file(0).popcount(), 8);
    assert_eq!(Bitboard::rank(7), Bitboard::RANK_8);
    assert_eq!(Bitboard::ALL.popcount(), 64);
}

#[test]
fn test_iterator_order() {
    let squares: Vec<u8> = Bitboard(0b1010).collect();
    assert_eq!(squares, vec![1, 3]);
}

#[test]
fn test_lsb_msb() {
    let bb = Bitboard::from_square(3) | Bitboard::from_square(40);
    assert_eq!(bb.lsb(), Some(3));
    assert_eq!(bb.msb(), Some(40));
    assert_eq!(Bitboard::EMPTY.msb(), None);
}

#[test]
fn test_shifts_do_not_wrap() {
    let a1 = Bitboard::from_square(0);
    assert_eq!(a1.north(), Bitboard::from_square(8));
    assert_eq!(a1.west(), Bitboard::EMPTY);
    assert_eq!(a1.north_west(), Bitboard::EMPTY);

    let h1 = Bitboard::from_square(7);
    assert_eq!(h1.east(), Bitboard::EMPTY);
    assert_eq!(h1.north_east(), Bitboard::EMPTY);
}

#[test]
fn test_square_colours() {
    assert!(Bitboard::DARK_SQUARES.contains(0)); // a1
    assert!(Bitboard::LIGHT_SQUARES.contains(7)); // h1
    assert!(Bitboard::LIGHT_SQUARES.contains(56)); // a8
    assert_eq!(Bitboard::LIGHT_SQUARES.popcount(), 32);
}

#[test]
fn test_fills() {
    let e4 = Bitboard::from_square(28);
    assert_eq!(e4.north_fill(), Bitboard(0x1010101010000000));
    assert_eq!(e4.south_fill(), Bitboard(0x0000000010101010));
    assert_eq!(e4.forward_fill(Color::Black), e4.south_fill());
}

#[test]
fn test_set_pawn_attacks() {
    // a2 and h2 only attack inward
    let pawns = Bitboard::from_square(8) | Bitboard::from_square(15);
    let attacks = pawns.pawn_attacks(Color::White);
    assert_eq!(attacks, Bitboard::from_square(17) | Bitboard::from_square(22));
}
