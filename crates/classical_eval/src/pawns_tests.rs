use super::*;
use chess_core::coord_to_sq;

fn sq(c: &str) -> u8 {
    coord_to_sq(c).unwrap()
}

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn flags(fen: &str, c: Color, at: &str) -> PawnFlags {
    let p = pos(fen);
    classify_pawn(
        c,
        sq(at),
        p.pieces(c, PieceKind::Pawn),
        p.pieces(c.other(), PieceKind::Pawn),
    )
}

#[test]
fn test_isolated_and_doubled() {
    let fen = "4k3/8/8/8/8/4P3/P3P3/4K3 w - - 0 1";
    let a2 = flags(fen, Color::White, "a2");
    assert!(a2.isolated && a2.passed && !a2.doubled);
    let e2 = flags(fen, Color::White, "e2");
    assert!(e2.isolated && e2.doubled);
    let e3 = flags(fen, Color::White, "e3");
    assert!(e3.isolated && !e3.doubled);
}

#[test]
fn test_chain_looks_sideways_and_back() {
    let fen = "4k3/8/8/8/3P4/4P3/8/4K3 w - - 0 1";
    assert!(flags(fen, Color::White, "d4").chain);
    assert!(!flags(fen, Color::White, "e3").chain);
    let side_by_side = "4k3/8/8/8/3PP3/8/8/4K3 w - - 0 1";
    assert!(flags(side_by_side, Color::White, "d4").chain);
    assert!(flags(side_by_side, Color::White, "e4").chain);
}

#[test]
fn test_opposed_and_passed() {
    let fen = "4k3/8/4p3/8/4P3/8/8/4K3 w - - 0 1";
    let e4 = flags(fen, Color::White, "e4");
    assert!(e4.opposed && !e4.passed);
    let e6 = flags(fen, Color::Black, "e6");
    assert!(e6.opposed && !e6.passed);

    // An enemy pawn on a neighbouring file ahead also stops it
    let fen = "4k3/3p4/8/8/4P3/8/8/4K3 w - - 0 1";
    assert!(!flags(fen, Color::White, "e4").passed);
    // One that has gone past does not
    let fen = "4k3/8/8/8/4P3/3p4/8/4K3 w - - 0 1";
    assert!(flags(fen, Color::White, "e4").passed);
}

#[test]
fn test_backward_pawn() {
    // d3 cannot advance safely and has no neighbour behind it
    let fen = "4k3/8/8/2p5/2P1P3/3P4/8/4K3 w - - 0 1";
    let d3 = flags(fen, Color::White, "d3");
    assert!(d3.backward && !d3.chain && !d3.isolated && !d3.passed);

    // Without the enemy pawn the corridor is clear, and d3 is passed
    let fen = "4k3/8/8/8/2P1P3/3P4/8/4K3 w - - 0 1";
    let d3 = flags(fen, Color::White, "d3");
    assert!(d3.passed && !d3.backward);

    // A neighbour behind can still come up to support it
    let fen = "4k3/8/8/2p5/2P1P3/3P4/4P3/4K3 w - - 0 1";
    assert!(!flags(fen, Color::White, "d3").backward);
}

#[test]
fn test_backward_mirrors_for_black() {
    let white = pos("4k3/8/8/2p5/2P1P3/3P4/8/4K3 w - - 0 1");
    let black = white.mirrored();
    let f = classify_pawn(
        Color::Black,
        sq("d6"),
        black.pieces(Color::Black, PieceKind::Pawn),
        black.pieces(Color::White, PieceKind::Pawn),
    );
    assert!(f.backward);
}

#[test]
fn test_passed_pawn_score() {
    let params = EvalParams::default();
    let p = pos("4k3/8/4P3/8/8/8/8/4K3 w - - 0 1");
    let mut weak = Bitboard::EMPTY;
    let mut passed = Bitboard::EMPTY;
    let own = p.pieces(Color::White, PieceKind::Pawn);
    let s = evaluate_pawn(Color::White, sq("e6"), own, Bitboard::EMPTY, &params, &mut weak, &mut passed);
    // r = 4, rr = 12; isolated as well
    assert_eq!(s, Score::new(600 * 12 - 1000, 1100 * 17 - 1100));
    assert!(weak.contains(sq("e6")));
    assert!(passed.contains(sq("e6")));
}

#[test]
fn test_rook_file_passer_penalised() {
    let params = EvalParams::default();
    let mut weak = Bitboard::EMPTY;
    let mut passed = Bitboard::EMPTY;
    let a = evaluate_pawn(
        Color::White,
        sq("a5"),
        Bitboard::from_square(sq("a5")),
        Bitboard::EMPTY,
        &params,
        &mut weak,
        &mut passed,
    );
    let b = evaluate_pawn(
        Color::White,
        sq("b5"),
        Bitboard::from_square(sq("b5")),
        Bitboard::EMPTY,
        &params,
        &mut weak,
        &mut passed,
    );
    assert_eq!(b - a, params.passed_pawn_file_ah_penalty);
}

#[test]
fn test_candidate_passer() {
    // c4 and its neighbours outnumber the lone stopper on d6
    let fen = "4k3/8/3p4/8/1PPP4/8/8/4K3 w - - 0 1";
    let p = pos(fen);
    let own = p.pieces(Color::White, PieceKind::Pawn);
    let theirs = p.pieces(Color::Black, PieceKind::Pawn);
    let f = classify_pawn(Color::White, sq("c4"), own, theirs);
    assert!(!f.passed && !f.opposed && !f.isolated && !f.doubled);

    let params = EvalParams::default();
    let (mut weak, mut passed) = (Bitboard::EMPTY, Bitboard::EMPTY);
    let with = evaluate_pawn(Color::White, sq("c4"), own, theirs, &params, &mut weak, &mut passed);

    let mut no_candidate = params.clone();
    no_candidate.candidate_bonus = Score::ZERO;
    let without =
        evaluate_pawn(Color::White, sq("c4"), own, theirs, &no_candidate, &mut weak, &mut passed);
    assert_eq!(with - without, params.candidate_bonus * 2);
}

#[test]
fn test_weak_squares_and_holes() {
    let entry = evaluate_pawns(&pos("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1"), &EvalParams::default());
    let white = Color::White.idx();
    assert_eq!(entry.pawn_attacks[white], Bitboard::from_square(sq("d5")) | Bitboard::from_square(sq("f5")));
    assert!(!entry.weak_squares[white].contains(sq("d7")));
    assert!(entry.weak_squares[white].contains(sq("e5")));
    assert!(entry.weak_squares[white].contains(sq("d4")));
    assert!(entry.holes[white].contains(sq("d4")));
    assert!(!entry.holes[white].contains(sq("e6")));
    // No black pawns: Black never covers anything
    assert_eq!(entry.weak_squares[Color::Black.idx()], Bitboard::ALL);
}

#[test]
fn test_pawn_score_is_antisymmetric() {
    let params = EvalParams::default();
    let p = pos("4k3/pp3p2/2p5/3P4/1P6/4P3/P5PP/4K3 w - - 0 1");
    let a = evaluate_pawns(&p, &params);
    let b = evaluate_pawns(&p.mirrored(), &params);
    assert_eq!(a.score, -b.score);
}

#[test]
fn test_table_rounds_capacity() {
    assert_eq!(PawnTable::new(1000).capacity(), 1024);
    assert_eq!(PawnTable::new(0).capacity(), 1);
    assert_eq!(PawnTable::default().capacity(), DEFAULT_PAWN_TABLE_ENTRIES);
}

#[test]
fn test_table_size_is_capped() {
    assert_eq!(table_slots(usize::MAX), MAX_PAWN_TABLE_ENTRIES);
    assert_eq!(table_slots(MAX_PAWN_TABLE_ENTRIES + 1), MAX_PAWN_TABLE_ENTRIES);
    assert_eq!(table_slots(usize::MAX / 2 + 2), MAX_PAWN_TABLE_ENTRIES);
    assert_eq!(table_slots(3), 4);
}

#[test]
fn test_table_probe_store_replace() {
    let mut table = PawnTable::new(1);
    assert!(table.probe(42).is_none());

    let a = PawnEntry { key: 42, score: Score::new(1, 2), ..PawnEntry::default() };
    table.store(a);
    assert_eq!(table.probe(42), Some(&a));
    assert!(table.probe(43).is_none());

    let b = PawnEntry { key: 43, score: Score::new(3, 4), ..PawnEntry::default() };
    table.store(b);
    assert!(table.probe(42).is_none());
    assert_eq!(table.probe(43), Some(&b));

    table.clear();
    assert!(table.probe(43).is_none());
}

#[test]
fn test_pawnless_position_is_cached() {
    let params = EvalParams::default();
    let p = pos("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    assert_eq!(p.pawn_key, 0);
    let mut table = PawnTable::new(16);
    assert!(table.probe(0).is_none());
    let entry = table.get_or_compute(&p, &params);
    assert_eq!(entry, evaluate_pawns(&p, &params));
    assert_eq!(table.probe(0), Some(&entry));
}
