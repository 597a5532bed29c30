use super::*;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn verdict(table: &MaterialTable, fen: &str) -> Option<i32> {
    let p = pos(fen);
    table.lookup(p.material_key).and_then(|e| e.resolve(&p))
}

#[test]
fn test_table_size() {
    // 12 drawn balances, 9 of them asymmetric, plus KBP v K for both colours
    assert_eq!(MaterialTable::new().len(), 23);
}

#[test]
fn test_minor_piece_draws_in_both_colours() {
    let t = MaterialTable::new();
    for fen in [
        "k7/8/8/8/8/8/8/7K w - - 0 1",
        "kb6/8/8/8/8/8/8/7K w - - 0 1",
        "k7/8/8/8/8/8/8/6NK b - - 0 1",
        "kn6/8/8/8/8/8/8/6BK w - - 0 1",
        "kb6/8/8/8/8/8/8/6NK w - - 0 1",
        "kbb5/8/8/8/8/8/8/6NK w - - 0 1",
        "kn6/8/8/8/8/8/8/5BBK w - - 0 1",
        "knn5/8/8/8/8/8/8/6BK b - - 0 1",
        "kb6/8/8/8/8/8/8/5BNK w - - 0 1",
    ] {
        assert_eq!(verdict(&t, fen), Some(0), "{fen}");
    }
}

#[test]
fn test_winning_material_misses() {
    let t = MaterialTable::new();
    for fen in [
        "k7/8/8/8/8/8/8/6RK w - - 0 1",
        "k7/8/8/8/8/8/8/5BBK w - - 0 1",
        "k7/8/8/8/8/8/P7/7K w - - 0 1",
        "kr6/8/8/8/8/8/8/6NK w - - 0 1",
    ] {
        assert!(t.lookup(pos(fen).material_key).is_none(), "{fen}");
    }
}

#[test]
fn test_kbp_wrong_bishop_rook_pawn_is_draw() {
    // a8 is light, bishop on c1 is dark, defender on b7
    assert_eq!(kbp_vs_k(&pos("8/1k6/8/8/8/8/P7/K1B5 w - - 0 1")), Some(0));
    // h8 is dark, bishop on f1 is light, defender on g6 (third rank from the corner)
    assert_eq!(kbp_vs_k(&pos("8/8/6k1/8/8/7P/8/K4B2 b - - 0 1")), Some(0));
}

#[test]
fn test_kbp_declines_outside_the_pattern() {
    // Right bishop: d1 is light like a8
    assert_eq!(kbp_vs_k(&pos("8/1k6/8/8/8/8/P7/K2B4 w - - 0 1")), None);
    // Not a rook pawn
    assert_eq!(kbp_vs_k(&pos("8/1k6/8/8/8/8/1P6/K1B5 w - - 0 1")), None);
    // Defender too far from the corner file
    assert_eq!(kbp_vs_k(&pos("8/3k4/8/8/8/8/P7/K1B5 w - - 0 1")), None);
    // Defender too far down the board
    assert_eq!(kbp_vs_k(&pos("8/8/8/1k6/8/8/P7/K1B5 w - - 0 1")), None);
}

#[test]
fn test_kbp_black_pawn_mirrors() {
    let white = pos("8/1k6/8/8/8/8/P7/K1B5 w - - 0 1");
    assert_eq!(kbp_vs_k(&white.mirrored()), Some(0));
    let table = MaterialTable::new();
    let m = white.mirrored();
    assert!(matches!(table.lookup(m.material_key), Some(MaterialEntry::Override(_))));
}
