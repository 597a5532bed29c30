use super::*;

fn run(input: &str) -> String {
    let mut evaluator = Evaluator::with_pawn_table_size(Arc::new(EvalContext::default()), 64);
    let mut out = Vec::new();
    evaluate_lines(&mut evaluator, input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_startpos_line() {
    let out = run("startpos\n");
    assert_eq!(
        out,
        "0.1540 (1540) rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1\n"
    );
}

#[test]
fn test_bad_fen_is_skipped() {
    let out = run("not a fen\n\n4k3/8/8/8/8/8/8/4K3 w - - 0 1\n");
    assert_eq!(out, "0.0000 (0) 4k3/8/8/8/8/8/8/4K3 w - - 0 1\n");
}

#[test]
fn test_quit_stops_reading() {
    let out = run("startpos\nquit\nstartpos\n");
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_parse_position() {
    assert!(parse_position("startpos").is_ok());
    assert!(parse_position("8/8/8/8/8/8/8/8 w - - 0 1").is_err());
}

#[test]
fn test_negative_scores_format() {
    let pos = Position::startpos();
    assert!(format_line(&pos, -25_000).starts_with("-2.5000 (-25000) "));
}

#[test]
fn test_args_parse() {
    let args = Args::try_parse_from([
        "evalpos",
        "--params",
        "tuned.toml",
        "--pawn-table-entries",
        "1024",
        "startpos",
    ])
    .unwrap();
    assert_eq!(args.params, Some(PathBuf::from("tuned.toml")));
    assert_eq!(args.pawn_table_entries, 1024);
    assert_eq!(args.fens, vec!["startpos".to_string()]);
    assert!(!args.dump_params);
}
