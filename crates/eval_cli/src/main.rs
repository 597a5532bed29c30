use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use chess_core::Position;
use classical_eval::{DEFAULT_PAWN_TABLE_ENTRIES, EvalContext, EvalParams, Evaluator, to_pawns};

/// Print a static evaluation, from the side to move's point of view, for
/// each FEN given. Reads one FEN per line from stdin when none are given.
#[derive(Parser, Debug)]
#[command(name = "evalpos", author, version, about, long_about = None)]
struct Args {
    /// Positions to evaluate; `startpos` is accepted
    fens: Vec<String>,

    /// Parameter profile (.toml or .json)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Pawn table size in entries, rounded up to a power of two and capped
    #[arg(long, default_value_t = DEFAULT_PAWN_TABLE_ENTRIES)]
    pawn_table_entries: usize,

    /// Print the default parameter profile as TOML and exit
    #[arg(long)]
    dump_params: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.dump_params {
        print!("{}", EvalParams::default().to_toml_string()?);
        return Ok(());
    }

    let params = match &args.params {
        Some(path) => EvalParams::load(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => EvalParams::default(),
    };
    let ctx = Arc::new(EvalContext::new(params)?);
    let mut evaluator = Evaluator::with_pawn_table_size(ctx, args.pawn_table_entries);
    info!(
        pawn_table = evaluator.pawn_table().capacity(),
        "evaluator ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.fens.is_empty() {
        let stdin = io::stdin();
        evaluate_lines(&mut evaluator, stdin.lock(), &mut out)?;
    } else {
        for fen in &args.fens {
            report(&mut evaluator, fen, &mut out)?;
        }
    }
    Ok(())
}

/// One FEN per line until EOF or `quit`. Blank lines are skipped.
fn evaluate_lines(
    evaluator: &mut Evaluator,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            debug!("quit received");
            break;
        }
        report(evaluator, line, out)?;
    }
    Ok(())
}

/// Evaluate one position and print it. A bad FEN goes to stderr and is not
/// fatal; only output failures are.
fn report(evaluator: &mut Evaluator, fen: &str, out: &mut impl Write) -> Result<()> {
    match parse_position(fen) {
        Ok(pos) => {
            out.write_all(format_line(&pos, evaluator.evaluate(&pos)).as_bytes())?;
            out.flush()?;
        }
        Err(e) => eprintln!("error: {e:#}"),
    }
    Ok(())
}

fn parse_position(fen: &str) -> Result<Position> {
    if fen == "startpos" {
        return Ok(Position::startpos());
    }
    Position::from_fen(fen).with_context(|| format!("invalid FEN '{fen}'"))
}

fn format_line(pos: &Position, score: i32) -> String {
    format!("{:.4} ({score}) {}\n", to_pawns(score), pos.to_fen())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod main_tests;
