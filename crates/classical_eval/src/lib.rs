//! Classical static evaluation.
//!
//! A position is scored as a tapered (middlegame, endgame) pair built from
//! incrementally maintained material, pawn structure, piece activity, space
//! and king safety, then blended by game phase into a single integer where
//! 10_000 is one pawn.
//!
//! Two caches sit in front of the work:
//! - a material table, keyed by the material key, that settles known drawn
//!   balances and the wrong-bishop rook-pawn ending without further work;
//! - a pawn table, keyed by the pawn key, that memoises pawn scores and the
//!   square sets derived from the pawn skeleton.
//!
//! The material table and the parameters live in an [`EvalContext`] that is
//! read-only and shared between workers. Every worker owns its pawn table,
//! usually through an [`Evaluator`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use chess_core::Position;
//! use classical_eval::{EvalContext, Evaluator};
//!
//! let mut evaluator = Evaluator::new(Arc::new(EvalContext::default()));
//! let score = evaluator.evaluate(&Position::startpos());
//! println!("{score}");
//! ```

pub mod context;
pub mod eval;
pub mod material;
pub mod params;
pub mod pawns;
pub mod pieces;
pub mod score;
pub mod tables;

pub use context::EvalContext;
pub use eval::{Evaluator, UNITS_PER_PAWN, evaluate, evaluate_white, to_pawns};
pub use material::{MaterialEntry, MaterialTable};
pub use params::{EvalParams, ParamsError};
pub use pawns::{DEFAULT_PAWN_TABLE_ENTRIES, MAX_PAWN_TABLE_ENTRIES, PawnEntry, PawnTable};
pub use score::Score;
