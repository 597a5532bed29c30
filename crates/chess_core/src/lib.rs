//! Board representation shared by the evaluation crates: bitboards, attack
//! tables, zobrist keys, piece-square values and a `Position` whose hash
//! keys, material and phase are kept up to date incrementally.

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod error;
pub mod movegen;
pub mod psqt;
pub mod types;
pub mod zobrist;

pub use attacks::*;
pub use bitboard::*;
pub use board::*;
pub use error::FenError;
pub use movegen::*;
pub use psqt::{ENDGAME_LIMIT, GAME_PHASE_MAX, MIDGAME_LIMIT, PIECE_VALUES};
pub use types::*;
pub use zobrist::{ZOBRIST, material_key};
