use thiserror::Error;

use crate::types::Color;

/// Reasons a FEN string cannot be turned into a [`Position`](crate::Position).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 fields, found {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks, found {0}")]
    WrongRankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    BadRankLength { rank: usize },
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),
    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),
    #[error("invalid en passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
    #[error("{color:?} has {count} kings, expected exactly one")]
    KingCount { color: Color, count: u32 },
    #[error("pawn on back rank square {0}")]
    PawnOnBackRank(u8),
    #[error("{color:?} has {count} pieces, at most 16 allowed")]
    TooManyPieces { color: Color, count: u32 },
}
