//! Zobrist hashing for positions, pawn skeletons and material balances.
//!
//! Three keys are maintained incrementally by [`Position`](crate::Position):
//! - the full position hash (pieces, side to move, castling, en passant),
//! - the pawn key (pawn placement only, both colours),
//! - the material key (piece counts only, independent of squares).
//!
//! The material key XORs one random value per (colour, kind, ordinal), so a
//! position holding `n` pieces of a kind contributes the values for ordinals
//! `0..n`. Two positions share a material key exactly when they share every
//! piece count.

use crate::types::{Color, Piece, PieceKind};

/// Ordinals beyond this share the last slot. Legal positions never get there.
pub const MAX_MATERIAL_ORDINAL: usize = 16;

/// Pre-computed random values for Zobrist hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    /// XOR-ed in when Black is to move
    pub side_to_move: u64,
    /// [wk, wq, bk, bq]
    pub castling: [u64; 4],
    /// En passant file (0-7)
    pub en_passant: [u64; 8],
    /// Indexed by [color][piece_kind][ordinal]
    pub material: [[[u64; MAX_MATERIAL_ORDINAL]; 6]; 2],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate keys with xorshift64 from a fixed seed.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x123456789ABCDEF0u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut piece = 0;
            while piece < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[color][piece][sq] = state;
                    sq += 1;
                }
                piece += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        let mut material = [[[0u64; MAX_MATERIAL_ORDINAL]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut piece = 0;
            while piece < 6 {
                let mut n = 0;
                while n < MAX_MATERIAL_ORDINAL {
                    state = xorshift64(state);
                    material[color][piece][n] = state;
                    n += 1;
                }
                piece += 1;
            }
            color += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
            material,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }

    /// Castling right index: 0=wk, 1=wq, 2=bk, 3=bq.
    #[inline(always)]
    pub fn castling_key(&self, index: usize) -> u64 {
        self.castling[index]
    }

    #[inline(always)]
    pub fn ep_key(&self, file: u8) -> u64 {
        self.en_passant[file as usize]
    }

    /// Key of the `ordinal`-th piece (0-based) of a colour and kind.
    #[inline(always)]
    pub fn material_part(&self, color: Color, kind: PieceKind, ordinal: u32) -> u64 {
        let n = (ordinal as usize).min(MAX_MATERIAL_ORDINAL - 1);
        self.material[color.idx()][kind.idx()][n]
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

/// Material key of a balance given piece counts, indexed by [color][piece_kind].
///
/// Matches [`Position::material_key`](crate::Position) for any position with
/// the same counts.
pub fn material_key(counts: &[[u8; 6]; 2]) -> u64 {
    let mut key = 0;
    for color in Color::BOTH {
        for kind in PieceKind::ALL {
            for ordinal in 0..counts[color.idx()][kind.idx()] as u32 {
                key ^= ZOBRIST.material_part(color, kind, ordinal);
            }
        }
    }
    key
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
