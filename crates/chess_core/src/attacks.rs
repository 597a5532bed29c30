//! Pre-computed attack tables and the attack queries used by movegen and
//! evaluation.
//!
//! Leapers (knight, king, pawn) read a constant table. Sliders walk
//! pre-computed rays and cut them at the first blocker.

use crate::bitboard::Bitboard;
use crate::types::{Color, PieceKind};

const fn leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut bb = 0u64;
        let mut i = 0;
        while i < deltas.len() {
            let f = file + deltas[i].0;
            let r = rank + deltas[i].1;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                bb |= 1u64 << ((r * 8 + f) as u32);
            }
            i += 1;
        }
        table[sq] = Bitboard(bb);
        sq += 1;
    }
    table
}

pub static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&[
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
]);

pub static KING_ATTACKS: [Bitboard; 64] = leaper_table(&[
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
]);

/// Pawn captures, indexed by [color][square].
pub static PAWN_ATTACKS: [[Bitboard; 64]; 2] = [
    leaper_table(&[(-1, 1), (1, 1)]),
    leaper_table(&[(-1, -1), (1, -1)]),
];

/// Ray directions as (file step, rank step).
/// 0=N, 1=NE, 2=E, 3=SE, 4=S, 5=SW, 6=W, 7=NW
const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// RAYS[direction][square]: every square in that direction, excluding the origin.
pub static RAYS: [[Bitboard; 64]; 8] = {
    let mut rays = [[Bitboard::EMPTY; 64]; 8];
    let mut dir = 0;
    while dir < 8 {
        let (df, dr) = DIRECTIONS[dir];
        let mut sq = 0;
        while sq < 64 {
            let mut f = (sq % 8) as i8 + df;
            let mut r = (sq / 8) as i8 + dr;
            let mut bb = 0u64;
            while f >= 0 && f < 8 && r >= 0 && r < 8 {
                bb |= 1u64 << ((r * 8 + f) as u32);
                f += df;
                r += dr;
            }
            rays[dir][sq] = Bitboard(bb);
            sq += 1;
        }
        dir += 1;
    }
    rays
};

#[inline(always)]
pub fn pawn_attacks(sq: u8, c: Color) -> Bitboard {
    PAWN_ATTACKS[c.idx()][sq as usize]
}

#[inline(always)]
pub fn knight_attacks(sq: u8) -> Bitboard {
    KNIGHT_ATTACKS[sq as usize]
}

#[inline(always)]
pub fn king_attacks(sq: u8) -> Bitboard {
    KING_ATTACKS[sq as usize]
}

/// Ray from `sq` in `dir`, cut after the first occupied square.
#[inline(always)]
fn ray_attacks(dir: usize, sq: u8, occupied: Bitboard) -> Bitboard {
    let ray = RAYS[dir][sq as usize];
    let blockers = ray & occupied;
    // Directions 0..=2 and 7 grow toward h8, so the nearest blocker is the lsb.
    let nearest = if dir <= 2 || dir == 7 {
        blockers.lsb()
    } else {
        blockers.msb()
    };
    match nearest {
        Some(b) => ray & !RAYS[dir][b as usize],
        None => ray,
    }
}

#[inline]
pub fn bishop_attacks(sq: u8, occupied: Bitboard) -> Bitboard {
    ray_attacks(1, sq, occupied)
        | ray_attacks(3, sq, occupied)
        | ray_attacks(5, sq, occupied)
        | ray_attacks(7, sq, occupied)
}

#[inline]
pub fn rook_attacks(sq: u8, occupied: Bitboard) -> Bitboard {
    ray_attacks(0, sq, occupied)
        | ray_attacks(2, sq, occupied)
        | ray_attacks(4, sq, occupied)
        | ray_attacks(6, sq, occupied)
}

#[inline]
pub fn queen_attacks(sq: u8, occupied: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}

/// Squares attacked by a `kind` piece of colour `c` on `sq`, given the
/// blocker set. Pawns report captures only.
#[inline]
pub fn attacks_from(kind: PieceKind, c: Color, sq: u8, occupied: Bitboard) -> Bitboard {
    match kind {
        PieceKind::Pawn => pawn_attacks(sq, c),
        PieceKind::Knight => knight_attacks(sq),
        PieceKind::Bishop => bishop_attacks(sq, occupied),
        PieceKind::Rook => rook_attacks(sq, occupied),
        PieceKind::Queen => queen_attacks(sq, occupied),
        PieceKind::King => king_attacks(sq),
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
