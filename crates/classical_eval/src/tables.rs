//! Square masks for pawn-structure detection and the king exposure table.
//! Built at compile time, like the attack tables in `chess_core`.

use chess_core::{Bitboard, Color};

const fn file_mask(sq: usize) -> u64 {
    Bitboard::FILE_A.0 << (sq % 8)
}

const fn rank_mask(sq: usize) -> u64 {
    Bitboard::RANK_1.0 << (8 * (sq / 8))
}

const fn adjacent_files(sq: usize) -> u64 {
    let f = sq % 8;
    let mut m = 0;
    if f > 0 {
        m |= Bitboard::FILE_A.0 << (f - 1);
    }
    if f < 7 {
        m |= Bitboard::FILE_A.0 << (f + 1);
    }
    m
}

/// Ranks strictly ahead of `sq` from `white`'s (or Black's) side.
const fn ranks_ahead(white: bool, sq: usize) -> u64 {
    let r = sq / 8;
    if white {
        if r == 7 { 0 } else { !0u64 << (8 * (r + 1)) }
    } else if r == 0 {
        0
    } else {
        !0u64 >> (8 * (8 - r))
    }
}

const fn square_table(kind: u8) -> [Bitboard; 64] {
    let mut t = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        t[sq] = Bitboard(match kind {
            0 => file_mask(sq),
            1 => rank_mask(sq),
            _ => adjacent_files(sq),
        });
        sq += 1;
    }
    t
}

/// `with_adjacent` selects the passed span instead of the same-file front.
const fn ahead_table(with_adjacent: bool) -> [[Bitboard; 64]; 2] {
    let mut t = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0;
    while sq < 64 {
        let files = if with_adjacent {
            file_mask(sq) | adjacent_files(sq)
        } else {
            file_mask(sq)
        };
        t[0][sq] = Bitboard(ranks_ahead(true, sq) & files);
        t[1][sq] = Bitboard(ranks_ahead(false, sq) & files);
        sq += 1;
    }
    t
}

pub static FILE_MASK: [Bitboard; 64] = square_table(0);
pub static RANK_MASK: [Bitboard; 64] = square_table(1);
/// Both neighbouring files; a pawn with no friendly pawn here is isolated.
pub static ADJACENT_FILES: [Bitboard; 64] = square_table(2);
/// Same file, strictly ahead. Indexed by [color][square].
pub static FRONT_SQUARES: [[Bitboard; 64]; 2] = ahead_table(false);
/// Same and adjacent files, strictly ahead. Indexed by [color][square].
pub static PASSED_SPAN: [[Bitboard; 64]; 2] = ahead_table(true);

/// How open a king standing on a square is, indexed by the square relative
/// to the king's owner (a1 = own queen-side corner).
#[rustfmt::skip]
pub static KING_EXPOSED: [i32; 64] = [
     2,  0,  2,  5,  5,  2,  0,  2,
     2,  2,  4,  8,  8,  4,  2,  2,
     7, 10, 12, 12, 12, 12, 10,  7,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
];

#[inline(always)]
pub fn front_squares(c: Color, sq: u8) -> Bitboard {
    FRONT_SQUARES[c.idx()][sq as usize]
}

#[inline(always)]
pub fn passed_span(c: Color, sq: u8) -> Bitboard {
    PASSED_SPAN[c.idx()][sq as usize]
}

/// The square one step toward the opponent of `c`, if it is on the board.
#[inline]
pub fn square_ahead(c: Color, sq: u8) -> Option<u8> {
    Bitboard::from_square(sq).forward(c).lsb()
}

/// The square one step back toward `c`'s own side, if it is on the board.
#[inline]
pub fn square_behind(c: Color, sq: u8) -> Option<u8> {
    Bitboard::from_square(sq).forward(c.other()).lsb()
}

/// Rank mask of an optional square; off-board squares give the empty set.
#[inline]
pub fn rank_mask_of(sq: Option<u8>) -> Bitboard {
    sq.map_or(Bitboard::EMPTY, |s| RANK_MASK[s as usize])
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tables_tests;
