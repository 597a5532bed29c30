//! Material and piece-square values maintained incrementally by the position.
//!
//! Units are fixed point: one pawn is 10_000. Every entry is an (mg, eg)
//! pair. Tables are written from White's point of view with rank 8 on the
//! first row, so White reads `sq ^ 56` and Black reads `sq`.

use crate::types::{Color, Piece, PieceKind};

/// Full endgame weight of [`Position::game_phase`](crate::Position::game_phase).
pub const GAME_PHASE_MAX: i32 = 65536;

/// Non-pawn material (both sides, mg values) at or above which the phase is 0.
pub const MIDGAME_LIMIT: i32 = 600_000;
/// Non-pawn material at or below which the phase is `GAME_PHASE_MAX`.
pub const ENDGAME_LIMIT: i32 = 150_000;

/// (mg, eg), indexed by PieceKind::idx().
pub const PIECE_VALUES: [[i32; 2]; 6] = [
    [10_000, 12_000],
    [32_500, 33_000],
    [33_500, 34_000],
    [50_000, 52_000],
    [97_500, 100_000],
    [0, 0],
];

#[rustfmt::skip]
const PAWN_MG: [i32; 64] = [
       0,    0,    0,    0,    0,    0,    0,    0,
     300,  300,  400,  500,  500,  400,  300,  300,
     100,  100,  200,  300,  300,  200,  100,  100,
      50,   50,  100,  250,  250,  100,   50,   50,
       0,    0,    0,  200,  200,    0,    0,    0,
      50,  -50, -100,    0,    0, -100,  -50,   50,
      50,  100,  100, -200, -200,  100,  100,   50,
       0,    0,    0,    0,    0,    0,    0,    0,
];

#[rustfmt::skip]
const PAWN_EG: [i32; 64] = [
       0,    0,    0,    0,    0,    0,    0,    0,
     800,  800,  800,  800,  800,  800,  800,  800,
     500,  500,  500,  500,  500,  500,  500,  500,
     300,  300,  300,  300,  300,  300,  300,  300,
     150,  150,  150,  150,  150,  150,  150,  150,
      50,   50,   50,   50,   50,   50,   50,   50,
       0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
    -500, -400, -300, -300, -300, -300, -400, -500,
    -400, -200,    0,    0,    0,    0, -200, -400,
    -300,    0,  100,  150,  150,  100,    0, -300,
    -300,   50,  150,  200,  200,  150,   50, -300,
    -300,    0,  150,  200,  200,  150,    0, -300,
    -300,   50,  100,  150,  150,  100,   50, -300,
    -400, -200,    0,   50,   50,    0, -200, -400,
    -500, -400, -300, -300, -300, -300, -400, -500,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
    -200, -100, -100, -100, -100, -100, -100, -200,
    -100,    0,    0,    0,    0,    0,    0, -100,
    -100,    0,   50,  100,  100,   50,    0, -100,
    -100,   50,   50,  100,  100,   50,   50, -100,
    -100,    0,  100,  100,  100,  100,    0, -100,
    -100,  100,  100,  100,  100,  100,  100, -100,
    -100,   50,    0,    0,    0,    0,   50, -100,
    -200, -100, -100, -100, -100, -100, -100, -200,
];

#[rustfmt::skip]
const KING_MG: [i32; 64] = [
    -300, -400, -400, -500, -500, -400, -400, -300,
    -300, -400, -400, -500, -500, -400, -400, -300,
    -300, -400, -400, -500, -500, -400, -400, -300,
    -300, -400, -400, -500, -500, -400, -400, -300,
    -200, -300, -300, -400, -400, -300, -300, -200,
    -100, -200, -200, -200, -200, -200, -200, -100,
     200,  200,    0,    0,    0,    0,  200,  200,
     200,  300,  100,    0,    0,  100,  300,  200,
];

#[rustfmt::skip]
const KING_EG: [i32; 64] = [
    -500, -400, -300, -200, -200, -300, -400, -500,
    -300, -200, -100,    0,    0, -100, -200, -300,
    -300, -100,  200,  300,  300,  200, -100, -300,
    -300, -100,  300,  400,  400,  300, -100, -300,
    -300, -100,  300,  400,  400,  300, -100, -300,
    -300, -100,  200,  300,  300,  200, -100, -300,
    -300, -300,    0,    0,    0,    0, -300, -300,
    -500, -300, -300, -300, -300, -300, -300, -500,
];

const ZERO: [i32; 64] = [0; 64];

/// (mg table, eg table) per piece kind.
const TABLES: [(&[i32; 64], &[i32; 64]); 6] = [
    (&PAWN_MG, &PAWN_EG),
    (&KNIGHT, &KNIGHT),
    (&BISHOP, &BISHOP),
    (&ZERO, &ZERO),
    (&ZERO, &ZERO),
    (&KING_MG, &KING_EG),
];

/// Material plus piece-square value of `piece` on `sq`, from its owner's
/// point of view.
#[inline]
pub fn psq_value(piece: Piece, sq: u8) -> [i32; 2] {
    let idx = match piece.color {
        Color::White => (sq ^ 56) as usize,
        Color::Black => sq as usize,
    };
    let kind = piece.kind.idx();
    let (mg, eg) = TABLES[kind];
    [PIECE_VALUES[kind][0] + mg[idx], PIECE_VALUES[kind][1] + eg[idx]]
}

/// Value counted toward the game phase (mg value of non-pawn, non-king pieces).
#[inline]
pub fn phase_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn | PieceKind::King => 0,
        _ => PIECE_VALUES[kind.idx()][0],
    }
}

/// Map non-pawn material (both sides) to `0..=GAME_PHASE_MAX`.
pub fn phase_from_material(non_pawn_material: i32) -> i32 {
    let npm = non_pawn_material.clamp(ENDGAME_LIMIT, MIDGAME_LIMIT);
    ((MIDGAME_LIMIT - npm) as i64 * GAME_PHASE_MAX as i64 / (MIDGAME_LIMIT - ENDGAME_LIMIT) as i64)
        as i32
}
