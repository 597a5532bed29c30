//! Pawn structure: per-pawn classification, the derived square sets, and the
//! per-worker pawn hash table that memoises both by pawn key.

use tracing::{trace, warn};

use chess_core::{Bitboard, Color, PieceKind, Position, file_of, relative_rank};

use crate::params::EvalParams;
use crate::score::Score;
use crate::tables::{
    ADJACENT_FILES, RANK_MASK, front_squares, passed_span, rank_mask_of, square_ahead,
    square_behind,
};

pub const DEFAULT_PAWN_TABLE_ENTRIES: usize = 16_384;
/// Requests above this are capped.
pub const MAX_PAWN_TABLE_ENTRIES: usize = 1 << 20;

/// Corridor walk limit: a corridor cannot advance further than the board height.
const MAX_CORRIDOR_STEPS: usize = 8;

/// Structural flags of one pawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PawnFlags {
    pub isolated: bool,
    pub doubled: bool,
    pub opposed: bool,
    pub passed: bool,
    /// Own pawn beside it on this rank or the one behind.
    pub chain: bool,
    pub backward: bool,
}

pub fn classify_pawn(c: Color, sq: u8, own: Bitboard, theirs: Bitboard) -> PawnFlags {
    let adjacent = ADJACENT_FILES[sq as usize];
    let behind = square_behind(c, sq);
    let ahead = square_ahead(c, sq);

    let chain_ranks = RANK_MASK[sq as usize] | rank_mask_of(behind);
    let chain = (own & adjacent & chain_ranks).is_not_empty();
    let isolated = (own & adjacent).is_empty();
    let doubled = (own & front_squares(c, sq)).is_not_empty();
    let opposed = (theirs & front_squares(c, sq)).is_not_empty();
    let passed = (theirs & passed_span(c, sq)).is_empty();

    let mut backward = false;
    if let Some(advance) = ahead {
        // Own pawns beside or behind could still come up to defend it
        let supporters_behind = own & passed_span(c.other(), advance) & adjacent;
        if !(passed || isolated || chain) && supporters_behind.is_empty() {
            let all = own | theirs;
            let mut corridor = RANK_MASK[advance as usize] & adjacent;
            for _ in 0..MAX_CORRIDOR_STEPS {
                if corridor.is_empty() || (corridor & all).is_not_empty() {
                    break;
                }
                corridor = corridor.forward(c);
            }
            backward = ((corridor | corridor.forward(c)) & theirs).is_not_empty();
        }
    }

    PawnFlags {
        isolated,
        doubled,
        opposed,
        passed,
        chain,
        backward,
    }
}

/// Score one pawn from its owner's point of view, marking it in `weak` and
/// `passed_set` as appropriate.
pub fn evaluate_pawn(
    c: Color,
    sq: u8,
    own: Bitboard,
    theirs: Bitboard,
    params: &EvalParams,
    weak: &mut Bitboard,
    passed_set: &mut Bitboard,
) -> Score {
    let flags = classify_pawn(c, sq, own, theirs);
    let rel_rank = relative_rank(c, sq) as i32;
    let mut s = Score::ZERO;

    if flags.isolated {
        s -= params.isolated_pawn_penalty;
        weak.set(sq);
    }
    if flags.doubled {
        s -= params.doubled_pawn_penalty;
    }
    if flags.backward {
        s -= params.backward_pawn_penalty;
        weak.set(sq);
    }
    if flags.chain {
        s += params.chained_pawn_bonus;
    }

    if flags.passed && !flags.doubled {
        let r = rel_rank - 1;
        let rr = r * (r - 1);
        let bonus = params.passed_pawn_bonus;
        s += Score::new(bonus.mg * rr, bonus.eg * (rr + r + 1));
        passed_set.set(sq);

        let file = file_of(sq);
        if file == 0 || file == 7 {
            s -= params.passed_pawn_file_ah_penalty;
        }
        if flags.chain {
            s += params.passed_pawn_supported_bonus * r;
        }
    }

    if !(flags.passed || flags.isolated || flags.doubled || flags.opposed) {
        let stoppers = (passed_span(c, sq) & theirs).popcount();
        let helpers = behind_span(c, sq) & own;
        if stoppers < helpers.popcount() {
            s += params.candidate_bonus * (rel_rank - 1);
        }
    }

    s
}

/// Passed span of the square behind `sq`; empty when that square is off the board.
fn behind_span(c: Color, sq: u8) -> Bitboard {
    square_behind(c, sq).map_or(Bitboard::EMPTY, |b| passed_span(c, b))
}

/// Everything derived from one pawn skeleton.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PawnEntry {
    pub key: u64,
    /// White minus Black.
    pub score: Score,
    pub weak_pawns: Bitboard,
    pub passed_pawns: Bitboard,
    pub pawn_attacks: [Bitboard; 2],
    /// Squares the colour's pawns can never attack.
    pub weak_squares: [Bitboard; 2],
    /// Weak squares the colour's pawns can never occupy either.
    pub holes: [Bitboard; 2],
}

/// Classify every pawn of both colours and derive the square sets.
pub fn evaluate_pawns(pos: &Position, params: &EvalParams) -> PawnEntry {
    let mut entry = PawnEntry {
        key: pos.pawn_key,
        ..PawnEntry::default()
    };

    for c in Color::BOTH {
        let own = pos.pieces(c, PieceKind::Pawn);
        let theirs = pos.pieces(c.other(), PieceKind::Pawn);

        let mut side = Score::ZERO;
        for sq in own {
            side += evaluate_pawn(
                c,
                sq,
                own,
                theirs,
                params,
                &mut entry.weak_pawns,
                &mut entry.passed_pawns,
            );
        }
        match c {
            Color::White => entry.score += side,
            Color::Black => entry.score -= side,
        }

        let attacks = own.pawn_attacks(c);
        entry.pawn_attacks[c.idx()] = attacks;
        entry.weak_squares[c.idx()] = !attacks.forward_fill(c);
        entry.holes[c.idx()] = entry.weak_squares[c.idx()] & !own.forward_fill(c);
    }

    entry
}

/// Slot count for a table asked to hold `entries`.
pub fn table_slots(entries: usize) -> usize {
    entries.clamp(1, MAX_PAWN_TABLE_ENTRIES).next_power_of_two()
}

/// Direct-mapped pawn hash table. Each search worker owns one.
#[derive(Clone, Debug)]
pub struct PawnTable {
    slots: Vec<Option<PawnEntry>>,
    mask: usize,
}

impl Default for PawnTable {
    fn default() -> Self {
        Self::with_default_size()
    }
}

impl PawnTable {
    /// `entries` is rounded up to a power of two and capped at
    /// [`MAX_PAWN_TABLE_ENTRIES`].
    pub fn new(entries: usize) -> Self {
        let size = table_slots(entries);
        if size < entries {
            warn!(requested = entries, size, "pawn table size capped");
        }
        Self {
            slots: vec![None; size],
            mask: size - 1,
        }
    }

    pub fn with_default_size() -> Self {
        Self::new(DEFAULT_PAWN_TABLE_ENTRIES)
    }

    #[inline]
    pub fn probe(&self, key: u64) -> Option<&PawnEntry> {
        self.slots[key as usize & self.mask]
            .as_ref()
            .filter(|e| e.key == key)
    }

    /// Replaces whatever occupied the slot.
    #[inline]
    pub fn store(&mut self, entry: PawnEntry) {
        let idx = entry.key as usize & self.mask;
        self.slots[idx] = Some(entry);
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Cached entry for the position's pawn key, computed and stored on a miss.
    pub fn get_or_compute(&mut self, pos: &Position, params: &EvalParams) -> PawnEntry {
        if let Some(entry) = self.probe(pos.pawn_key) {
            return *entry;
        }
        trace!(key = pos.pawn_key, "pawn table miss");
        let entry = evaluate_pawns(pos, params);
        self.store(entry);
        entry
    }
}

#[cfg(test)]
#[path = "pawns_tests.rs"]
mod pawns_tests;
