//! Top-level evaluation: material, tempo, pawns, pieces, space and king
//! safety, blended by game phase.

use std::sync::Arc;

use tracing::warn;

use chess_core::{Bitboard, Color, PieceKind, Position, relative_square};

use crate::context::EvalContext;
use crate::params::EvalParams;
use crate::pawns::PawnTable;
use crate::pieces::{EvalState, evaluate_pieces};
use crate::score::Score;
use crate::tables::KING_EXPOSED;

/// Internal units per pawn.
pub const UNITS_PER_PAWN: i32 = 10_000;

const PIECE_ORDER: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

const NON_KING: [PieceKind; 5] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// Score in pawns, for display.
pub fn to_pawns(score: i32) -> f64 {
    score as f64 / UNITS_PER_PAWN as f64
}

/// Score from the side to move's point of view.
pub fn evaluate(pos: &Position, ctx: &EvalContext, pawns: &mut PawnTable) -> i32 {
    let score = evaluate_white(pos, ctx, pawns);
    match pos.side_to_move {
        Color::White => score,
        Color::Black => -score,
    }
}

/// Score from White's point of view.
pub fn evaluate_white(pos: &Position, ctx: &EvalContext, pawns: &mut PawnTable) -> i32 {
    let Some(mut state) = EvalState::new(pos) else {
        warn!(fen = %pos.to_fen(), "position without both kings, evaluating as 0");
        return 0;
    };
    let params = &ctx.params;

    let mut score = Score::from(pos.material);

    if let Some(verdict) = ctx
        .material
        .lookup(pos.material_key)
        .and_then(|entry| entry.resolve(pos))
    {
        return verdict;
    }

    match pos.side_to_move {
        Color::White => score += params.tempo,
        Color::Black => score -= params.tempo,
    }

    for c in Color::BOTH {
        let bishops = pos.pieces(c, PieceKind::Bishop);
        if (bishops & Bitboard::LIGHT_SQUARES).is_not_empty()
            && (bishops & Bitboard::DARK_SQUARES).is_not_empty()
        {
            score += signed(c, params.bishop_pair);
        }
    }

    let entry = pawns.get_or_compute(pos, params);
    state.load_pawns(&entry);
    score += entry.score;

    for c in Color::BOTH {
        for kind in PIECE_ORDER {
            score += signed(c, evaluate_pieces(pos, params, c, kind, &mut state));
        }
    }
    for c in Color::BOTH {
        state.attacked[c.idx()][PieceKind::King.idx()] = state.king_shield[c.idx()];
    }

    score += space(pos, params, &state);
    score += king_safety(pos, params, &state);

    score.interpolate(pos.game_phase())
}

#[inline]
fn signed(c: Color, s: Score) -> Score {
    match c {
        Color::White => s,
        Color::Black => -s,
    }
}

/// Safe squares on or ahead of each side's pawns, White minus Black.
fn space(pos: &Position, params: &EvalParams, state: &EvalState) -> Score {
    let mut diff = 0i32;
    for c in Color::BOTH {
        let front = pos.pieces(c, PieceKind::Pawn).forward_fill(c);
        let safe = front & !state.attacks_by(c.other(), &NON_KING);
        let n = safe.popcount() as i32;
        diff += if c == Color::White { n } else { -n };
    }
    params.space * diff
}

/// Pawn shelter for both kings, then attack units for each attacking side.
fn king_safety(pos: &Position, params: &EvalParams, state: &EvalState) -> Score {
    let mut s = Score::ZERO;

    for c in Color::BOTH {
        let own_pawns = pos.pieces(c, PieceKind::Pawn);
        let near = (state.king_shield[c.idx()] & own_pawns).popcount() as i32;
        let far = (state.king_far_shield[c.idx()] & own_pawns).popcount() as i32;
        let shelter = params.king_shield_bonus * near + params.king_far_shield_bonus * far;
        s += signed(c, shelter);
    }

    for c in Color::BOTH {
        let units = attack_units(params, state, c);
        if units > 0 {
            let penalty = units.saturating_mul(units);
            s += signed(c, Score::new(penalty, penalty / 2));
        }
    }

    s
}

/// How hard `c` is pressing the enemy king, before squaring. Zero unless at
/// least two pieces reach the ring and one touches the squares next to the king.
pub fn attack_units(params: &EvalParams, state: &EvalState, c: Color) -> i32 {
    let d = c.other();
    let (ci, di) = (c.idx(), d.idx());
    let count = state.king_attackers_count[ci];
    let adjacent = state.king_adjacent_zone_attacks[ci];
    if count < 2 || adjacent == 0 {
        return 0;
    }

    let undefended = state.attacks_by(c, &PieceKind::ALL)
        & state.attacked[di][PieceKind::King.idx()]
        & !state.attacks_by(d, &NON_KING);

    let weighted = (count.saturating_mul(state.king_attackers_weight[ci]) / 2)
        .min(params.king_attack_weight_cap);
    let exposure = KING_EXPOSED[relative_square(d, state.king_square[di]) as usize];
    let units = weighted
        .saturating_add(adjacent.saturating_add(undefended.popcount() as i32).saturating_mul(3))
        .saturating_add(exposure);
    units.max(0).min(params.max_attack_units.max(0))
}

/// One worker's evaluator: the shared context plus a private pawn table.
#[derive(Clone, Debug)]
pub struct Evaluator {
    ctx: Arc<EvalContext>,
    pawns: PawnTable,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Arc::new(EvalContext::default()))
    }
}

impl Evaluator {
    pub fn new(ctx: Arc<EvalContext>) -> Self {
        Self {
            ctx,
            pawns: PawnTable::with_default_size(),
        }
    }

    pub fn with_pawn_table_size(ctx: Arc<EvalContext>, entries: usize) -> Self {
        Self {
            ctx,
            pawns: PawnTable::new(entries),
        }
    }

    pub fn evaluate(&mut self, pos: &Position) -> i32 {
        evaluate(pos, &self.ctx, &mut self.pawns)
    }

    pub fn evaluate_white(&mut self, pos: &Position) -> i32 {
        evaluate_white(pos, &self.ctx, &mut self.pawns)
    }

    pub fn context(&self) -> &Arc<EvalContext> {
        &self.ctx
    }

    pub fn pawn_table(&self) -> &PawnTable {
        &self.pawns
    }

    pub fn clear_pawn_table(&mut self) {
        self.pawns.clear();
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
