//! Mobility, king-ring pressure and placement bonuses for queens, rooks,
//! bishops and knights.

use chess_core::{
    Bitboard, Color, PieceKind, Position, attacks_from, king_attacks, relative_rank,
};

use crate::params::EvalParams;
use crate::pawns::PawnEntry;
use crate::score::Score;
use crate::tables::{FILE_MASK, RANK_MASK, square_ahead};

/// Call-scoped accumulators shared by the piece terms and king safety.
/// Indexed by [color] or [color][piece kind].
#[derive(Clone, Debug, Default)]
pub struct EvalState {
    pub king_square: [u8; 2],
    pub attacked: [[Bitboard; 6]; 2],
    pub weak_squares: [Bitboard; 2],
    pub holes: [Bitboard; 2],
    pub king_ring: [Bitboard; 2],
    pub king_shield: [Bitboard; 2],
    pub king_far_shield: [Bitboard; 2],
    pub king_attackers_count: [i32; 2],
    pub king_attackers_weight: [i32; 2],
    pub king_adjacent_zone_attacks: [i32; 2],
}

impl EvalState {
    /// King zones for both sides. `None` when a king is missing.
    pub fn new(pos: &Position) -> Option<Self> {
        let mut state = EvalState::default();
        for c in Color::BOTH {
            let k = pos.king_square(c)?;
            let shield = king_attacks(k);
            let mut ring = shield;
            if relative_rank(c, k) < 7 {
                ring |= square_ahead(c, k).map_or(Bitboard::EMPTY, king_attacks);
            }
            state.king_square[c.idx()] = k;
            state.king_shield[c.idx()] = shield;
            state.king_ring[c.idx()] = ring;
            state.king_far_shield[c.idx()] = ring & !(shield | Bitboard::from_square(k));
        }
        Some(state)
    }

    /// Copy the pawn-derived sets of a pawn entry in.
    pub fn load_pawns(&mut self, entry: &PawnEntry) {
        for c in Color::BOTH {
            self.attacked[c.idx()][PieceKind::Pawn.idx()] = entry.pawn_attacks[c.idx()];
        }
        self.weak_squares = entry.weak_squares;
        self.holes = entry.holes;
    }

    /// Union of everything `c` attacks with the given kinds.
    pub fn attacks_by(&self, c: Color, kinds: &[PieceKind]) -> Bitboard {
        kinds
            .iter()
            .fold(Bitboard::EMPTY, |acc, k| acc | self.attacked[c.idx()][k.idx()])
    }
}

/// Own pieces a slider of `kind` looks through when counting its reach.
fn see_through(pos: &Position, c: Color, kind: PieceKind) -> Bitboard {
    let queens = pos.pieces(c, PieceKind::Queen);
    match kind {
        PieceKind::Rook => pos.pieces(c, PieceKind::Rook) | queens,
        PieceKind::Bishop => pos.pieces(c, PieceKind::Bishop) | queens,
        PieceKind::Queen => queens,
        _ => Bitboard::EMPTY,
    }
}

/// Sum of the terms for every `kind` piece of colour `c`, from `c`'s point
/// of view. Attack sets and king pressure are recorded in `state`.
/// Pawns and kings have no terms here.
pub fn evaluate_pieces(
    pos: &Position,
    params: &EvalParams,
    c: Color,
    kind: PieceKind,
    state: &mut EvalState,
) -> Score {
    if matches!(kind, PieceKind::Pawn | PieceKind::King) {
        return Score::ZERO;
    }
    let them = c.other();
    let (us_i, them_i) = (c.idx(), them.idx());
    let blockers = pos.bitboards.occupied() & !see_through(pos, c, kind);
    let enemy_king = state.king_square[them_i];
    let enemy_king_zone = king_attacks(enemy_king);
    let enemy_king_on_back_rank = relative_rank(them, enemy_king) == 0;
    let enemy_pawn_attacks = state.attacked[them_i][PieceKind::Pawn.idx()];
    let own_pawns = pos.pieces(c, PieceKind::Pawn);
    let enemy_pawns = pos.pieces(them, PieceKind::Pawn);

    let mut s = Score::ZERO;
    for sq in pos.pieces(c, kind) {
        let attack = attacks_from(kind, c, sq, blockers);

        if (attack & state.king_ring[them_i]).is_not_empty() {
            state.king_attackers_count[us_i] += 1;
            state.king_attackers_weight[us_i] = state.king_attackers_weight[us_i]
                .saturating_add(params.king_attack_weights.weight(kind));
            state.king_adjacent_zone_attacks[us_i] += (attack & enemy_king_zone).popcount() as i32;
        }
        state.attacked[us_i][kind.idx()] |= attack;

        let mobility = (attack & !enemy_pawn_attacks).popcount();
        s += params.mobility.bonus(kind, mobility);

        let rel_rank = relative_rank(c, sq);
        match kind {
            PieceKind::Queen | PieceKind::Rook => {
                let (on_7th, on_pawns) = if kind == PieceKind::Queen {
                    (params.queen_on_7th, params.queen_on_pawns)
                } else {
                    (params.rook_on_7th, params.rook_on_pawns)
                };
                if rel_rank == 6 && enemy_king_on_back_rank {
                    s += on_7th;
                }
                if rel_rank > 4 && (RANK_MASK[sq as usize] & enemy_pawns).is_not_empty() {
                    s += on_pawns;
                }
                if kind == PieceKind::Rook && (FILE_MASK[sq as usize] & own_pawns).is_empty() {
                    if (FILE_MASK[sq as usize] & enemy_pawns).is_empty() {
                        s += params.rook_on_open_file;
                    } else {
                        s += params.rook_on_semi_open_file;
                    }
                }
            }
            PieceKind::Knight | PieceKind::Bishop => {
                if rel_rank >= 4 && state.weak_squares[them_i].contains(sq) {
                    let bonus = if kind == PieceKind::Knight {
                        params.knight_outpost
                    } else {
                        params.bishop_outpost
                    };
                    s += bonus.outpost;
                    if state.attacked[us_i][PieceKind::Pawn.idx()].contains(sq) {
                        s += bonus.supported;
                    }
                    if state.holes[them_i].contains(sq) {
                        s += bonus.hole;
                    }
                }
            }
            PieceKind::Pawn | PieceKind::King => {}
        }
    }
    s
}

#[cfg(test)]
#[path = "pieces_tests.rs"]
mod pieces_tests;
