use crate::attacks::*;
use crate::bitboard::Bitboard;
use crate::{board::Position, types::*};

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

fn push_targets(from: u8, targets: Bitboard, out: &mut Vec<Move>) {
    for to in targets {
        out.push(Move::new(from, to));
    }
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    let bb = &pos.bitboards;
    let own = bb.color(us);
    let occ = bb.occupied();

    gen_pawns(pos, us, out);

    for kind in [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ] {
        for from in bb.pieces(us, kind) {
            push_targets(from, attacks_from(kind, us, from, occ) & !own, out);
        }
    }

    if let Some(ksq) = pos.king_square(us) {
        gen_castle(pos, ksq, us, out);
    }
}

fn gen_pawns(pos: &Position, c: Color, out: &mut Vec<Move>) {
    let bb = &pos.bitboards;
    let empty = !bb.occupied();
    let enemies = bb.color(c.other());
    let promo_rank = match c {
        Color::White => 7,
        Color::Black => 0,
    };
    let start_rank = match c {
        Color::White => 1,
        Color::Black => 6,
    };

    let mut push = |from: u8, to: u8| {
        if rank_of(to) == promo_rank {
            for pk in PROMOTIONS {
                let mut mv = Move::new(from, to);
                mv.promo = Some(pk);
                out.push(mv);
            }
        } else {
            out.push(Move::new(from, to));
        }
    };

    for from in bb.pieces(c, PieceKind::Pawn) {
        let single = Bitboard::from_square(from).forward(c) & empty;
        for to in single {
            push(from, to);
            if rank_of(from) == start_rank {
                for to2 in Bitboard::from_square(to).forward(c) & empty {
                    push(from, to2);
                }
            }
        }

        for to in pawn_attacks(from, c) & enemies {
            push(from, to);
        }
    }

    if let Some(ep) = pos.en_passant {
        for from in pawn_attacks(ep, c.other()) & bb.pieces(c, PieceKind::Pawn) {
            let mut mv = Move::new(from, ep);
            mv.is_en_passant = true;
            out.push(mv);
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    // (king from, king to, has right, squares that must be empty, squares that must be safe)
    let options: [(u8, u8, bool, &[u8], &[u8]); 2] = match c {
        Color::White => [
            (4, 6, pos.castling.wk, &[5, 6], &[5, 6]),
            (4, 2, pos.castling.wq, &[3, 2, 1], &[3, 2]),
        ],
        Color::Black => [
            (60, 62, pos.castling.bk, &[61, 62], &[61, 62]),
            (60, 58, pos.castling.bq, &[59, 58, 57], &[59, 58]),
        ],
    };

    if pos.in_check(c) {
        return;
    }

    let occ = pos.bitboards.occupied();
    let enemy = c.other();
    for (king_from, king_to, allowed, empty, safe) in options {
        if !allowed || from != king_from {
            continue;
        }
        if empty.iter().any(|&s| occ.contains(s)) {
            continue;
        }
        if safe.iter().any(|&s| pos.is_square_attacked(s, enemy)) {
            continue;
        }
        let mut mv = Move::new(king_from, king_to);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
