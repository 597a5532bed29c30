//! Random legal playouts: every incrementally maintained field must match a
//! from-scratch rebuild after each make and each unmake.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use chess_core::{Position, legal_moves};

const PLAYOUTS: u64 = 64;
const MAX_PLIES: usize = 120;

const STARTS: [&str; 3] = [
    chess_core::START_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
];

fn assert_matches_rebuild(pos: &Position, context: &str) {
    let fresh = pos.rebuilt();
    assert_eq!(pos.hash, fresh.hash, "hash mismatch {context}");
    assert_eq!(pos.pawn_key, fresh.pawn_key, "pawn key mismatch {context}");
    assert_eq!(pos.material_key, fresh.material_key, "material key mismatch {context}");
    assert_eq!(pos.material, fresh.material, "material mismatch {context}");
    assert_eq!(
        pos.non_pawn_material, fresh.non_pawn_material,
        "non-pawn material mismatch {context}"
    );
}

#[test]
fn incremental_state_survives_random_playouts() {
    (0..PLAYOUTS).into_par_iter().for_each(|seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = STARTS[seed as usize % STARTS.len()];
        let mut pos = Position::from_fen(start).expect("valid start fen");
        let mut history = Vec::new();

        for ply in 0..MAX_PLIES {
            let moves = legal_moves(&pos);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let undo = pos.make_move(mv);
            assert_matches_rebuild(&pos, &format!("after ply {ply} of seed {seed}"));
            history.push((mv, undo));
        }

        while let Some((mv, undo)) = history.pop() {
            pos.unmake_move(mv, undo);
            assert_matches_rebuild(&pos, &format!("unwinding seed {seed}"));
        }
        assert_eq!(pos.to_fen(), Position::from_fen(start).unwrap().to_fen());
    });
}

#[test]
fn mirrored_playouts_stay_mirrored() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut pos = Position::startpos();
    for _ in 0..40 {
        let moves = legal_moves(&pos);
        if moves.is_empty() {
            break;
        }
        pos.make_move(moves[rng.gen_range(0..moves.len())]);

        let m = pos.mirrored();
        assert_eq!(m.material, [-pos.material[0], -pos.material[1]]);
        assert_eq!(m.game_phase(), pos.game_phase());
        assert_eq!(legal_moves(&m).len(), legal_moves(&pos).len());
        assert_eq!(m.mirrored().to_fen(), pos.to_fen());
    }
}
