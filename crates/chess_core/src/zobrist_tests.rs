use super::*;
use crate::types::{Color, PieceKind};

#[test]
fn test_zobrist_keys_unique() {
    let mut seen = std::collections::HashSet::new();

    for color in 0..2 {
        for piece in 0..6 {
            for sq in 0..64 {
                assert!(seen.insert(ZOBRIST.pieces[color][piece][sq]), "Duplicate piece key");
            }
            for n in 0..MAX_MATERIAL_ORDINAL {
                assert!(seen.insert(ZOBRIST.material[color][piece][n]), "Duplicate material key");
            }
        }
    }

    assert!(seen.insert(ZOBRIST.side_to_move), "Side to move key collision");
    for i in 0..4 {
        assert!(seen.insert(ZOBRIST.castling[i]), "Castling key collision");
    }
    for i in 0..8 {
        assert!(seen.insert(ZOBRIST.en_passant[i]), "En passant key collision");
    }
}

#[test]
fn test_material_key_depends_on_counts_only() {
    let mut counts = [[0u8; 6]; 2];
    counts[Color::White.idx()][PieceKind::King.idx()] = 1;
    counts[Color::Black.idx()][PieceKind::King.idx()] = 1;
    let bare = material_key(&counts);

    counts[Color::White.idx()][PieceKind::Bishop.idx()] = 1;
    let white_bishop = material_key(&counts);
    assert_ne!(bare, white_bishop);

    // Same count on the other side is a different balance
    let mut mirrored = [[0u8; 6]; 2];
    mirrored[0][PieceKind::King.idx()] = 1;
    mirrored[1][PieceKind::King.idx()] = 1;
    mirrored[1][PieceKind::Bishop.idx()] = 1;
    assert_ne!(material_key(&mirrored), white_bishop);
}

#[test]
fn test_material_part_clamps_ordinal() {
    let last = ZOBRIST.material_part(Color::White, PieceKind::Pawn, (MAX_MATERIAL_ORDINAL - 1) as u32);
    assert_eq!(ZOBRIST.material_part(Color::White, PieceKind::Pawn, 40), last);
}
