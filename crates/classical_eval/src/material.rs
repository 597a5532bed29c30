//! Material signature table: known results for recognised low-material
//! balances, keyed by the position's material key.

use std::collections::HashMap;

use tracing::debug;

use chess_core::{
    Color, PieceKind, Position, file_of, is_light_square, material_key, relative_rank,
    relative_square,
};
use chess_core::PieceKind::{Bishop as B, Knight as N, Pawn as P};

/// Specialised endgame verdict. `None` declines and normal evaluation runs.
pub type EndgameFn = fn(&Position) -> Option<i32>;

#[derive(Clone, Copy, Debug)]
pub enum MaterialEntry {
    /// Final score, White's point of view.
    Exact(i32),
    Override(EndgameFn),
}

impl MaterialEntry {
    /// The verdict for `pos`, if this entry settles it.
    #[inline]
    pub fn resolve(&self, pos: &Position) -> Option<i32> {
        match self {
            MaterialEntry::Exact(v) => Some(*v),
            MaterialEntry::Override(f) => f(pos),
        }
    }
}

/// Read-only after construction; safe to share between workers.
#[derive(Clone, Debug)]
pub struct MaterialTable {
    entries: HashMap<u64, MaterialEntry>,
}

/// Balances that cannot be won by force: (stronger side, weaker side),
/// kings implied.
const DRAWN: &[(&[PieceKind], &[PieceKind])] = &[
    (&[], &[]),
    (&[B], &[]),
    (&[N], &[]),
    (&[N], &[B]),
    (&[N], &[N]),
    (&[B], &[B]),
    (&[B, B], &[N]),
    (&[B, B], &[B]),
    (&[B, N], &[N]),
    (&[B, N], &[B]),
    (&[N, N], &[N]),
    (&[N, N], &[B]),
];

fn counts(white: &[PieceKind], black: &[PieceKind]) -> [[u8; 6]; 2] {
    let mut c = [[0u8; 6]; 2];
    c[Color::White.idx()][PieceKind::King.idx()] = 1;
    c[Color::Black.idx()][PieceKind::King.idx()] = 1;
    for k in white {
        c[Color::White.idx()][k.idx()] += 1;
    }
    for k in black {
        c[Color::Black.idx()][k.idx()] += 1;
    }
    c
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialTable {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for &(strong, weak) in DRAWN {
            entries.insert(material_key(&counts(strong, weak)), MaterialEntry::Exact(0));
            entries.insert(material_key(&counts(weak, strong)), MaterialEntry::Exact(0));
        }
        entries.insert(material_key(&counts(&[B, P], &[])), MaterialEntry::Override(kbp_vs_k));
        entries.insert(material_key(&counts(&[], &[B, P])), MaterialEntry::Override(kbp_vs_k));

        debug!(entries = entries.len(), "material table built");
        Self { entries }
    }

    #[inline]
    pub fn lookup(&self, key: u64) -> Option<&MaterialEntry> {
        self.entries.get(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// King, bishop and rook pawn against a lone king: a draw when the bishop
/// does not control the promotion corner and the defending king is already
/// near it.
pub fn kbp_vs_k(pos: &Position) -> Option<i32> {
    let strong = if pos.pieces(Color::White, PieceKind::Pawn).is_not_empty() {
        Color::White
    } else {
        Color::Black
    };
    let pawn = pos.pieces(strong, PieceKind::Pawn).lsb()?;
    let bishop = pos.pieces(strong, PieceKind::Bishop).lsb()?;
    let defender = pos.king_square(strong.other())?;

    let file = file_of(pawn);
    if file != 0 && file != 7 {
        return None;
    }
    let promotion = relative_square(strong, 56 + file as u8);
    if is_light_square(bishop) == is_light_square(promotion) {
        return None;
    }
    if relative_rank(strong, defender) >= 5 && (file_of(defender) - file).abs() <= 1 {
        Some(0)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod material_tests;
