//! Board state with incrementally maintained hash keys, material and phase.
//!
//! Every change to piece placement goes through [`Position::put_piece`] and
//! [`Position::remove_piece`], which keep the mailbox, the bitboards, the
//! three zobrist keys, the material score and the non-pawn material in step.

use crate::attacks::*;
use crate::bitboard::Bitboard;
use crate::error::FenError;
use crate::psqt::{phase_from_material, phase_value, psq_value};
use crate::types::*;
use crate::zobrist::ZOBRIST;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    fn hash(&self) -> u64 {
        let mut h = 0;
        for (i, set) in [self.wk, self.wq, self.bk, self.bq].into_iter().enumerate() {
            if set {
                h ^= ZOBRIST.castling_key(i);
            }
        }
        h
    }

    /// Drop rights tied to a king or rook home square.
    fn touch(&mut self, sq: u8) {
        match sq {
            0 => self.wq = false,
            7 => self.wk = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            56 => self.bq = false,
            63 => self.bk = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            _ => {}
        }
    }

    fn mirrored(&self) -> Self {
        Self {
            wk: self.bk,
            wq: self.bq,
            bk: self.wk,
            bq: self.wq,
        }
    }
}

/// Piece sets per colour and kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardBitboards {
    pieces: [[Bitboard; 6]; 2],
    colors: [Bitboard; 2],
}

impl BoardBitboards {
    #[inline(always)]
    pub fn pieces(&self, c: Color, kind: PieceKind) -> Bitboard {
        self.pieces[c.idx()][kind.idx()]
    }

    #[inline(always)]
    pub fn color(&self, c: Color) -> Bitboard {
        self.colors[c.idx()]
    }

    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.colors[0] | self.colors[1]
    }

    #[inline(always)]
    fn toggle(&mut self, piece: Piece, sq: u8) {
        let bb = Bitboard::from_square(sq);
        self.pieces[piece.color.idx()][piece.kind.idx()] ^= bb;
        self.colors[piece.color.idx()] ^= bb;
    }
}

#[derive(Clone, Debug)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub bitboards: BoardBitboards,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    /// Full zobrist hash.
    pub hash: u64,
    /// Zobrist hash of pawn placement only.
    pub pawn_key: u64,
    /// Zobrist hash of piece counts only.
    pub material_key: u64,
    /// Material plus piece-square value as (mg, eg), White minus Black.
    pub material: [i32; 2],
    /// Mg value of knights, bishops, rooks and queens per colour.
    pub non_pawn_material: [i32; 2],
}

#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
    pub hash: u64,
}

impl Position {
    /// An empty board, White to move, no rights.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            bitboards: BoardBitboards::default(),
            side_to_move: Color::White,
            castling: CastlingRights::default(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            pawn_key: 0,
            material_key: 0,
            material: [0, 0],
            non_pawn_material: [0, 0],
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            let f = f as u8;
            p.put_piece(f, Piece::new(Color::White, kind));
            p.put_piece(56 + f, Piece::new(Color::Black, kind));
            p.put_piece(8 + f, Piece::new(Color::White, PieceKind::Pawn));
            p.put_piece(48 + f, Piece::new(Color::Black, PieceKind::Pawn));
        }
        p.set_castling(CastlingRights::all());
        p
    }

    /// Parse Forsyth-Edwards Notation. The move counters are optional.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let mut p = Position::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount(ranks.len()));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let kind = PieceKind::from_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let square = sq(file, rank).ok_or(FenError::BadRankLength { rank: rank_idx })?;
                    if kind == PieceKind::Pawn && (rank == 0 || rank == 7) {
                        return Err(FenError::PawnOnBackRank(square));
                    }
                    p.put_piece(square, Piece::new(color, kind));
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::BadRankLength { rank: rank_idx });
                }
            }
            if file != 8 {
                return Err(FenError::BadRankLength { rank: rank_idx });
            }
        }

        for color in Color::BOTH {
            let kings = p.bitboards.pieces(color, PieceKind::King).popcount();
            if kings != 1 {
                return Err(FenError::KingCount { color, count: kings });
            }
            let count = p.bitboards.color(color).popcount();
            if count > 16 {
                return Err(FenError::TooManyPieces { color, count });
            }
        }

        match parts[1] {
            "w" => {}
            "b" => p.set_side_to_move(Color::Black),
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        }

        let mut castling = CastlingRights::default();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::InvalidCastling(c)),
                }
            }
        }
        p.set_castling(castling);

        if parts[3] != "-" {
            let ep = coord_to_sq(parts[3])
                .ok_or_else(|| FenError::InvalidEnPassant(parts[3].to_string()))?;
            p.set_en_passant(Some(ep));
        }

        let counter = |s: Option<&&str>, default: u32| -> Result<u32, FenError> {
            match s {
                Some(s) => s.parse().map_err(|_| FenError::InvalidCounter(s.to_string())),
                None => Ok(default),
            }
        };
        p.halfmove_clock = counter(parts.get(4), 0)?;
        p.fullmove_number = counter(parts.get(5), 1)?;

        Ok(p)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.board[rank * 8 + file] {
                    Some(pc) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push_str(match self.side_to_move {
            Color::White => " w ",
            Color::Black => " b ",
        });

        let c = &self.castling;
        let mut rights = String::new();
        for (set, ch) in [(c.wk, 'K'), (c.wq, 'Q'), (c.bk, 'k'), (c.bq, 'q')] {
            if set {
                rights.push(ch);
            }
        }
        if rights.is_empty() {
            rights.push('-');
        }
        fen.push_str(&rights);

        match self.en_passant {
            Some(ep) => fen.push_str(&format!(" {}", sq_to_coord(ep))),
            None => fen.push_str(" -"),
        }
        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    /// Colour-flipped copy: every piece changes colour and moves to the
    /// vertically mirrored square, and the other side is to move.
    pub fn mirrored(&self) -> Position {
        let mut p = Position::empty();
        for s in self.bitboards.occupied() {
            if let Some(pc) = self.board[s as usize] {
                p.put_piece(s ^ 56, Piece::new(pc.color.other(), pc.kind));
            }
        }
        p.set_side_to_move(self.side_to_move.other());
        p.set_castling(self.castling.mirrored());
        p.set_en_passant(self.en_passant.map(|ep| ep ^ 56));
        p.halfmove_clock = self.halfmove_clock;
        p.fullmove_number = self.fullmove_number;
        p
    }

    /// Copy rebuilt from piece placement alone, with every incremental field
    /// computed from scratch.
    pub fn rebuilt(&self) -> Position {
        let mut p = Position::empty();
        for s in self.bitboards.occupied() {
            if let Some(pc) = self.board[s as usize] {
                p.put_piece(s, pc);
            }
        }
        p.set_side_to_move(self.side_to_move);
        p.set_castling(self.castling.clone());
        p.set_en_passant(self.en_passant);
        p.halfmove_clock = self.halfmove_clock;
        p.fullmove_number = self.fullmove_number;
        p
    }

    fn set_side_to_move(&mut self, c: Color) {
        if self.side_to_move != c {
            self.hash ^= ZOBRIST.side_to_move;
            self.side_to_move = c;
        }
    }

    fn set_castling(&mut self, rights: CastlingRights) {
        self.hash ^= self.castling.hash() ^ rights.hash();
        self.castling = rights;
    }

    fn set_en_passant(&mut self, ep: Option<u8>) {
        if let Some(old) = self.en_passant {
            self.hash ^= ZOBRIST.ep_key(old % 8);
        }
        if let Some(new) = ep {
            self.hash ^= ZOBRIST.ep_key(new % 8);
        }
        self.en_passant = ep;
    }

    /// Place `piece` on the empty square `sq`.
    pub fn put_piece(&mut self, sq: u8, piece: Piece) {
        debug_assert!(self.board[sq as usize].is_none(), "put_piece on occupied square");
        let ordinal = self.bitboards.pieces(piece.color, piece.kind).popcount();
        self.board[sq as usize] = Some(piece);
        self.bitboards.toggle(piece, sq);
        self.update_keys(piece, sq, ordinal);

        let [mg, eg] = psq_value(piece, sq);
        let sign = if piece.color == Color::White { 1 } else { -1 };
        self.material[0] += sign * mg;
        self.material[1] += sign * eg;
        self.non_pawn_material[piece.color.idx()] += phase_value(piece.kind);
    }

    /// Lift whatever stands on `sq`.
    pub fn remove_piece(&mut self, sq: u8) -> Option<Piece> {
        let piece = self.board[sq as usize].take()?;
        self.bitboards.toggle(piece, sq);
        let ordinal = self.bitboards.pieces(piece.color, piece.kind).popcount();
        self.update_keys(piece, sq, ordinal);

        let [mg, eg] = psq_value(piece, sq);
        let sign = if piece.color == Color::White { 1 } else { -1 };
        self.material[0] -= sign * mg;
        self.material[1] -= sign * eg;
        self.non_pawn_material[piece.color.idx()] -= phase_value(piece.kind);
        Some(piece)
    }

    #[inline(always)]
    fn update_keys(&mut self, piece: Piece, sq: u8, ordinal: u32) {
        let key = ZOBRIST.piece_key(piece, sq);
        self.hash ^= key;
        if piece.kind == PieceKind::Pawn {
            self.pawn_key ^= key;
        }
        self.material_key ^= ZOBRIST.material_part(piece.color, piece.kind, ordinal);
    }

    pub fn king_square(&self, c: Color) -> Option<u8> {
        self.bitboards.pieces(c, PieceKind::King).lsb()
    }

    #[inline(always)]
    pub fn pieces(&self, c: Color, kind: PieceKind) -> Bitboard {
        self.bitboards.pieces(c, kind)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    /// 0 (full middlegame weighting) ..= `GAME_PHASE_MAX` (full endgame).
    pub fn game_phase(&self) -> i32 {
        phase_from_material(self.non_pawn_material[0] + self.non_pawn_material[1])
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_square(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let bb = &self.bitboards;
        let occ = bb.occupied();
        let queens = bb.pieces(by, PieceKind::Queen);

        (pawn_attacks(target, by.other()) & bb.pieces(by, PieceKind::Pawn)).is_not_empty()
            || (knight_attacks(target) & bb.pieces(by, PieceKind::Knight)).is_not_empty()
            || (king_attacks(target) & bb.pieces(by, PieceKind::King)).is_not_empty()
            || (bishop_attacks(target, occ) & (bb.pieces(by, PieceKind::Bishop) | queens))
                .is_not_empty()
            || (rook_attacks(target, occ) & (bb.pieces(by, PieceKind::Rook) | queens))
                .is_not_empty()
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from).expect("no piece on from-square");
        let prev_castling = self.castling.clone();
        let prev_ep = self.en_passant;
        let prev_hmc = self.halfmove_clock;
        let prev_fmn = self.fullmove_number;
        let prev_hash = self.hash;

        self.set_en_passant(None);

        let mut captured = None;
        let mut ep_captured_sq = None;
        if mv.is_en_passant {
            if let Some(cs) = sq(file_of(to), rank_of(from)) {
                captured = self.remove_piece(cs);
                ep_captured_sq = Some(cs);
            }
        } else {
            captured = self.remove_piece(to);
        }

        self.remove_piece(from);
        let promo_rank = match moved.color {
            Color::White => 7,
            Color::Black => 0,
        };
        let placed = if moved.kind == PieceKind::Pawn && rank_of(to) == promo_rank {
            Piece::new(moved.color, mv.promo.unwrap_or(PieceKind::Queen))
        } else {
            moved
        };
        self.put_piece(to, placed);

        // Castling rook move
        let mut rook_move = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            let rook_squares = match (from, to) {
                (4, 6) => Some((7, 5)),
                (4, 2) => Some((0, 3)),
                (60, 62) => Some((63, 61)),
                (60, 58) => Some((56, 59)),
                _ => None,
            };
            if let Some((rf, rt)) = rook_squares
                && let Some(rook) = self.remove_piece(rf)
            {
                self.put_piece(rt, rook);
                rook_move = Some((rf, rt));
            }
        }

        let mut rights = self.castling.clone();
        rights.touch(from);
        rights.touch(to);
        self.set_castling(rights);

        // Double pawn push sets en-passant square
        if moved.kind == PieceKind::Pawn && (rank_of(to) - rank_of(from)).abs() == 2 {
            self.set_en_passant(sq(file_of(from), (rank_of(from) + rank_of(to)) / 2));
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.set_side_to_move(self.side_to_move.other());

        Undo {
            captured,
            castling: prev_castling,
            en_passant: prev_ep,
            halfmove_clock: prev_hmc,
            fullmove_number: prev_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
            hash: prev_hash,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move
            && let Some(rook) = self.remove_piece(rt)
        {
            self.put_piece(rf, rook);
        }

        self.remove_piece(mv.to);
        self.put_piece(mv.from, undo.moved_piece);

        if let Some(captured) = undo.captured {
            let cs = undo.ep_captured_sq.unwrap_or(mv.to);
            self.put_piece(cs, captured);
        }

        // Piece moves above already restored everything except the
        // side/castling/ep parts of the hash.
        self.hash = undo.hash;
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
