//! Evaluation parameter profile.
//!
//! Every weight the evaluation uses lives in [`EvalParams`]. The defaults are
//! the hand-tuned values; alternative profiles can be loaded from TOML or
//! JSON. Fields missing from a profile keep their default, unknown fields are
//! rejected so a typo never silently falls back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use chess_core::PieceKind;

use crate::score::Score;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("failed to read parameter profile {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML profile: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to write TOML profile: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("invalid JSON profile: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported profile extension for {0} (expected .toml or .json)")]
    UnknownFormat(PathBuf),
    #[error("invalid parameters: {0}")]
    Invalid(String),
}

/// Extra credit for a minor piece on an enemy weak square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutpostBonus {
    pub outpost: Score,
    /// Added when an own pawn defends the square.
    pub supported: Score,
    /// Added when enemy pawns can never reach the square either.
    pub hole: Score,
}

/// Weight a piece adds to the attack on the enemy king ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KingAttackWeights {
    pub queen: i32,
    pub rook: i32,
    pub bishop: i32,
    pub knight: i32,
}

impl KingAttackWeights {
    pub fn weight(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Queen => self.queen,
            PieceKind::Rook => self.rook,
            PieceKind::Bishop => self.bishop,
            PieceKind::Knight => self.knight,
            PieceKind::Pawn | PieceKind::King => 0,
        }
    }
}

/// Largest accepted per-piece king attack weight.
pub const MAX_KING_ATTACK_WEIGHT: i32 = 100;

/// Largest accepted attack-unit ceiling; its square must stay well inside `i32`.
pub const MAX_ATTACK_UNITS_LIMIT: i32 = 10_000;

/// Bonus by number of safely attacked squares, one curve per piece kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MobilityCurves {
    pub queen: Vec<Score>,
    pub rook: Vec<Score>,
    pub bishop: Vec<Score>,
    pub knight: Vec<Score>,
}

impl MobilityCurves {
    pub fn curve(&self, kind: PieceKind) -> &[Score] {
        match kind {
            PieceKind::Queen => &self.queen,
            PieceKind::Rook => &self.rook,
            PieceKind::Bishop => &self.bishop,
            PieceKind::Knight => &self.knight,
            PieceKind::Pawn | PieceKind::King => &[],
        }
    }

    /// Curve value for `count` squares; counts past the end use the last entry.
    #[inline]
    pub fn bonus(&self, kind: PieceKind, count: u32) -> Score {
        let curve = self.curve(kind);
        match curve.len() {
            0 => Score::ZERO,
            len => curve[(count as usize).min(len - 1)],
        }
    }
}

const fn s(mg: i32, eg: i32) -> Score {
    Score::new(mg, eg)
}

#[rustfmt::skip]
const QUEEN_MOBILITY: [Score; 32] = [
    s(-1352, -2686), s(-901, -1747), s(-563, -939), s(-225, -134), s(112, 670), s(450, 1475),
    s(788, 2284), s(1127, 3089), s(1468, 3894), s(1806, 4568), s(2031, 5104), s(2257, 5373),
    s(2482, 5507), s(2595, 5507), s(2707, 5507), s(2820, 5507), s(2820, 5507), s(2820, 5507),
    s(2820, 5507), s(2820, 5507), s(2820, 5507), s(2820, 5507), s(2820, 5507), s(2820, 5507),
    s(2820, 5507), s(2820, 5507), s(2820, 5507), s(2820, 5507), s(2820, 5507), s(2820, 5507),
    s(2820, 5507), s(2820, 5507),
];

#[rustfmt::skip]
const ROOK_MOBILITY: [Score; 16] = [
    s(-1918, -2217), s(-1239, -1075), s(-563, 0), s(112, 1075), s(788, 2150), s(1465, 3225),
    s(2031, 4300), s(2482, 5375), s(2933, 6450), s(3271, 7322), s(3496, 7726), s(3725, 7994),
    s(3835, 8195), s(4063, 8329), s(4176, 8329), s(4288, 8329),
];

#[rustfmt::skip]
const BISHOP_MOBILITY: [Score; 16] = [
    s(-2483, -3628), s(-903, -1746), s(677, 134), s(2257, 2015), s(3838, 3896), s(5418, 5778),
    s(6773, 7390), s(7676, 8465), s(8353, 9137), s(8692, 9675), s(9031, 10078), s(9257, 10346),
    s(9482, 10615), s(9708, 10884), s(9821, 11018), s(9821, 11018),
];

#[rustfmt::skip]
const KNIGHT_MOBILITY: [Score; 9] = [
    s(-3951, -300), s(-2843, -200), s(-1016, -100), s(338, 0), s(1693, 100), s(3048, 200),
    s(4176, 280), s(4741, 310), s(4967, 330),
];

impl Default for MobilityCurves {
    fn default() -> Self {
        Self {
            queen: QUEEN_MOBILITY.to_vec(),
            rook: ROOK_MOBILITY.to_vec(),
            bishop: BISHOP_MOBILITY.to_vec(),
            knight: KNIGHT_MOBILITY.to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalParams {
    pub isolated_pawn_penalty: Score,
    pub doubled_pawn_penalty: Score,
    pub backward_pawn_penalty: Score,
    pub chained_pawn_bonus: Score,
    /// Scaled by `r*(r-1)` (mg) and `r*(r-1)+r+1` (eg).
    pub passed_pawn_bonus: Score,
    pub passed_pawn_file_ah_penalty: Score,
    pub passed_pawn_supported_bonus: Score,
    pub candidate_bonus: Score,

    pub rook_on_7th: Score,
    pub rook_on_pawns: Score,
    pub queen_on_7th: Score,
    pub queen_on_pawns: Score,
    pub rook_on_open_file: Score,
    pub rook_on_semi_open_file: Score,
    pub knight_outpost: OutpostBonus,
    pub bishop_outpost: OutpostBonus,

    pub tempo: Score,
    pub bishop_pair: Score,
    /// Per safe square on or ahead of the colour's pawns.
    pub space: Score,

    pub king_shield_bonus: Score,
    pub king_far_shield_bonus: Score,
    pub king_attack_weights: KingAttackWeights,
    pub king_attack_weight_cap: i32,
    pub max_attack_units: i32,

    pub mobility: MobilityCurves,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            isolated_pawn_penalty: s(1000, 1100),
            doubled_pawn_penalty: s(500, 500),
            backward_pawn_penalty: s(600, 600),
            chained_pawn_bonus: s(1200, 1100),
            passed_pawn_bonus: s(600, 1100),
            passed_pawn_file_ah_penalty: s(0, 2000),
            passed_pawn_supported_bonus: s(0, 1000),
            candidate_bonus: s(1000, 100),

            rook_on_7th: s(5700, 3600),
            rook_on_pawns: s(1000, 3000),
            queen_on_7th: s(200, 1600),
            queen_on_pawns: s(500, 1000),
            rook_on_open_file: s(2000, 500),
            rook_on_semi_open_file: s(1000, 500),
            knight_outpost: OutpostBonus {
                outpost: s(100, 120),
                supported: s(210, 190),
                hole: s(310, 390),
            },
            bishop_outpost: OutpostBonus {
                outpost: s(80, 110),
                supported: s(1900, 170),
                hole: s(290, 370),
            },

            tempo: s(1540, 421),
            bishop_pair: s(5000, 5000),
            space: s(100, 0),

            king_shield_bonus: s(1600, 800),
            king_far_shield_bonus: s(1000, 400),
            king_attack_weights: KingAttackWeights {
                queen: 5,
                rook: 3,
                bishop: 2,
                knight: 2,
            },
            king_attack_weight_cap: 25,
            max_attack_units: 99,

            mobility: MobilityCurves::default(),
        }
    }
}

impl EvalParams {
    pub fn from_toml_str(s: &str) -> Result<Self, ParamsError> {
        let params: EvalParams = toml::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ParamsError> {
        let params: EvalParams = serde_json::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    /// Load a profile, choosing the format by file extension.
    pub fn load(path: &Path) -> Result<Self, ParamsError> {
        let contents = fs::read_to_string(path).map_err(|source| ParamsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let params = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            _ => return Err(ParamsError::UnknownFormat(path.to_path_buf())),
        };
        debug!(path = %path.display(), "loaded evaluation parameters");
        Ok(params)
    }

    pub fn to_toml_string(&self) -> Result<String, ParamsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Mobility curves must be non-empty and never decrease in either lane.
    pub fn validate(&self) -> Result<(), ParamsError> {
        for kind in [
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
        ] {
            let curve = self.mobility.curve(kind);
            if curve.is_empty() {
                return Err(ParamsError::Invalid(format!("{kind:?} mobility curve is empty")));
            }
            if let Some(i) = curve
                .windows(2)
                .position(|w| w[1].mg < w[0].mg || w[1].eg < w[0].eg)
            {
                return Err(ParamsError::Invalid(format!(
                    "{kind:?} mobility curve decreases at index {}",
                    i + 1
                )));
            }
        }
        if !(0..=MAX_ATTACK_UNITS_LIMIT).contains(&self.max_attack_units) {
            return Err(ParamsError::Invalid(format!(
                "max_attack_units {} outside 0..={MAX_ATTACK_UNITS_LIMIT}",
                self.max_attack_units
            )));
        }
        let w = &self.king_attack_weights;
        for (name, weight) in [
            ("queen", w.queen),
            ("rook", w.rook),
            ("bishop", w.bishop),
            ("knight", w.knight),
        ] {
            if !(0..=MAX_KING_ATTACK_WEIGHT).contains(&weight) {
                return Err(ParamsError::Invalid(format!(
                    "{name} king attack weight {weight} outside 0..={MAX_KING_ATTACK_WEIGHT}"
                )));
            }
        }
        if self.king_attack_weight_cap < 0 {
            return Err(ParamsError::Invalid("king_attack_weight_cap is negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod params_tests;
