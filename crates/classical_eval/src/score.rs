//! Two-lane (middlegame, endgame) score.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use chess_core::GAME_PHASE_MAX;

/// A tapered value. Both lanes are accumulated independently and collapsed
/// once, at the end of an evaluation, by [`Score::interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Score {
    pub mg: i32,
    pub eg: i32,
}

impl Score {
    pub const ZERO: Score = Score { mg: 0, eg: 0 };

    pub const fn new(mg: i32, eg: i32) -> Self {
        Self { mg, eg }
    }

    /// Blend the lanes: phase 0 gives `mg`, `GAME_PHASE_MAX` gives `eg`.
    /// Rounds toward zero, so `s.interpolate(p) == -(-s).interpolate(p)`.
    #[inline]
    pub fn interpolate(self, phase: i32) -> i32 {
        let phase = phase.clamp(0, GAME_PHASE_MAX) as i64;
        let max = GAME_PHASE_MAX as i64;
        ((self.mg as i64 * (max - phase) + self.eg as i64 * phase) / max) as i32
    }
}

impl From<[i32; 2]> for Score {
    fn from([mg, eg]: [i32; 2]) -> Self {
        Score { mg, eg }
    }
}

impl From<Score> for [i32; 2] {
    fn from(s: Score) -> Self {
        [s.mg, s.eg]
    }
}

impl Add for Score {
    type Output = Score;
    #[inline(always)]
    fn add(self, rhs: Score) -> Score {
        Score::new(self.mg + rhs.mg, self.eg + rhs.eg)
    }
}

impl AddAssign for Score {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Score) {
        self.mg += rhs.mg;
        self.eg += rhs.eg;
    }
}

impl Sub for Score {
    type Output = Score;
    #[inline(always)]
    fn sub(self, rhs: Score) -> Score {
        Score::new(self.mg - rhs.mg, self.eg - rhs.eg)
    }
}

impl SubAssign for Score {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Score) {
        self.mg -= rhs.mg;
        self.eg -= rhs.eg;
    }
}

impl Neg for Score {
    type Output = Score;
    #[inline(always)]
    fn neg(self) -> Score {
        Score::new(-self.mg, -self.eg)
    }
}

impl Mul<i32> for Score {
    type Output = Score;
    #[inline(always)]
    fn mul(self, rhs: i32) -> Score {
        Score::new(self.mg * rhs, self.eg * rhs)
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;
