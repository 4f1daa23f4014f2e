//! Scoring module - points and move counting
//!
//! Every resolved turn (two cards compared) is one move:
//! - match: +10
//! - mismatch: -1
//!
//! The score can go negative.

use serde::{Deserialize, Serialize};

use crate::types::{MATCH_POINTS, MISMATCH_PENALTY};

/// Running totals for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub score: i32,
    pub moves: u32,
    pub matches: u32,
    pub mismatches: u32,
}

impl ScoreBoard {
    pub fn record_match(&mut self) {
        self.moves += 1;
        self.matches += 1;
        self.score += MATCH_POINTS;
    }

    pub fn record_mismatch(&mut self) {
        self.moves += 1;
        self.mismatches += 1;
        self.score -= MISMATCH_PENALTY;
    }

    /// Share of moves that found a pair, as a whole percentage.
    pub fn accuracy_pct(&self) -> u8 {
        if self.moves == 0 {
            return 0;
        }
        ((self.matches as u64 * 100) / self.moves as u64) as u8
    }
}
