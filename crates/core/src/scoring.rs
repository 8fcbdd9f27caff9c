//! Scoring module - classic line clear scoring, leveling and gravity speed
//!
//! Points are awarded per batch of adjacent cleared rows using the NES table,
//! multiplied by (level + 1). Leveling counts individual rows: every
//! `rows_per_level`-th cleared row raises the level by one.

use crate::config::EngineConfig;
use crate::types::LINE_SCORES;

/// Calculate the score of one batch of adjacent cleared rows
/// rows: batch size (1-4; anything else scores nothing)
/// level: current level (0-based)
pub fn line_clear_score(rows: usize, level: u32) -> u64 {
    if rows == 0 || rows >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[rows] * (u64::from(level) + 1)
}

/// Gravity interval for a level (in milliseconds)
///
/// `max(base - level * speedup, floor)`, where base is the soft drop interval
/// while soft dropping. Never underflows.
pub fn gravity_interval_ms(level: u32, soft_drop: bool, config: &EngineConfig) -> u32 {
    let base = if soft_drop {
        config.soft_drop_move_ms
    } else {
        config.base_move_ms
    };
    base.saturating_sub(level.saturating_mul(config.level_speedup_ms))
        .max(config.min_move_ms)
}

/// Outcome of scoring one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    pub points: u64,
    pub levels_gained: u32,
}

/// Score, level and cleared-row counter of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    score: u64,
    level: u32,
    rows: u32,
}

impl Progress {
    pub fn new(start_level: u32) -> Self {
        Self {
            score: 0,
            level: start_level,
            rows: 0,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Rows cleared so far
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Count the rows of a batch, then score it.
    ///
    /// Rows are counted one at a time, so a batch that crosses a level
    /// boundary is scored at the level reached while removing it.
    pub fn record_batch(&mut self, size: u8, rows_per_level: u32) -> BatchOutcome {
        let mut levels_gained = 0;
        for _ in 0..size {
            self.rows += 1;
            if rows_per_level > 0 && self.rows % rows_per_level == 0 {
                self.level += 1;
                levels_gained += 1;
            }
        }

        let points = line_clear_score(size as usize, self.level);
        self.score = self.score.saturating_add(points);

        BatchOutcome {
            points,
            levels_gained,
        }
    }
}
