//! Game status - score, cleared rows and level
//!
//! Score and level are pure functions of the sequence of clear counts fed to
//! [`GameStatus::record_clear`]; replaying the same sequence gives the same
//! totals.

use crate::rules::Rules;

/// Running totals for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameStatus {
    pub score: u32,
    pub rows_cleared: u32,
    pub level: u32,
}

/// Outcome of recording one settle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearOutcome {
    pub points: u32,
    pub level_changed: bool,
}

impl GameStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for a settle that removed `rows` rows.
    ///
    /// Points use the level in effect before the clear; the level is then
    /// recomputed from the cumulative row count.
    pub fn record_clear(&mut self, rows: u32, rules: &Rules) -> ClearOutcome {
        let points = calculate_line_score(rows, self.level, &rules.score_table);
        self.score = self.score.saturating_add(points);
        self.rows_cleared = self.rows_cleared.saturating_add(rows);

        let level = calculate_level(self.rows_cleared, rules.rows_per_level);
        let level_changed = level != self.level;
        self.level = level;

        ClearOutcome {
            points,
            level_changed,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Points for clearing `rows` rows at once at `level` (0-based).
///
/// Counts beyond the table use its last entry.
pub fn calculate_line_score(rows: u32, level: u32, table: &[u32; 5]) -> u32 {
    let base = table[(rows as usize).min(table.len() - 1)];
    base.saturating_mul(level.saturating_add(1))
}

/// Level for a cumulative row count
pub fn calculate_level(total_rows: u32, rows_per_level: u32) -> u32 {
    total_rows / rows_per_level.max(1)
}

/// Fall interval for a level (in milliseconds)
///
/// `max(min_drop_ms, base_drop_ms / (level + 1))`
pub fn drop_interval_ms(level: u32, rules: &Rules) -> u32 {
    (rules.base_drop_ms / level.saturating_add(1)).max(rules.min_drop_ms)
}
