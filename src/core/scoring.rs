//! Scoring module - line-clear points, level curve, gravity period
//!
//! Score for a clear is the table value for the number of lines, multiplied
//! by the level in effect when the piece locks. Hard drops add a fixed bonus
//! per cell of drop distance. Level starts at 1 and rises every 10 lines.

use crate::types::{
    BASE_DROP_MS, DROP_STEP_MS, HARD_DROP_POINTS_PER_CELL, LINES_PER_LEVEL, LINE_SCORES,
    MIN_DROP_MS,
};

/// Score for clearing `lines` rows at `level` (0 when no lines cleared)
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines] * level
}

/// Hard drop bonus: fixed points per cell of vertical drop distance
pub fn hard_drop_bonus(distance: u32) -> u32 {
    distance * HARD_DROP_POINTS_PER_CELL
}

/// Level for a cumulative cleared-line total (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity period for a level, in milliseconds
pub fn drop_interval_ms(level: u32) -> u64 {
    let decrease = u64::from(level.saturating_sub(1)) * DROP_STEP_MS;
    BASE_DROP_MS.saturating_sub(decrease).max(MIN_DROP_MS)
}
