//! Scoring module - reward table, level curve, gravity cadence
//!
//! All pure functions. A clear awards `LINE_SCORES[cleared] * level`; the
//! level is `lines / 10 + 1`; the gravity interval shrinks 100ms per level
//! down to a 100ms floor. The engine never arms timers itself - the caller
//! re-reads [`speed_ms`] after every level change and re-arms its own
//! scheduler.

use blockfall_types::{
    BASE_TICK_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_TICK_MS, TICK_STEP_MS,
};

/// Points for clearing `cleared` rows at once at the given level. A single
/// piece completes at most 4 rows, so the table index is clamped there.
pub fn line_clear_points(cleared: usize, level: u32) -> u32 {
    LINE_SCORES[cleared.min(4)] * level
}

/// Level for a total line count: starts at 1, +1 every 10 lines.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in milliseconds for a level.
pub fn speed_ms(level: u32) -> u32 {
    BASE_TICK_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(TICK_STEP_MS))
        .max(MIN_TICK_MS)
}
