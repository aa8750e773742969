//! Scoring module - line clear points
//!
//! Two policies exist side by side and a field picks one at construction:
//! - Flat: every cleared line is worth the same.
//! - Tiered: clearing several lines with one piece pays a growing bonus, capped at four.

use crate::types::{ScoringMode, FLAT_LINE_SCORE, TIERED_LINE_SCORES};

/// Points for clearing `lines` rows with a single lock
///
/// # Examples
///
/// ```
/// use tetris_pp_core::scoring::line_clear_score;
/// use tetris_pp_core::types::ScoringMode;
///
/// assert_eq!(line_clear_score(ScoringMode::Flat, 4), 400);
/// assert_eq!(line_clear_score(ScoringMode::Tiered, 4), 800);
/// ```
pub fn line_clear_score(mode: ScoringMode, lines: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    match mode {
        ScoringMode::Flat => FLAT_LINE_SCORE.saturating_mul(lines),
        ScoringMode::Tiered => {
            let tier = lines.min(TIERED_LINE_SCORES.len() as u32) as usize - 1;
            TIERED_LINE_SCORES[tier]
        }
    }
}
