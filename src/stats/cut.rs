use super::notes::ScoringType;
use crate::replay::{NoteEvent, NoteEventType};

pub const MAX_BEFORE_CUT: i32 = 70;
pub const MAX_AFTER_CUT: i32 = 30;
pub const MAX_CENTER_DISTANCE: i32 = 15;

/// Burst elements award a flat center-distance score above the normal cap.
/// Kept for parity with the game client.
pub const BURST_ELEMENT_CENTER_DISTANCE: i32 = 20;

/// Distance from the note center at which the accuracy component hits zero.
const CENTER_DISTANCE_RANGE: f32 = 0.3;

pub const BAD_CUT_SCORE: i32 = -2;
pub const MISS_SCORE: i32 = -3;
pub const BOMB_SCORE: i32 = -4;
pub const UNKNOWN_EVENT_SCORE: i32 = -1;

/// The three raw components of a good cut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CutScores {
    pub before: i32,
    pub after: i32,
    pub center: i32,
}

impl CutScores {
    #[inline(always)]
    pub fn total(&self) -> i32 {
        self.before + self.after + self.center
    }
}

#[inline(always)]
pub fn clamp01(value: f32) -> f32 {
    if value < 0.0 {
        0.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

/// Scales a single-precision rating and rounds half-to-even in double
/// precision, the way the game client does.
#[inline(always)]
fn scaled_rating(scale: i32, rating: f32) -> i32 {
    let raw = f64::from(scale as f32 * rating).round_ties_even();
    raw.clamp(0.0, f64::from(scale)) as i32
}

pub fn cut_scores(note: &NoteEvent, scoring_type: ScoringType) -> CutScores {
    let cut = &note.note_cut_info;

    let before = match scoring_type {
        ScoringType::BurstSliderElement => 0,
        ScoringType::SliderTail => MAX_BEFORE_CUT,
        _ => scaled_rating(MAX_BEFORE_CUT, cut.before_cut_rating),
    };

    let after = match scoring_type {
        ScoringType::BurstSliderElement | ScoringType::BurstSliderHead => 0,
        ScoringType::SliderHead => MAX_AFTER_CUT,
        _ => scaled_rating(MAX_AFTER_CUT, cut.after_cut_rating),
    };

    let center = match scoring_type {
        ScoringType::BurstSliderElement => BURST_ELEMENT_CENTER_DISTANCE,
        _ => {
            let closeness = f64::from(1.0 - clamp01(cut.cut_distance_to_center / CENTER_DISTANCE_RANGE));
            (f64::from(MAX_CENTER_DISTANCE) * closeness).round_ties_even() as i32
        }
    };

    CutScores {
        before,
        after,
        center,
    }
}

/// Signed score of one note event before the multiplier is applied.
pub fn score_for_note(note: &NoteEvent, scoring_type: ScoringType) -> i32 {
    match note.event_type {
        NoteEventType::Good => cut_scores(note, scoring_type).total(),
        NoteEventType::Bad => BAD_CUT_SCORE,
        NoteEventType::Miss => MISS_SCORE,
        NoteEventType::Bomb => BOMB_SCORE,
        NoteEventType::Unknown => UNKNOWN_EVENT_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_ratings_round_to_even() {
        // 30 * 0.25 = 7.5 -> 8, 70 * 0.5 = 35 exactly
        assert_eq!(scaled_rating(30, 0.25), 8);
        assert_eq!(scaled_rating(70, 0.5), 35);
        // 30 * 0.15 rounds to exactly 4.5 in single precision
        assert_eq!(scaled_rating(30, 0.15), 4);
    }

    #[test]
    fn ratings_above_one_are_capped() {
        assert_eq!(scaled_rating(70, 1.4), 70);
        assert_eq!(scaled_rating(30, -0.2), 0);
    }
}
