use super::cut::score_for_note;
use super::multiplier::MultiplierState;
use super::notes::{NoteParams, ScoringType};
use crate::replay::{NoteEvent, Replay, WallEvent};
use std::cmp::Ordering;
use tracing::debug;

/// Raw score recorded for running into a wall.
pub const WALL_SCORE: i32 = -5;

/// A note event paired with its decoded id and signed raw score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredNote<'a> {
    pub event: &'a NoteEvent,
    pub params: NoteParams,
    pub score: i32,
}

pub fn score_notes(notes: &[NoteEvent]) -> Vec<ScoredNote<'_>> {
    notes
        .iter()
        .map(|event| {
            let params = NoteParams::from_note_id(event.note_id);
            ScoredNote {
                event,
                params,
                score: score_for_note(event, params.scoring_type),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEntry {
    pub time: f32,
    /// Coloured notes count towards accuracy; bombs and walls do not.
    pub is_block: bool,
    pub raw_score: i32,
    pub scoring_type: ScoringType,
    pub multiplier: i32,
    pub cumulative_score: i32,
    pub combo: i32,
    pub running_accuracy: f32,
}

impl TimelineEntry {
    fn pending(time: f32, is_block: bool, raw_score: i32, scoring_type: ScoringType) -> Self {
        Self {
            time,
            is_block,
            raw_score,
            scoring_type,
            multiplier: 1,
            cumulative_score: 0,
            combo: 0,
            running_accuracy: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Simulation {
    pub entries: Vec<TimelineEntry>,
    pub max_combo: i32,
    pub final_score: i32,
    pub max_score: i32,
}

/// Event time ordering: NaN sorts first, `-0.0` ties with `0.0`.
fn event_order(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

pub fn simulate_replay(replay: &Replay) -> Simulation {
    simulate(&score_notes(&replay.notes), &replay.walls)
}

/// Replays notes and walls in time order through both multiplier tracks.
pub fn simulate(notes: &[ScoredNote<'_>], walls: &[WallEvent]) -> Simulation {
    let mut entries: Vec<TimelineEntry> = Vec::with_capacity(notes.len() + walls.len());

    for n in notes {
        entries.push(TimelineEntry::pending(
            n.event.event_time,
            n.params.is_block(),
            n.score,
            n.params.scoring_type,
        ));
    }
    for w in walls {
        entries.push(TimelineEntry::pending(
            w.time,
            false,
            WALL_SCORE,
            ScoringType::Default,
        ));
    }

    // Stable: equal timestamps keep notes ahead of walls.
    entries.sort_by(|a, b| event_order(a.time, b.time));

    let mut max_track = MultiplierState::new();
    let mut actual_track = MultiplierState::new();
    let mut score = 0;
    let mut max_score = 0;
    let mut combo = 0;
    let mut max_combo = 0;
    let mut previous_accuracy = 0.0f32;

    for entry in entries.iter_mut() {
        max_track = max_track.increase();
        max_score += max_track.multiplier * entry.scoring_type.max_note_score();

        if entry.raw_score < 0 {
            actual_track = actual_track.decrease();
            combo = 0;
        } else {
            actual_track = actual_track.increase();
            combo += 1;
            score += actual_track.multiplier * entry.raw_score;
        }
        max_combo = max_combo.max(combo);

        entry.multiplier = actual_track.multiplier;
        entry.cumulative_score = score;
        entry.combo = combo;
        entry.running_accuracy = if entry.is_block {
            score as f32 / max_score as f32
        } else {
            previous_accuracy
        };
        previous_accuracy = entry.running_accuracy;
    }

    debug!(
        "Simulated {} entries: score={}, max={}, max_combo={}",
        entries.len(),
        score,
        max_score,
        max_combo
    );

    Simulation {
        entries,
        max_combo,
        final_score: score,
        max_score,
    }
}
