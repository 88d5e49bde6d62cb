use super::accuracy::accuracy_tracker;
use super::graph::score_graph;
use super::timeline::{score_notes, simulate, ScoredNote};
use super::types::{AveragePosition, HitTracker, ScoreGraphTracker, ScoreStatistic, WinTracker};
use crate::replay::{NoteEventType, Replay, Vector3};
use rayon::prelude::*;
use tracing::info;

/// A fail time below this counts as a clear.
pub const FAIL_TIME_EPSILON: f64 = 0.01;

/// Single-precision mean accumulated in double precision.
fn mean_f32<I: Iterator<Item = f32>>(values: I) -> Option<f32> {
    let (sum, count) = values.fold((0.0f64, 0usize), |(s, c), v| (s + f64::from(v), c + 1));
    (count > 0).then(|| (sum / count as f64) as f32)
}

fn win_tracker(replay: &Replay) -> WinTracker {
    let first_note_time = replay.notes.first().map_or(0.0, |n| n.event_time);
    let last_note_time = replay.notes.last().map_or(0.0, |n| n.event_time);

    let nb_of_pause = replay
        .pauses
        .iter()
        .filter(|p| p.time >= first_note_time && p.time <= last_note_time)
        .count() as i32;

    let average_height =
        mean_f32(replay.heights.iter().map(|h| h.height)).unwrap_or(replay.info.height);

    let head = |axis: fn(&Vector3) -> f32| {
        mean_f32(replay.frames.iter().map(|f| axis(&f.head.position))).unwrap_or(0.0)
    };

    WinTracker {
        won: f64::from(replay.info.fail_time) < FAIL_TIME_EPSILON,
        end_time: replay.end_time(),
        nb_of_pause,
        jump_distance: replay.info.jump_distance,
        average_height,
        average_head_position: AveragePosition {
            x: head(|p| p.x),
            y: head(|p| p.y),
            z: head(|p| p.z),
        },
        total_score: 0,
    }
}

fn hit_tracker(notes: &[ScoredNote<'_>]) -> HitTracker {
    let mut hits = HitTracker::default();
    for n in notes {
        match n.event.event_type {
            NoteEventType::Bad => {
                if n.event.note_cut_info.saber_type == 0 {
                    hits.left_bad_cuts += 1;
                } else {
                    hits.right_bad_cuts += 1;
                }
            }
            NoteEventType::Miss => {
                if n.params.is_left() {
                    hits.left_miss += 1;
                } else {
                    hits.right_miss += 1;
                }
            }
            NoteEventType::Bomb => {
                if n.params.is_left() {
                    hits.left_bombs += 1;
                } else {
                    hits.right_bombs += 1;
                }
            }
            NoteEventType::Good | NoteEventType::Unknown => {}
        }
    }
    hits
}

/// Derives the full statistic of one play.
pub fn process_replay(replay: &Replay) -> ScoreStatistic {
    let notes = score_notes(&replay.notes);
    let simulation = simulate(&notes, &replay.walls);

    let mut win = win_tracker(replay);
    win.total_score = simulation.final_score;

    let mut hits = hit_tracker(&notes);
    hits.max_combo = simulation.max_combo;

    ScoreStatistic {
        win_tracker: win,
        hit_tracker: hits,
        accuracy_tracker: accuracy_tracker(&notes),
        score_graph_tracker: ScoreGraphTracker {
            graph: score_graph(&simulation.entries, replay.duration_secs()),
        },
    }
}

/// Processes independent plays on the rayon pool. Output order follows input.
pub fn process_replays(replays: &[Replay]) -> Vec<ScoreStatistic> {
    info!("Processing {} replays", replays.len());
    replays.par_iter().map(process_replay).collect()
}
