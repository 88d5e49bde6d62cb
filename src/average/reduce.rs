use crate::error::{StatsError, StatsResult};
use crate::stats::{
    AccuracyTracker, AveragePosition, HitTracker, ScoreGraphTracker, ScoreStatistic, WinTracker,
};

/// Position-wise mean up to the longest input. Each position is divided by
/// the number of inputs that reach it.
pub fn average_list<'a, I>(lists: I) -> Vec<f32>
where
    I: IntoIterator<Item = &'a [f32]>,
    I::IntoIter: Clone,
{
    let lists = lists.into_iter();
    let length = lists.clone().map(<[f32]>::len).max().unwrap_or(0);

    (0..length)
        .map(|i| {
            let mut sum = 0.0f32;
            let mut count = 0.0f32;
            for list in lists.clone() {
                if let Some(&v) = list.get(i) {
                    sum += v;
                    count += 1.0;
                }
            }
            if count > 0.0 {
                sum / count
            } else {
                0.0
            }
        })
        .collect()
}

/// Borrowed view over the statistics that survived filtering.
struct Present<'a>(&'a [ScoreStatistic]);

impl Present<'_> {
    fn mean(&self, field: impl Fn(&ScoreStatistic) -> f64) -> f64 {
        let sum: f64 = self.0.iter().map(&field).sum();
        sum / self.0.len() as f64
    }

    fn mean_f32(&self, field: impl Fn(&ScoreStatistic) -> f32) -> f32 {
        self.mean(|s| f64::from(field(s))) as f32
    }

    /// Counts round half-to-even, as the service did.
    fn mean_count(&self, field: impl Fn(&ScoreStatistic) -> i32) -> i32 {
        self.mean(|s| f64::from(field(s))).round_ties_even() as i32
    }

    fn list(&self, field: impl Fn(&ScoreStatistic) -> &[f32]) -> Vec<f32> {
        average_list(self.0.iter().map(&field))
    }

    fn win(&self) -> WinTracker {
        WinTracker {
            won: self.mean(|s| if s.win_tracker.won { 1.0 } else { 0.0 }) > 0.5,
            end_time: self.mean_f32(|s| s.win_tracker.end_time),
            nb_of_pause: self.mean_count(|s| s.win_tracker.nb_of_pause),
            jump_distance: self.mean_f32(|s| s.win_tracker.jump_distance),
            average_height: self.mean_f32(|s| s.win_tracker.average_height),
            average_head_position: AveragePosition {
                x: self.mean_f32(|s| s.win_tracker.average_head_position.x),
                y: self.mean_f32(|s| s.win_tracker.average_head_position.y),
                z: self.mean_f32(|s| s.win_tracker.average_head_position.z),
            },
            // Truncated, not rounded.
            total_score: self.mean(|s| f64::from(s.win_tracker.total_score)) as i32,
        }
    }

    fn hits(&self) -> HitTracker {
        HitTracker {
            max_combo: self.mean_count(|s| s.hit_tracker.max_combo),
            left_miss: self.mean_count(|s| s.hit_tracker.left_miss),
            right_miss: self.mean_count(|s| s.hit_tracker.right_miss),
            left_bad_cuts: self.mean_count(|s| s.hit_tracker.left_bad_cuts),
            right_bad_cuts: self.mean_count(|s| s.hit_tracker.right_bad_cuts),
            left_bombs: self.mean_count(|s| s.hit_tracker.left_bombs),
            right_bombs: self.mean_count(|s| s.hit_tracker.right_bombs),
        }
    }

    fn accuracy(&self) -> AccuracyTracker {
        AccuracyTracker {
            acc_right: self.mean_f32(|s| s.accuracy_tracker.acc_right),
            acc_left: self.mean_f32(|s| s.accuracy_tracker.acc_left),
            left_preswing: self.mean_f32(|s| s.accuracy_tracker.left_preswing),
            right_preswing: self.mean_f32(|s| s.accuracy_tracker.right_preswing),
            average_preswing: self.mean_f32(|s| s.accuracy_tracker.average_preswing),
            left_postswing: self.mean_f32(|s| s.accuracy_tracker.left_postswing),
            right_postswing: self.mean_f32(|s| s.accuracy_tracker.right_postswing),
            left_time_dependence: self.mean_f32(|s| s.accuracy_tracker.left_time_dependence),
            right_time_dependence: self.mean_f32(|s| s.accuracy_tracker.right_time_dependence),
            left_average_cut: self.list(|s| s.accuracy_tracker.left_average_cut.as_slice()),
            right_average_cut: self.list(|s| s.accuracy_tracker.right_average_cut.as_slice()),
            grid_acc: self.list(|s| s.accuracy_tracker.grid_acc.as_slice()),
        }
    }
}

/// Reduces many per-play statistics into one.
///
/// `None` entries (failed or missing fetches) are skipped. Fails with
/// [`StatsError::NotFound`] when nothing is left to average.
pub fn average_statistics<I>(statistics: I) -> StatsResult<ScoreStatistic>
where
    I: IntoIterator<Item = Option<ScoreStatistic>>,
{
    let owned: Vec<ScoreStatistic> = statistics.into_iter().flatten().collect();
    average_present(&owned)
}

/// Same as [`average_statistics`] over already-filtered values.
pub fn average_present(statistics: &[ScoreStatistic]) -> StatsResult<ScoreStatistic> {
    if statistics.is_empty() {
        return Err(StatsError::NotFound(
            "no statistics available to average".to_string(),
        ));
    }

    let present = Present(statistics);

    Ok(ScoreStatistic {
        win_tracker: present.win(),
        hit_tracker: present.hits(),
        accuracy_tracker: present.accuracy(),
        score_graph_tracker: ScoreGraphTracker {
            graph: present.list(|s| s.score_graph_tracker.graph.as_slice()),
        },
    })
}
