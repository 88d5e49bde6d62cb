use super::cut::cut_scores;
use super::notes::{ScoringType, GRID_CELLS};
use super::timeline::ScoredNote;
use super::types::AccuracyTracker;

/// Running sums for one saber.
#[derive(Debug, Clone, Copy, Default)]
struct SideSums {
    // [before-cut, center-distance, after-cut]
    cut: [f32; 3],
    counts: [u32; 3],
    preswing: f32,
    postswing: f32,
    acc: f32,
    time_dependence: f32,
}

#[inline(always)]
fn mean(sum: f32, count: u32) -> f32 {
    sum / if count > 0 { count as f32 } else { 1.0 }
}

impl SideSums {
    fn add(&mut self, note: &ScoredNote<'_>) {
        let st = note.params.scoring_type;
        let cut = &note.event.note_cut_info;
        let parts = cut_scores(note.event, st);

        if !matches!(
            st,
            ScoringType::SliderTail | ScoringType::BurstSliderElement
        ) {
            self.cut[0] += parts.before as f32;
            self.preswing += cut.before_cut_rating;
            self.counts[0] += 1;
        }
        if !st.is_burst() {
            self.cut[1] += parts.center as f32;
            self.acc += note.score as f32;
            self.time_dependence += cut.cut_normal.z.abs();
            self.counts[1] += 1;
        }
        if !matches!(st, ScoringType::SliderHead) && !st.is_burst() {
            self.cut[2] += parts.after as f32;
            self.postswing += cut.after_cut_rating;
            self.counts[2] += 1;
        }
    }

    fn average_cut(&self) -> Vec<f32> {
        (0..3).map(|i| mean(self.cut[i], self.counts[i])).collect()
    }
}

/// Collects the per-side and per-cell accuracy sums of a play.
#[derive(Debug, Clone, Default)]
pub struct AccuracyAccumulator {
    left: SideSums,
    right: SideSums,
    grid: [f32; GRID_CELLS],
    grid_counts: [u32; GRID_CELLS],
}

impl AccuracyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only positive-score notes contribute.
    pub fn add(&mut self, note: &ScoredNote<'_>) {
        if note.score <= 0 {
            return;
        }

        if !note.params.scoring_type.is_burst() {
            let index = note.params.grid_index();
            self.grid[index] += note.score as f32;
            self.grid_counts[index] += 1;
        }

        if note.params.is_left() {
            self.left.add(note);
        } else {
            self.right.add(note);
        }
    }

    pub fn finish(&self) -> AccuracyTracker {
        let (l, r) = (&self.left, &self.right);

        let grid_acc = self
            .grid
            .iter()
            .zip(self.grid_counts.iter())
            .map(|(&sum, &count)| mean(sum, count))
            .collect();

        AccuracyTracker {
            acc_left: mean(l.acc, l.counts[1]),
            acc_right: mean(r.acc, r.counts[1]),
            left_preswing: mean(l.preswing, l.counts[0]),
            right_preswing: mean(r.preswing, r.counts[0]),
            average_preswing: mean(l.preswing + r.preswing, l.counts[0] + r.counts[0]),
            left_postswing: mean(l.postswing, l.counts[2]),
            right_postswing: mean(r.postswing, r.counts[2]),
            left_time_dependence: mean(l.time_dependence, l.counts[1]),
            right_time_dependence: mean(r.time_dependence, r.counts[1]),
            left_average_cut: l.average_cut(),
            right_average_cut: r.average_cut(),
            grid_acc,
        }
    }
}

pub fn accuracy_tracker(notes: &[ScoredNote<'_>]) -> AccuracyTracker {
    let mut acc = AccuracyAccumulator::new();
    for note in notes {
        acc.add(note);
    }
    acc.finish()
}
