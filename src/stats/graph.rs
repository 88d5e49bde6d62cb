use super::timeline::TimelineEntry;
use crate::replay::MAX_DURATION_SECS;

/// Value reported for the opening second when nothing has been hit yet.
pub const INITIAL_ACCURACY: f32 = 1.0;

/// Resamples running accuracy into one value per whole second.
///
/// Entries are consumed in order: bucket `i` takes every remaining entry
/// with `time < i + 1`. A bucket whose mean is zero (including an empty
/// bucket) repeats the previous bucket. At most [`MAX_DURATION_SECS`]
/// buckets are produced.
pub fn score_graph(entries: &[TimelineEntry], duration_secs: usize) -> Vec<f32> {
    let duration_secs = duration_secs.min(MAX_DURATION_SECS);
    let mut graph = vec![0.0f32; duration_secs];
    let mut cursor = 0;

    for i in 0..duration_secs {
        let upper = (i + 1) as f32;
        let mut cumulative = 0.0f32;
        let mut count = 0usize;

        while cursor < entries.len() && entries[cursor].time < upper {
            cumulative += entries[cursor].running_accuracy;
            cursor += 1;
            count += 1;
        }

        if count > 0 {
            graph[i] = cumulative / count as f32;
        }
        if graph[i] == 0.0 {
            graph[i] = if i == 0 { INITIAL_ACCURACY } else { graph[i - 1] };
        }
    }

    graph
}
