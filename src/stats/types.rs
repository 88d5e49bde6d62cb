use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AveragePosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WinTracker {
    pub won: bool,
    pub end_time: f32,
    pub nb_of_pause: i32,
    pub jump_distance: f32,
    pub average_height: f32,
    pub average_head_position: AveragePosition,
    pub total_score: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HitTracker {
    pub max_combo: i32,
    pub left_miss: i32,
    pub right_miss: i32,
    pub left_bad_cuts: i32,
    pub right_bad_cuts: i32,
    pub left_bombs: i32,
    pub right_bombs: i32,
}

impl HitTracker {
    pub fn total_misses(&self) -> i32 {
        self.left_miss + self.right_miss
    }

    pub fn total_bad_cuts(&self) -> i32 {
        self.left_bad_cuts + self.right_bad_cuts
    }

    pub fn total_bombs(&self) -> i32 {
        self.left_bombs + self.right_bombs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccuracyTracker {
    pub acc_right: f32,
    pub acc_left: f32,
    pub left_preswing: f32,
    pub right_preswing: f32,
    pub average_preswing: f32,
    pub left_postswing: f32,
    pub right_postswing: f32,
    pub left_time_dependence: f32,
    pub right_time_dependence: f32,
    /// Mean before-cut, center-distance and after-cut sub-scores.
    pub left_average_cut: Vec<f32>,
    pub right_average_cut: Vec<f32>,
    /// Mean note score per cell, row-major from the bottom layer.
    pub grid_acc: Vec<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreGraphTracker {
    pub graph: Vec<f32>,
}

/// Everything the service reports about one play (or an average of plays).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreStatistic {
    pub win_tracker: WinTracker,
    pub hit_tracker: HitTracker,
    pub accuracy_tracker: AccuracyTracker,
    pub score_graph_tracker: ScoreGraphTracker,
}
