pub mod accuracy;
pub mod aggregate;
pub mod cut;
pub mod graph;
pub mod multiplier;
pub mod notes;
pub mod timeline;
pub mod types;

pub use self::aggregate::{process_replay, process_replays};
pub use self::multiplier::{MultiplierState, MultiplierStep};
pub use self::notes::{NoteParams, ScoringType};
pub use self::timeline::{simulate, simulate_replay, Simulation, TimelineEntry};
pub use self::types::{
    AccuracyTracker, AveragePosition, HitTracker, ScoreGraphTracker, ScoreStatistic, WinTracker,
};
