//! Decoded replay model.
//!
//! These types mirror what the external binary decoder produces. The engine
//! only reads them; field names follow the service's camelCase JSON so a
//! decoder dump can be fed straight into [`Replay::load_from_file`].

use crate::error::{StatsError, StatsResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use strum_macros::Display;

/// Longest play, in seconds, that gets a score graph (one day).
pub const MAX_DURATION_SECS: usize = 86_400;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseData {
    pub position: Vector3,
    pub rotation: Quaternion,
}

/// One headset/controller tracking sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Frame {
    pub time: f32,
    pub fps: i32,
    pub head: PoseData,
    pub left_hand: PoseData,
    pub right_hand: PoseData,
}

/// Outcome of a single note interaction.
///
/// The decoder emits integer codes (`0..=3`); older dumps carry the lowercase
/// names. Anything else lands in `Unknown`, which scores as `-1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(from = "RawEventType", into = "i32")]
#[strum(serialize_all = "lowercase")]
pub enum NoteEventType {
    #[default]
    Good,
    Bad,
    Miss,
    Bomb,
    Unknown,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEventType {
    Code(i64),
    Name(String),
}

impl From<RawEventType> for NoteEventType {
    fn from(raw: RawEventType) -> Self {
        match raw {
            RawEventType::Code(0) => Self::Good,
            RawEventType::Code(1) => Self::Bad,
            RawEventType::Code(2) => Self::Miss,
            RawEventType::Code(3) => Self::Bomb,
            RawEventType::Code(_) => Self::Unknown,
            RawEventType::Name(name) => match name.to_ascii_lowercase().as_str() {
                "good" => Self::Good,
                "bad" => Self::Bad,
                "miss" => Self::Miss,
                "bomb" => Self::Bomb,
                _ => Self::Unknown,
            },
        }
    }
}

impl From<NoteEventType> for i32 {
    fn from(kind: NoteEventType) -> Self {
        match kind {
            NoteEventType::Good => 0,
            NoteEventType::Bad => 1,
            NoteEventType::Miss => 2,
            NoteEventType::Bomb => 3,
            NoteEventType::Unknown => -1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoteCutInfo {
    pub speed_ok: bool,
    pub direction_ok: bool,
    pub saber_type_ok: bool,
    pub was_cut_too_soon: bool,
    pub saber_speed: f32,
    pub saber_dir: Vector3,
    /// 0 = left saber, anything else = right.
    pub saber_type: i32,
    pub time_deviation: f32,
    pub cut_dir_deviation: f32,
    pub cut_point: Vector3,
    pub cut_normal: Vector3,
    pub cut_distance_to_center: f32,
    pub cut_angle: f32,
    pub before_cut_rating: f32,
    pub after_cut_rating: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoteEvent {
    #[serde(rename = "noteID")]
    pub note_id: i32,
    pub event_time: f32,
    pub spawn_time: f32,
    pub event_type: NoteEventType,
    pub note_cut_info: NoteCutInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WallEvent {
    #[serde(rename = "wallID")]
    pub wall_id: i32,
    pub energy: f32,
    pub time: f32,
    pub spawn_time: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomaticHeight {
    pub height: f32,
    pub time: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pause {
    pub duration: i64,
    pub time: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplayInfo {
    pub version: String,
    pub game_version: String,
    pub timestamp: String,
    pub player_id: String,
    pub player_name: String,
    pub platform: String,
    pub hmd: String,
    pub hash: String,
    pub song_name: String,
    pub mapper: String,
    pub difficulty: String,
    pub score: i32,
    pub mode: String,
    pub environment: String,
    pub modifiers: String,
    pub jump_distance: f32,
    pub left_handed: bool,
    pub height: f32,
    pub start_time: f32,
    /// Seconds into the song at which the player failed; `0` for a clear.
    pub fail_time: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Replay {
    pub info: ReplayInfo,
    pub frames: Vec<Frame>,
    pub notes: Vec<NoteEvent>,
    pub walls: Vec<WallEvent>,
    pub heights: Vec<AutomaticHeight>,
    pub pauses: Vec<Pause>,
}

impl Replay {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> StatsResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> StatsResult<Self> {
        let replay: Self = serde_json::from_reader(reader)?;
        replay.validate()?;
        Ok(replay)
    }

    /// Rejects tracking data no real play can produce.
    pub fn validate(&self) -> StatsResult<()> {
        if let Some(frame) = self.frames.iter().find(|f| !f.time.is_finite()) {
            return Err(StatsError::Validation(format!(
                "frame time {} is not finite",
                frame.time
            )));
        }
        let end = self.end_time();
        if end > MAX_DURATION_SECS as f32 {
            return Err(StatsError::Validation(format!(
                "last frame at {}s exceeds the {}s play limit",
                end, MAX_DURATION_SECS
            )));
        }
        Ok(())
    }

    /// Timestamp of the last tracking frame, or `0.0` for a frameless replay.
    pub fn end_time(&self) -> f32 {
        self.frames.last().map_or(0.0, |f| f.time)
    }

    /// Play length in whole seconds, as used by the score graph. Capped at
    /// [`MAX_DURATION_SECS`]; a non-finite end time counts as no length.
    pub fn duration_secs(&self) -> usize {
        let end = self.end_time();
        if end.is_finite() && end > 0.0 {
            (end as usize).min(MAX_DURATION_SECS)
        } else {
            0
        }
    }
}
