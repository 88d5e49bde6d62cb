#![allow(dead_code)]

use replaystat::replay::{
    AutomaticHeight, Frame, NoteCutInfo, NoteEvent, NoteEventType, Pause, Replay, Vector3,
    WallEvent,
};
use replaystat::stats::{NoteParams, ScoringType};

pub const LEFT: i32 = 0;
pub const RIGHT: i32 = 1;
pub const BOMB: i32 = 2;

/// Packs a normal-scoring note id for the given cell and colour.
pub fn note_id(line_index: i32, line_layer: i32, color_type: i32) -> i32 {
    typed_note_id(ScoringType::Normal, line_index, line_layer, color_type)
}

pub fn typed_note_id(
    scoring_type: ScoringType,
    line_index: i32,
    line_layer: i32,
    color_type: i32,
) -> i32 {
    NoteParams {
        scoring_type,
        line_index,
        line_layer,
        color_type,
        cut_direction: 1,
    }
    .to_note_id()
}

/// A perfect good cut: 70 + 30 + 15.
pub fn perfect_cut(saber_type: i32) -> NoteCutInfo {
    cut_info(saber_type, 1.0, 1.0, 0.0)
}

pub fn cut_info(saber_type: i32, before: f32, after: f32, distance: f32) -> NoteCutInfo {
    NoteCutInfo {
        speed_ok: true,
        direction_ok: true,
        saber_type_ok: true,
        saber_type,
        before_cut_rating: before,
        after_cut_rating: after,
        cut_distance_to_center: distance,
        cut_normal: Vector3::new(0.0, 0.0, 0.5),
        ..Default::default()
    }
}

/// Builder for decoded replays to keep test fixtures short.
pub struct ReplayBuilder {
    replay: Replay,
}

impl ReplayBuilder {
    pub fn new() -> Self {
        let mut replay = Replay::default();
        replay.info.height = 1.7;
        replay.info.jump_distance = 18.0;
        Self { replay }
    }

    pub fn event(mut self, note_id: i32, time: f32, kind: NoteEventType, cut: NoteCutInfo) -> Self {
        self.replay.notes.push(NoteEvent {
            note_id,
            event_time: time,
            spawn_time: time - 1.0,
            event_type: kind,
            note_cut_info: cut,
        });
        self
    }

    /// Perfect cut on a normal note of `color_type`.
    pub fn good(self, time: f32, color_type: i32) -> Self {
        let saber = if color_type == LEFT { LEFT } else { RIGHT };
        self.event(
            note_id(1, 0, color_type),
            time,
            NoteEventType::Good,
            perfect_cut(saber),
        )
    }

    pub fn miss(self, time: f32, color_type: i32) -> Self {
        self.event(
            note_id(2, 1, color_type),
            time,
            NoteEventType::Miss,
            NoteCutInfo::default(),
        )
    }

    pub fn bad(self, time: f32, saber_type: i32) -> Self {
        self.event(
            note_id(0, 0, RIGHT),
            time,
            NoteEventType::Bad,
            NoteCutInfo {
                saber_type,
                ..Default::default()
            },
        )
    }

    pub fn bomb(self, time: f32) -> Self {
        self.event(
            note_id(0, 0, BOMB),
            time,
            NoteEventType::Bomb,
            NoteCutInfo::default(),
        )
    }

    pub fn wall(mut self, time: f32) -> Self {
        let wall_id = self.replay.walls.len() as i32;
        self.replay.walls.push(WallEvent {
            wall_id,
            energy: 0.5,
            time,
            spawn_time: time - 1.0,
        });
        self
    }

    /// Frames every `step` seconds from 0 up to and including `end`.
    pub fn frames(mut self, end: f32, step: f32) -> Self {
        let mut t = 0.0f32;
        while t <= end {
            let mut frame = Frame {
                time: t,
                fps: 90,
                ..Default::default()
            };
            frame.head.position = Vector3::new(0.0, 1.6, 0.1);
            self.replay.frames.push(frame);
            t += step;
        }
        self
    }

    pub fn frame_at(mut self, time: f32, head: Vector3) -> Self {
        let mut frame = Frame {
            time,
            fps: 90,
            ..Default::default()
        };
        frame.head.position = head;
        self.replay.frames.push(frame);
        self
    }

    pub fn height(mut self, time: f32, height: f32) -> Self {
        self.replay.heights.push(AutomaticHeight { height, time });
        self
    }

    pub fn pause(mut self, time: f32) -> Self {
        self.replay.pauses.push(Pause { duration: 3, time });
        self
    }

    pub fn fail_at(mut self, fail_time: f32) -> Self {
        self.replay.info.fail_time = fail_time;
        self
    }

    pub fn build(self) -> Replay {
        self.replay
    }
}

impl Default for ReplayBuilder {
    fn default() -> Self {
        Self::new()
    }
}
