use criterion::{criterion_group, criterion_main, Criterion};
use replaystat::average::average_present;
use replaystat::replay::{Frame, NoteCutInfo, NoteEvent, NoteEventType, Replay, WallEvent};
use replaystat::stats::{process_replay, simulate_replay, NoteParams, ScoringType};
use std::hint::black_box;

/// Synthetic ~4 minute map at 6 notes per second.
fn setup_replay(seed: u64) -> Replay {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut replay = Replay::default();
    replay.info.height = 1.75;

    let duration = 240.0f32;
    let mut t = 0.0f32;
    while t < duration {
        let mut frame = Frame {
            time: t,
            fps: 90,
            ..Default::default()
        };
        frame.head.position.y = 1.6 + rng.f32() * 0.1;
        replay.frames.push(frame);
        t += 1.0 / 90.0;
    }

    let scoring = [
        ScoringType::Normal,
        ScoringType::Normal,
        ScoringType::Normal,
        ScoringType::SliderHead,
        ScoringType::SliderTail,
        ScoringType::BurstSliderHead,
        ScoringType::BurstSliderElement,
    ];

    for i in 0..(duration as usize * 6) {
        let params = NoteParams {
            scoring_type: scoring[rng.usize(..scoring.len())],
            line_index: rng.i32(0..4),
            line_layer: rng.i32(0..3),
            color_type: rng.i32(0..3),
            cut_direction: rng.i32(0..9),
        };
        let roll = rng.f32();
        let event_type = match roll {
            r if r < 0.94 => NoteEventType::Good,
            r if r < 0.97 => NoteEventType::Miss,
            r if r < 0.99 => NoteEventType::Bad,
            _ => NoteEventType::Bomb,
        };
        replay.notes.push(NoteEvent {
            note_id: params.to_note_id(),
            event_time: i as f32 / 6.0,
            spawn_time: i as f32 / 6.0 - 1.0,
            event_type,
            note_cut_info: NoteCutInfo {
                saber_type: params.color_type.min(1),
                before_cut_rating: 0.7 + rng.f32() * 0.4,
                after_cut_rating: 0.7 + rng.f32() * 0.4,
                cut_distance_to_center: rng.f32() * 0.3,
                ..Default::default()
            },
        });
    }

    for i in 0..20 {
        replay.walls.push(WallEvent {
            wall_id: i,
            energy: 0.8,
            time: rng.f32() * duration,
            spawn_time: 0.0,
        });
    }

    replay
}

fn criterion_benchmark(c: &mut Criterion) {
    let replay = setup_replay(42);

    c.bench_function("simulate (1440 notes)", |b| {
        b.iter(|| simulate_replay(black_box(&replay)))
    });

    c.bench_function("process_replay (1440 notes)", |b| {
        b.iter(|| process_replay(black_box(&replay)))
    });

    let stats: Vec<_> = (0..50).map(|s| process_replay(&setup_replay(s))).collect();
    c.bench_function("average (50 statistics)", |b| {
        b.iter(|| average_present(black_box(&stats)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
