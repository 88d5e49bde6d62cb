mod common;

use common::{ReplayBuilder, LEFT, RIGHT};
use regex::Regex;
use replaystat::replay::Replay;
use replaystat::stats::ScoreStatistic;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    replay_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let replay_path = dir.path().join("play.json");
        write_replay(&replay_path, &sample_replay());
        Self { dir, replay_path }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn sample_replay() -> Replay {
    ReplayBuilder::new()
        .good(0.5, LEFT)
        .good(1.0, RIGHT)
        .miss(1.5, LEFT)
        .wall(2.0)
        .good(2.5, RIGHT)
        .frames(4.0, 0.25)
        .build()
}

fn write_replay(path: &Path, replay: &Replay) {
    fs::write(path, serde_json::to_string(replay).unwrap()).unwrap();
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_replaystat"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_cli_process_prints_json() {
    let ctx = TestContext::new();
    let output = run(&["process", ctx.replay_path.to_str().unwrap()]);
    assert!(output.status.success(), "{:?}", output);

    let stat: ScoreStatistic = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(stat.hit_tracker.left_miss, 1);
    assert_eq!(stat.score_graph_tracker.graph.len(), 4);
    assert!(stdout(&output).contains("\"winTracker\""));
}

#[test]
fn test_cli_process_writes_output_and_graph() {
    let ctx = TestContext::new();
    let out = ctx.path("stat.json");
    let csv = ctx.path("graph.csv");
    let output = run(&[
        "process",
        ctx.replay_path.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
        "--graph-csv",
        csv.to_str().unwrap(),
        "--pretty",
    ]);
    assert!(output.status.success(), "{:?}", output);
    assert!(stdout(&output).is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains('\n'));
    let stat: ScoreStatistic = serde_json::from_str(&written).unwrap();
    assert_eq!(stat.hit_tracker.max_combo, 2);

    let rows = fs::read_to_string(&csv).unwrap();
    let mut lines = rows.lines();
    assert_eq!(lines.next(), Some("second,accuracy"));
    assert_eq!(lines.count(), 4);
}

#[test]
fn test_cli_summary_tables() {
    let ctx = TestContext::new();
    let output = run(&["process", ctx.replay_path.to_str().unwrap(), "--summary"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Grid accuracy"));
    assert!(text.contains("Preswing"));
    assert!(Regex::new(r"Score graph \(4 s\)").unwrap().is_match(&text));
}

#[test]
fn test_cli_batch_then_average() {
    let ctx = TestContext::new();
    let input = ctx.path("replays");
    let stats = ctx.path("stats");
    fs::create_dir_all(&input).unwrap();
    write_replay(&input.join("a.json"), &sample_replay());
    write_replay(
        &input.join("b.json"),
        &ReplayBuilder::new()
            .good(0.5, LEFT)
            .frames(2.0, 0.5)
            .build(),
    );
    fs::write(input.join("c.json"), "{ broken").unwrap();

    let output = run(&[
        "batch",
        input.to_str().unwrap(),
        stats.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{:?}", output);

    let re = Regex::new(r"(\d+) statistics written to").unwrap();
    let text = stdout(&output);
    let caps = re.captures(&text).expect("batch summary line");
    assert_eq!(&caps[1], "2");
    assert!(stats.join("a.json").exists());
    assert!(!stats.join("c.json").exists());

    let output = run(&["average", stats.to_str().unwrap(), "a", "b", "missing"]);
    assert!(output.status.success(), "{:?}", output);
    let avg: ScoreStatistic = serde_json::from_str(&stdout(&output)).unwrap();
    // Graph lengths 4 and 2 average to the longer one.
    assert_eq!(avg.score_graph_tracker.graph.len(), 4);
}

#[test]
fn test_cli_average_nothing_fails() {
    let ctx = TestContext::new();
    let empty = ctx.path("empty");
    fs::create_dir_all(&empty).unwrap();
    let output = run(&["average", empty.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_config_file_with_override() {
    let ctx = TestContext::new();
    let cfg = ctx.path("config.json");
    fs::write(&cfg, r#"{ "averaging": { "min_statistics": 5 } }"#).unwrap();

    let stats = ctx.path("stats");
    fs::create_dir_all(&stats).unwrap();
    let stat = replaystat::stats::process_replay(&sample_replay());
    replaystat::api::write_statistic(stats.join("a.json"), &stat, false).unwrap();

    let base = ["average", stats.to_str().unwrap(), "--config-file", cfg.to_str().unwrap()];
    assert!(!run(&base).status.success());

    let mut overridden = base.to_vec();
    overridden.extend_from_slice(&["--min-statistics", "1"]);
    assert!(run(&overridden).status.success());
}

#[test]
fn test_cli_missing_replay_fails() {
    let ctx = TestContext::new();
    let output = run(&["process", ctx.path("nope.json").to_str().unwrap()]);
    assert!(!output.status.success());
}
