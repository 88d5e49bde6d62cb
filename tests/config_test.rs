use replaystat::average::AveragingOptions;
use replaystat::config::{AveragingParams, Config, ReportParams};
use replaystat::error::StatsError;
use std::fs;

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.averaging.max_concurrency, 8);
    assert_eq!(config.averaging.min_statistics, 1);
    assert!(!config.report.pretty);
    assert!(!config.report.summary);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let (_dir, path) = write_config(r#"{ "averaging": { "max_concurrency": 2 } }"#);
    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.averaging.max_concurrency, 2);
    assert_eq!(config.averaging.min_statistics, 1);
    assert!(!config.report.pretty);
}

#[test]
fn test_full_file() {
    let expected = Config {
        averaging: AveragingParams {
            max_concurrency: 3,
            min_statistics: 5,
        },
        report: ReportParams {
            pretty: true,
            summary: true,
        },
    };
    let (_dir, path) = write_config(&serde_json::to_string(&expected).unwrap());
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.averaging.min_statistics, 5);
    assert!(loaded.report.pretty && loaded.report.summary);

    let opts = AveragingOptions::from(&loaded);
    assert_eq!(opts.max_concurrency, 3);
    assert_eq!(opts.min_statistics, 5);
}

#[test]
fn test_zero_concurrency_rejected() {
    let (_dir, path) = write_config(r#"{ "averaging": { "max_concurrency": 0 } }"#);
    assert!(matches!(
        Config::load_from_file(&path),
        Err(StatsError::Config(_))
    ));
}

#[test]
fn test_missing_and_malformed_files() {
    assert!(matches!(
        Config::load_from_file("/definitely/not/here.json"),
        Err(StatsError::Config(_))
    ));

    let (_dir, path) = write_config("max_concurrency = 3");
    assert!(matches!(
        Config::load_from_file(&path),
        Err(StatsError::Json(_))
    ));
}

#[test]
fn test_options_clamp_to_one() {
    let params = AveragingParams {
        max_concurrency: 0,
        min_statistics: 0,
    };
    let opts = AveragingOptions::from(&params);
    assert_eq!(opts.max_concurrency, 1);
    assert_eq!(opts.min_statistics, 1);
}
