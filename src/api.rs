//! File-level services shared by the CLI and embedding applications.

use crate::average::{AveragingOptions, DirectorySource, StatisticAverager};
use crate::config::Config;
use crate::error::{StatsError, StatsResult};
use crate::replay::Replay;
use crate::stats::{process_replay, ScoreStatistic};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Service: compute the statistic of one replay file.
pub fn process_replay_file<P: AsRef<Path>>(path: P) -> StatsResult<ScoreStatistic> {
    let path = path.as_ref();
    info!("Processing replay: {}", path.display());
    let replay = Replay::load_from_file(path)?;
    Ok(process_replay(&replay))
}

pub fn to_json(stat: &ScoreStatistic, pretty: bool) -> StatsResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(stat)?
    } else {
        serde_json::to_string(stat)?
    };
    Ok(json)
}

pub fn write_statistic<P: AsRef<Path>>(
    path: P,
    stat: &ScoreStatistic,
    pretty: bool,
) -> StatsResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(to_json(stat, pretty)?.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct GraphRow {
    second: usize,
    accuracy: f32,
}

/// Writes the score graph as `second,accuracy` rows.
pub fn write_graph_csv<W: Write>(writer: W, graph: &[f32]) -> StatsResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (second, &accuracy) in graph.iter().enumerate() {
        wtr.serialize(GraphRow { second, accuracy })?;
    }
    wtr.flush()?;
    Ok(())
}

fn json_files(dir: &Path) -> StatsResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn process_into(path: &Path, output_dir: &Path, pretty: bool) -> StatsResult<PathBuf> {
    let stat = process_replay_file(path)?;
    let name = path
        .file_name()
        .ok_or_else(|| StatsError::Validation("replay path has no file name".to_string()))?;
    let target = output_dir.join(name);
    write_statistic(&target, &stat, pretty)?;
    Ok(target)
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, String)>,
}

/// Service: process every `*.json` replay in `input_dir` in parallel and
/// write `<stem>.json` statistics into `output_dir`.
pub fn process_directory<P1: AsRef<Path>, P2: AsRef<Path>>(
    input_dir: P1,
    output_dir: P2,
    pretty: bool,
) -> StatsResult<BatchReport> {
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();
    if !input_dir.is_dir() {
        return Err(StatsError::Validation(format!(
            "'{}' is not a directory",
            input_dir.display()
        )));
    }
    fs::create_dir_all(output_dir)?;

    let files = json_files(input_dir)?;
    info!("Batch: {} replays in {}", files.len(), input_dir.display());

    let results: Vec<(PathBuf, StatsResult<PathBuf>)> = files
        .into_par_iter()
        .map(|path| {
            let result = process_into(&path, output_dir, pretty);
            (path, result)
        })
        .collect();

    let mut report = BatchReport::default();
    for (path, result) in results {
        match result {
            Ok(target) => report.written.push(target),
            Err(e) => {
                warn!("Skipping '{}': {}", path.display(), e);
                report.skipped.push((path, e.to_string()));
            }
        }
    }
    Ok(report)
}

/// Service: average statistics stored as `<id>.json` in `dir`. With no ids,
/// every statistic in the directory is used.
pub fn average_directory<P: AsRef<Path>>(
    dir: P,
    ids: &[String],
    config: &Config,
) -> StatsResult<ScoreStatistic> {
    let source = DirectorySource::new(dir);
    let ids = if ids.is_empty() {
        source.list_ids()?
    } else {
        ids.to_vec()
    };

    StatisticAverager::new(AveragingOptions::from(config)).run(&source, ids)
}
