use crate::error::StatsResult;
use crate::stats::ScoreStatistic;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// Somewhere per-play statistics can be fetched from.
///
/// `Ok(None)` means the statistic does not exist; errors are treated the
/// same way by the averager but are logged.
pub trait StatisticSource: Sync {
    fn fetch(&self, id: &str) -> StatsResult<Option<ScoreStatistic>>;
}

/// Reads `<root>/<id>.json`, the layout the service uses for stored stats.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    /// Ids of every `*.json` file in the directory, sorted.
    pub fn list_ids(&self) -> StatsResult<Vec<String>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}

impl StatisticSource for DirectorySource {
    fn fetch(&self, id: &str) -> StatsResult<Option<ScoreStatistic>> {
        let file = match File::open(self.path_for(id)) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stat = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(stat))
    }
}

/// In-process source, handy for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    stats: HashMap<String, ScoreStatistic>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, stat: ScoreStatistic) {
        self.stats.insert(id.into(), stat);
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

impl FromIterator<(String, ScoreStatistic)> for MemorySource {
    fn from_iter<T: IntoIterator<Item = (String, ScoreStatistic)>>(iter: T) -> Self {
        Self {
            stats: iter.into_iter().collect(),
        }
    }
}

impl StatisticSource for MemorySource {
    fn fetch(&self, id: &str) -> StatsResult<Option<ScoreStatistic>> {
        Ok(self.stats.get(id).cloned())
    }
}
