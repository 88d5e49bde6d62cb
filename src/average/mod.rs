pub mod reduce;
pub mod source;

pub use self::reduce::{average_list, average_present, average_statistics};
pub use self::source::{DirectorySource, MemorySource, StatisticSource};

use crate::config::{AveragingParams, Config};
use crate::error::{StatsError, StatsResult};
use crate::stats::ScoreStatistic;
use rayon::prelude::*;
use tracing::{info, warn};

pub struct AveragingOptions {
    pub max_concurrency: usize,
    pub min_statistics: usize,
}

impl Default for AveragingOptions {
    fn default() -> Self {
        Self::from(&AveragingParams::default())
    }
}

impl From<&AveragingParams> for AveragingOptions {
    fn from(params: &AveragingParams) -> Self {
        Self {
            max_concurrency: params.max_concurrency.max(1),
            min_statistics: params.min_statistics.max(1),
        }
    }
}

impl From<&Config> for AveragingOptions {
    fn from(cfg: &Config) -> Self {
        Self::from(&cfg.averaging)
    }
}

/// Outcome of one fetch, kept so callers can report what was skipped.
#[derive(Debug)]
pub enum FetchOutcome {
    Found(ScoreStatistic),
    Missing,
    Failed(StatsError),
}

impl FetchOutcome {
    pub fn into_statistic(self) -> Option<ScoreStatistic> {
        match self {
            Self::Found(stat) => Some(stat),
            Self::Missing | Self::Failed(_) => None,
        }
    }
}

/// Fans statistic fetches out over a bounded pool, then reduces them.
pub struct StatisticAverager {
    options: AveragingOptions,
}

impl StatisticAverager {
    pub fn new(options: AveragingOptions) -> Self {
        Self { options }
    }

    /// Fetches every id with at most `max_concurrency` in flight. Results
    /// keep the order of `ids`.
    pub fn fetch_all<S, I>(&self, source: &S, ids: I) -> StatsResult<Vec<(String, FetchOutcome)>>
    where
        S: StatisticSource + ?Sized,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.max_concurrency)
            .build()
            .map_err(|e| StatsError::Config(format!("Failed to build fetch pool: {}", e)))?;

        let outcomes = pool.install(|| {
            ids.into_par_iter()
                .map(|id| {
                    let outcome = match source.fetch(&id) {
                        Ok(Some(stat)) => FetchOutcome::Found(stat),
                        Ok(None) => FetchOutcome::Missing,
                        Err(e) => {
                            warn!("Failed to fetch statistic '{}': {}", id, e);
                            FetchOutcome::Failed(e)
                        }
                    };
                    (id, outcome)
                })
                .collect()
        });

        Ok(outcomes)
    }

    /// Averages whatever could be fetched. Missing and failed ids are
    /// excluded rather than aborting the whole reduction.
    pub fn run<S, I>(&self, source: &S, ids: I) -> StatsResult<ScoreStatistic>
    where
        S: StatisticSource + ?Sized,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let outcomes = self.fetch_all(source, ids)?;
        let requested = outcomes.len();

        let present: Vec<ScoreStatistic> = outcomes
            .into_iter()
            .filter_map(|(_, outcome)| outcome.into_statistic())
            .collect();

        info!(
            "Averaging {} of {} requested statistics",
            present.len(),
            requested
        );

        if present.len() < self.options.min_statistics {
            return Err(StatsError::NotFound(format!(
                "only {} of {} statistics available, need at least {}",
                present.len(),
                requested,
                self.options.min_statistics
            )));
        }

        average_present(&present)
    }
}
