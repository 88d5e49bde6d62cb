use crate::error::{StatsError, StatsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub averaging: AveragingParams,
    #[command(flatten)]
    pub report: ReportParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AveragingParams {
    /// Upper bound on statistic fetches in flight.
    #[arg(long, default_value_t = 8)]
    pub max_concurrency: usize,

    /// Fewer available statistics than this is reported as not found.
    #[arg(long, default_value_t = 1)]
    pub min_statistics: usize,
}

impl Default for AveragingParams {
    fn default() -> Self {
        Self {
            max_concurrency: 8,
            min_statistics: 1,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportParams {
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Print summary tables to stdout.
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> StatsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StatsError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> StatsResult<()> {
        if self.averaging.max_concurrency == 0 {
            return Err(StatsError::Config(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Copies values the user typed on the command line over file values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(averaging.max_concurrency);
        update_if_present!(averaging.min_statistics);
        update_if_present!(report.pretty);
        update_if_present!(report.summary);
    }
}
