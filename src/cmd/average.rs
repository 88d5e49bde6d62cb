use crate::reports;
use clap::Args;
use replaystat::api;
use replaystat::config::Config;
use replaystat::error::StatsResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AverageArgs {
    #[command(flatten)]
    pub config: Config,

    /// Directory holding `<id>.json` statistics
    pub dir: String,

    /// Statistic ids to include (default: all in the directory)
    pub ids: Vec<String>,

    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: AverageArgs, config: &Config) -> StatsResult<()> {
    let stat = api::average_directory(&args.dir, &args.ids, config)?;

    if config.report.summary {
        reports::print_statistic("Average", &stat);
    }

    match &args.output {
        Some(path) => {
            api::write_statistic(path, &stat, config.report.pretty)?;
            info!("Aggregate written to {}", path);
        }
        None if !config.report.summary => println!("{}", api::to_json(&stat, config.report.pretty)?),
        None => {}
    }
    Ok(())
}
