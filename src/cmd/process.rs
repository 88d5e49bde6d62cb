use crate::reports;
use clap::Args;
use replaystat::api;
use replaystat::config::Config;
use replaystat::error::StatsResult;
use std::fs::File;
use std::io::BufWriter;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub config: Config,

    /// Decoded replay (JSON)
    pub replay: String,

    /// Write the statistic here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Export the per-second score graph as CSV
    #[arg(long)]
    pub graph_csv: Option<String>,
}

pub fn run(args: ProcessArgs, config: &Config) -> StatsResult<()> {
    let stat = api::process_replay_file(&args.replay)?;

    if let Some(path) = &args.graph_csv {
        info!("Writing score graph to {}", path);
        let writer = BufWriter::new(File::create(path)?);
        api::write_graph_csv(writer, &stat.score_graph_tracker.graph)?;
    }

    if config.report.summary {
        reports::print_statistic(&args.replay, &stat);
    }

    match &args.output {
        Some(path) => {
            api::write_statistic(path, &stat, config.report.pretty)?;
            info!("Statistic written to {}", path);
        }
        None if !config.report.summary => println!("{}", api::to_json(&stat, config.report.pretty)?),
        None => {}
    }
    Ok(())
}
