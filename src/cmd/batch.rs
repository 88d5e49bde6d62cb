use clap::Args;
use replaystat::api;
use replaystat::config::Config;
use replaystat::error::StatsResult;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Directory of decoded replays (*.json)
    pub input_dir: String,

    /// Directory receiving one statistic per replay
    pub output_dir: String,
}

pub fn run(args: BatchArgs, config: &Config) -> StatsResult<()> {
    let report = api::process_directory(&args.input_dir, &args.output_dir, config.report.pretty)?;

    info!(
        "Batch complete: {} written, {} skipped",
        report.written.len(),
        report.skipped.len()
    );
    for (path, reason) in &report.skipped {
        warn!("  {} ({})", path.display(), reason);
    }
    println!("{} statistics written to {}", report.written.len(), args.output_dir);
    Ok(())
}
