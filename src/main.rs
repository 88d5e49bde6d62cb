use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use replaystat::config::Config;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay statistics for rhythm game plays", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; explicit command-line flags override it.
    #[arg(global = true, long)]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the statistic of one replay
    Process(cmd::process::ProcessArgs),
    /// Compute statistics for every replay in a directory
    Batch(cmd::batch::BatchArgs),
    /// Average stored statistics into one aggregate
    Average(cmd::average::AverageArgs),
}

fn resolve_config(cli_config: &Config, file: Option<&str>, sub_matches: &ArgMatches) -> Config {
    let Some(path) = file else {
        return cli_config.clone();
    };

    info!("Loading config from: {}", path);
    let mut config = Config::load_from_file(path).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    config.merge_from_cli(cli_config, sub_matches);
    config
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_name) = match &cli.command {
        Commands::Process(args) => (&args.config, "process"),
        Commands::Batch(args) => (&args.config, "batch"),
        Commands::Average(args) => (&args.config, "average"),
    };
    let Some(sub_matches) = matches.subcommand_matches(sub_name) else {
        error!("Missing arguments for '{}'", sub_name);
        process::exit(2);
    };
    let config = resolve_config(cli_config, cli.config_file.as_deref(), sub_matches);

    let result = match cli.command {
        Commands::Process(args) => cmd::process::run(args, &config),
        Commands::Batch(args) => cmd::batch::run(args, &config),
        Commands::Average(args) => cmd::average::run(args, &config),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
