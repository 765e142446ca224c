//! CLI for generating address fixtures with a controlled rate of duplicates.

mod commands;
mod utils;

use clap::Parser;
use rand::prelude::*;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The random seed to use. Without one, every run produces different files.
    #[arg(short('s'), long)]
    seed: Option<u64>,

    /// The name of the log-file to use.
    #[arg(short('l'), long, default_value = "addrgen.log")]
    log_name: String,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger(&args.log_name)?;
    ftlog::info!("Log file: {log_path:?}");

    let mut rng = args.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    match args.command {
        Commands::Generate {
            config,
            num_files,
            numbers_per_file,
            min_rate,
            max_rate,
            out_dir,
            manifest,
        } => {
            let config = commands::generate::resolve_config(config.as_deref(), num_files, numbers_per_file, min_rate, max_rate, out_dir)?;
            commands::generate::generate_fixtures(&config, manifest, &mut rng)
        }
        Commands::Stats { inp_dir } => commands::stats::print_stats(&inp_dir),
    }
}
