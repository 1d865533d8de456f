//! Steam-Achievements main entry point
//!
//! This is the command-line interface that turns a game's SteamDB pages into
//! an achievements ini file.

use clap::Parser;
use std::process::ExitCode;
use steam_achievements::config::Config;
use steam_achievements::{exit_status, pipeline};
use tracing_subscriber::EnvFilter;

/// Steam-Achievements: SteamDB achievement metadata extractor
///
/// Scrapes the achievements and stats of a Steam game from SteamDB and writes
/// them to gen/steam-<steamid>.ini (or gen/galaxy-<galaxyid>.ini). GOG
/// versions of a game are assumed to share the Steam achievements.
#[derive(Parser, Debug)]
#[command(name = "steam-achievements")]
#[command(version)]
#[command(about = "Extracts Steam achievement definitions from SteamDB", long_about = None)]
struct Cli {
    /// Steam game id
    #[arg(long = "steamid", value_name = "ID")]
    steam_id: u64,

    /// GOG Galaxy game id; names the output galaxy-<ID>.ini
    #[arg(long = "saveasgalaxyid", value_name = "ID")]
    galaxy_id: Option<u64>,

    /// Report each stage on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config::new(cli.steam_id, cli.galaxy_id, cli.verbose);

    setup_logging(config.verbose);

    let result = pipeline::run(&config);
    match &result {
        Ok(path) => tracing::debug!("done: {}", path.display()),
        Err(e) => tracing::error!("{}", e),
    }

    ExitCode::from(exit_status(&result))
}

/// Sets up the logging/tracing subscriber on stderr
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("steam_achievements=debug,warn")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
