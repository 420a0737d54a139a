//! Command-line interface turning collected feature records into OSM XML.
#![forbid(unsafe_code)]

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

mod encode;
mod error;

use encode::{EncodeArgs, run_encode};
pub use error::CliError;

/// Run the osmfile CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    match cli.command {
        Command::Encode(args) => {
            run_encode(args)?;
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(level_filter(verbose))
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

const fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "osmfile",
    about = "Write field-collected features as OpenStreetMap XML",
    version
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode a JSON feature list into an `.osm` document.
    Encode(EncodeArgs),
}

#[cfg(test)]
mod tests;
