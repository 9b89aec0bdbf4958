//! Command-line interface for ranking rated places.
//!
//! Two subcommands sit on top of the library crates:
//! - `rank` reads a places document, orders it by the lower confidence bound
//!   of each rating, and writes the ranked document.
//! - `grid` prints the search tiles a collection run would query.
//!
//! Subcommand arguments are layered with `ortho_config`: defaults, then
//! configuration files, then `PLACERANK_CMDS_*` environment variables, then
//! flags.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{ArgAction, Parser, Subcommand};
use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;
use serde::Serialize;

mod error;
mod fs;
mod grid;
mod rank;

pub use error::CliError;

use grid::GridArgs;
use rank::RankArgs;

pub(crate) const ARG_RANK_INPUT: &str = "input";
pub(crate) const ENV_RANK_INPUT: &str = "PLACERANK_CMDS_RANK_INPUT";
pub(crate) const ARG_RANK_OUTPUT: &str = "output";
pub(crate) const ARG_RANK_CONFIDENCE: &str = "confidence";
pub(crate) const ARG_RANK_DROP_ZERO_REVIEWS: &str = "drop-zero-reviews";
pub(crate) const ARG_GRID_LATITUDE: &str = "latitude";
pub(crate) const ENV_GRID_LATITUDE: &str = "PLACERANK_CMDS_GRID_LATITUDE";
pub(crate) const ARG_GRID_LONGITUDE: &str = "longitude";
pub(crate) const ENV_GRID_LONGITUDE: &str = "PLACERANK_CMDS_GRID_LONGITUDE";
pub(crate) const ARG_GRID_RADIUS_KM: &str = "radius-km";
pub(crate) const ARG_GRID_TILE_RADIUS_M: &str = "tile-radius-m";

/// Run the placerank CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, or when
/// the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests are not failures.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    init_logging(cli.verbose);
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
        Command::Grid(args) => grid::run_grid(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "placerank",
    about = "Rank rated places by the confidence behind their ratings",
    version
)]
struct Cli {
    /// Raise the log level; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a places document by the Wilson lower bound of each rating.
    Rank(RankArgs),
    /// Print the search tiles covering an area.
    Grid(GridArgs),
}

const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbosity: u8) {
    let mut builder = LoggerBuilder::new();
    builder.filter_level(level_for_verbosity(verbosity));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<W, T>(writer: &mut W, value: &T) -> Result<(), CliError>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::Serialise)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)
}

#[cfg(test)]
mod tests;
