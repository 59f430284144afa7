//! Command-line interface for ranking restaurants and planning the route.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod hours;
mod link;
mod rank;

pub use error::CliError;

use hours::{HoursArgs, run_hours_with};
use link::{LinkArgs, run_link_with};
use rank::{RankArgs, run_rank_with};

pub(crate) const ARG_RANK_INPUT: &str = "input";
pub(crate) const ARG_RANK_TOP: &str = "top";
pub(crate) const ARG_RANK_OUTPUT: &str = "output";
pub(crate) const ARG_RANK_OUTPUT_DIR: &str = "output-dir";
pub(crate) const ENV_RANK_INPUT: &str = "GASTRO_CMDS_RANK_INPUT";

pub(crate) const ARG_LINK_INPUT: &str = "input";
pub(crate) const ARG_LINK_ORIGIN: &str = "origin";
pub(crate) const ARG_LINK_MODE: &str = "mode";
pub(crate) const ENV_LINK_INPUT: &str = "GASTRO_CMDS_LINK_INPUT";
pub(crate) const ENV_LINK_ORIGIN: &str = "GASTRO_CMDS_LINK_ORIGIN";

/// Run the CLI with the current process arguments and environment.
///
/// Command output goes to standard output.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Rank(args) => run_rank_with(args, writer),
        Command::Hours(args) => run_hours_with(&args, writer),
        Command::Link(args) => run_link_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "gastro",
    about = "Rank restaurants and plan a gastronomic route",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank restaurant records and keep the best few.
    Rank(RankArgs),
    /// Format free-text opening hours lines.
    Hours(HoursArgs),
    /// Build a directions link through a ranked list.
    Link(LinkArgs),
}

/// Write `lines` to `writer`, one per line.
pub(crate) fn write_lines<I>(writer: &mut dyn Write, lines: I) -> Result<(), CliError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
