//! Hours command implementation.

use std::io::Write;

use clap::Parser;
use gastro_ranker::format_hours;

use crate::CliError;

/// CLI arguments for the `hours` subcommand.
#[derive(Debug, Clone, Parser, Default)]
#[command(
    name = "hours",
    about = "Format free-text opening hours lines",
    long_about = "Rewrite each weekday line into `- Day: HH:MM AM - HH:MM PM`. \
                 Lines that do not follow that shape only get spacing fixes."
)]
pub(crate) struct HoursArgs {
    /// Weekday lines such as "Mon: 09:00AM-05:00PM".
    #[arg(value_name = "line", required = true)]
    pub(crate) lines: Vec<String>,
}

pub(crate) fn run_hours_with(args: &HoursArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    crate::write_lines(writer, format_hours(&args.lines))
}
