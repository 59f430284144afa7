//! Unit tests for the hours command.

use rstest::rstest;

use super::helpers::{parse_cli, run_captured};
use super::*;

#[rstest]
fn hours_prints_one_line_per_input() {
    let (outcome, stdout) = run_captured([
        "gastro",
        "hours",
        "Mon: 09:00AM\u{2013}05:00PM",
        "Fri: closed",
    ]);

    outcome.expect("hours should succeed");
    assert_eq!(stdout, "- Mon: 09:00 AM - 05:00 PM\n- Fri: closed\n");
}

#[rstest]
fn hours_requires_at_least_one_line() {
    match parse_cli(["gastro", "hours"]) {
        Err(CliError::ArgumentParsing(_)) => {}
        Err(other) => panic!("expected ArgumentParsing, found {other:?}"),
        Ok(command) => panic!("expected a parse failure, found {command:?}"),
    }
}
