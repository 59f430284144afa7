//! Focused unit tests covering the link and hours commands.

use camino::Utf8PathBuf;
use gastro_core::{TravelMode, TravelModeParseError};
use gastro_ranker::rank_top_n;
use rstest::rstest;

use super::helpers::{Workspace, run_captured, sample_records, write_utf8};
use super::*;
use crate::link::{LinkConfig, config_from_layers_for_test};

fn link_args(origin: Option<&str>, mode: Option<&str>) -> LinkArgs {
    LinkArgs {
        input: Some(Utf8PathBuf::from("malaga-top3.json")),
        origin: origin.map(str::to_owned),
        mode: mode.map(str::to_owned),
    }
}

#[rstest]
#[case(None)]
#[case(Some("   "))]
fn converting_link_without_origin_errors(#[case] origin: Option<&str>) {
    let err = LinkConfig::try_from(link_args(origin, None)).expect_err("origin is required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_LINK_ORIGIN);
            assert_eq!(env, ENV_LINK_ORIGIN);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(None, TravelMode::Walking)]
#[case(Some("driving"), TravelMode::Driving)]
#[case(Some(" Transit "), TravelMode::Transit)]
fn link_mode_defaults_to_walking(#[case] mode: Option<&str>, #[case] expected: TravelMode) {
    let config =
        LinkConfig::try_from(link_args(Some("Plaza Mayor"), mode)).expect("config should build");
    assert_eq!(config.mode, expected);
}

#[rstest]
fn unknown_mode_is_rejected() {
    let err = LinkConfig::try_from(link_args(Some("Plaza Mayor"), Some("teleport")))
        .expect_err("unknown mode should error");
    match err {
        CliError::InvalidTravelMode(TravelModeParseError(mode)) => assert_eq!(mode, "teleport"),
        other => panic!("expected InvalidTravelMode, found {other:?}"),
    }
}

#[rstest]
fn link_prints_round_trip_url() {
    let workspace = Workspace::new();
    let input = workspace.path("malaga-top2.json");
    let ranked = rank_top_n(&sample_records(), 2);
    write_utf8(
        &input,
        &serde_json::to_vec(&ranked).expect("serialize ranked list"),
    );

    let (outcome, stdout) = run_captured([
        "gastro",
        "link",
        input.as_str(),
        "--origin",
        "Plaza Mayor",
        "--mode",
        "bicycling",
    ]);

    outcome.expect("link should succeed");
    assert_eq!(
        stdout,
        "https://www.google.com/maps/dir/Plaza+Mayor/B+Addr/A+Addr/Plaza+Mayor/\
         ?travelmode=bicycling\n"
    );
}

#[rstest]
fn link_without_locatable_entries_errors() {
    let workspace = Workspace::new();
    let input = workspace.path("empty-top3.json");
    write_utf8(&input, b"[]");

    let (outcome, stdout) = run_captured([
        "gastro",
        "link",
        input.as_str(),
        "--origin",
        "Plaza Mayor",
    ]);

    match outcome.expect_err("empty list should error") {
        CliError::NoStops { path } => assert_eq!(path, input),
        other => panic!("expected NoStops, found {other:?}"),
    }
    assert!(stdout.is_empty());
}

#[rstest]
fn link_reports_invalid_ranked_list() {
    let workspace = Workspace::new();
    let input = workspace.path("broken.json");
    write_utf8(&input, b"[{\"name\": 3}]");

    let (outcome, _) = run_captured([
        "gastro",
        "link",
        input.as_str(),
        "--origin",
        "Plaza Mayor",
    ]);

    match outcome.expect_err("invalid list should error") {
        CliError::ParseRankedList { path, .. } => assert_eq!(path, input),
        other => panic!("expected ParseRankedList, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_reads_origin_from_environment() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "origin": "from file", "mode": "driving" }), None);
    composer.push_environment(json!({ "origin": "from env" }));
    composer.push_cli(json!({ "input": "top.json" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.origin, "from env");
    assert_eq!(config.mode, TravelMode::Driving);
    assert_eq!(config.input, Utf8PathBuf::from("top.json"));
}
