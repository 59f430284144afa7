//! Rank command implementation.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use gastro_core::{RankedResult, RestaurantRecord};
use gastro_ranker::{DEFAULT_TOP_N, rank_top_n, top_list_file_name, write_top_list_file};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_RANK_INPUT, ARG_RANK_OUTPUT, ARG_RANK_OUTPUT_DIR, ARG_RANK_TOP, CliError, ENV_RANK_INPUT,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Rank restaurant records by rating weighted with review \
                 volume. The input is a JSON array of places details \
                 payloads. The ranked list is printed as JSON unless an \
                 output file or directory is given.",
    about = "Rank restaurant records and keep the best few"
)]
#[ortho_config(prefix = "GASTRO")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of restaurant records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Number of restaurants to keep.
    #[arg(long = ARG_RANK_TOP, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Write the ranked list to this file instead of standard output.
    #[arg(long = ARG_RANK_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Write `<stem>-top<n>.<ext>` into this directory.
    #[arg(long = ARG_RANK_OUTPUT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) output_dir: Option<Utf8PathBuf>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Where the ranked list goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RankOutput {
    Stdout,
    File(Utf8PathBuf),
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the restaurant records.
    pub(crate) input: Utf8PathBuf,
    /// Number of restaurants kept.
    pub(crate) top: usize,
    /// Destination of the ranked list.
    pub(crate) output: RankOutput,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.input, ARG_RANK_INPUT)
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_RANK_INPUT,
            env: ENV_RANK_INPUT,
        })?;
        let top = args.top.unwrap_or(DEFAULT_TOP_N);
        let output = match (args.output, args.output_dir) {
            (Some(_), Some(_)) => return Err(CliError::ConflictingOutputs),
            (Some(path), None) => RankOutput::File(path),
            (None, Some(dir)) => RankOutput::File(dir.join(top_list_file_name(&input, top))),
            (None, None) => RankOutput::Stdout,
        };
        Ok(Self { input, top, output })
    }
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match gastro_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let records = load_records(&config.input)?;
    let ranked = rank_top_n(&records, config.top);
    info!(
        "kept {} of {} restaurants from {}",
        ranked.len(),
        records.len(),
        config.input
    );
    match &config.output {
        RankOutput::Stdout => write_ranked(writer, &ranked),
        RankOutput::File(path) => {
            write_top_list_file(path, &ranked)?;
            crate::write_lines(writer, [path.as_str()])
        }
    }
}

/// Loads a JSON array of [`RestaurantRecord`] values from disk.
pub(crate) fn load_records(path: &Utf8Path) -> Result<Vec<RestaurantRecord>, CliError> {
    let payload = gastro_fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&payload).map_err(|source| CliError::ParseRecords {
        path: path.to_path_buf(),
        source,
    })
}

fn write_ranked(writer: &mut dyn Write, ranked: &[RankedResult]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(ranked).map_err(CliError::SerialiseOutput)?;
    crate::write_lines(writer, [payload])
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
