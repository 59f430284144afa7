//! Link command implementation.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use gastro_core::{DirectionsLink, RankedResult, TravelMode};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::rank::require_existing;
use crate::{
    ARG_LINK_INPUT, ARG_LINK_MODE, ARG_LINK_ORIGIN, CliError, ENV_LINK_INPUT, ENV_LINK_ORIGIN,
};

/// CLI arguments for the `link` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "link",
    long_about = "Build a maps directions link that starts at the origin, \
                 visits every restaurant of a ranked list in order, and \
                 returns to the origin.",
    about = "Build a directions link through a ranked list"
)]
#[ortho_config(prefix = "GASTRO")]
pub(crate) struct LinkArgs {
    /// Path to a ranked list written by `gastro rank`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Address the route starts and ends at.
    #[arg(long = ARG_LINK_ORIGIN, value_name = "address")]
    #[serde(default)]
    pub(crate) origin: Option<String>,
    /// Travel mode: walking, driving, bicycling, or transit.
    #[arg(long = ARG_LINK_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<String>,
}

impl LinkArgs {
    pub(crate) fn into_config(self) -> Result<LinkConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        LinkConfig::try_from(merged)
    }
}

/// Resolved `link` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LinkConfig {
    pub(crate) input: Utf8PathBuf,
    pub(crate) origin: String,
    pub(crate) mode: TravelMode,
}

impl TryFrom<LinkArgs> for LinkConfig {
    type Error = CliError;

    fn try_from(args: LinkArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_LINK_INPUT,
            env: ENV_LINK_INPUT,
        })?;
        let origin = args
            .origin
            .filter(|origin| !origin.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_LINK_ORIGIN,
                env: ENV_LINK_ORIGIN,
            })?;
        let mode = args
            .mode
            .as_deref()
            .map(str::parse::<TravelMode>)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            input,
            origin,
            mode,
        })
    }
}

pub(crate) fn run_link_with(args: LinkArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.input, ARG_LINK_INPUT)?;
    let ranked = load_ranked_list(&config.input)?;
    let link = DirectionsLink::from_ranked(config.origin, &ranked).with_mode(config.mode);
    if link.stops().is_empty() {
        return Err(CliError::NoStops { path: config.input });
    }
    info!("linked {} stops from {}", link.stops().len(), config.input);
    crate::write_lines(writer, [link.to_url()])
}

/// Loads a ranked list previously written by the `rank` command.
pub(crate) fn load_ranked_list(path: &Utf8Path) -> Result<Vec<RankedResult>, CliError> {
    let payload = gastro_fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&payload).map_err(|source| CliError::ParseRankedList {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<LinkConfig, CliError> {
    let merged = LinkArgs::merge_from_layers(layers).map_err(CliError::from)?;
    LinkConfig::try_from(merged)
}
