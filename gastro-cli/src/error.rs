//! Error types emitted by the gastro CLI.
//!
//! Variants carry paths and error sources only, so `Result<_, CliError>`
//! stays cheap to return from every command helper.

use std::sync::Arc;

use camino::Utf8PathBuf;
use gastro_core::TravelModeParseError;
use gastro_ranker::TopListError;
use thiserror::Error;

/// Errors emitted by the gastro CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// `--output` and `--output-dir` were both supplied.
    #[error("--output and --output-dir cannot be combined")]
    ConflictingOutputs,
    /// Reading an input file failed.
    #[error("failed to read {path:?}: {source}")]
    ReadInput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Restaurant records JSON could not be decoded.
    #[error("failed to parse restaurant records JSON at {path:?}: {source}")]
    ParseRecords {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Ranked list JSON could not be decoded.
    #[error("failed to parse ranked list JSON at {path:?}: {source}")]
    ParseRankedList {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The configured travel mode is not recognised.
    #[error(transparent)]
    InvalidTravelMode(#[from] TravelModeParseError),
    /// No ranked entry carried an address or a name.
    #[error("ranked list at {path:?} has no locatable restaurants")]
    NoStops { path: Utf8PathBuf },
    /// Persisting the top list failed.
    #[error(transparent)]
    WriteTopList(#[from] TopListError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
