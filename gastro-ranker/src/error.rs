//! Errors raised while persisting ranked lists.
#![forbid(unsafe_code)]

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while writing a top list to disk.
#[derive(Debug, Error)]
pub enum TopListError {
    /// Creating the output file or its parent directories failed.
    #[error("failed to create top list file at {path}")]
    CreateFile {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: io::Error,
    },
    /// Serialising the ranked results failed.
    #[error("failed to serialise top list for {path}")]
    Serialise {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing or flushing the serialised list failed.
    #[error("failed to write top list to {path}")]
    WriteFile {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: io::Error,
    },
}
