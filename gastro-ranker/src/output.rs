//! Persist ranked lists next to their inputs.
#![forbid(unsafe_code)]

use std::io::{BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use gastro_core::RankedResult;
use log::info;

use crate::TopListError;

/// Stem used when the input path has no usable file stem.
const FALLBACK_STEM: &str = "restaurants";

/// Name of the top list derived from an input file: `<stem>-top<n>.<ext>`.
///
/// # Examples
/// ```
/// use camino::Utf8Path;
/// use gastro_ranker::top_list_file_name;
///
/// assert_eq!(top_list_file_name(Utf8Path::new("data/malaga.json"), 3), "malaga-top3.json");
/// assert_eq!(top_list_file_name(Utf8Path::new("malaga"), 5), "malaga-top5");
/// ```
#[must_use]
pub fn top_list_file_name(input: &Utf8Path, n: usize) -> String {
    let stem = input
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .unwrap_or(FALLBACK_STEM);
    input.extension().map_or_else(
        || format!("{stem}-top{n}"),
        |ext| format!("{stem}-top{n}.{ext}"),
    )
}

/// Path of the top list written beside `input`.
#[must_use]
pub fn top_list_path(input: &Utf8Path, n: usize) -> Utf8PathBuf {
    input.with_file_name(top_list_file_name(input, n))
}

/// Write `results` to `path` as pretty-printed JSON followed by a newline.
///
/// Missing parent directories are created.
///
/// # Errors
/// Returns [`TopListError`] when the file cannot be created, serialised, or
/// flushed.
pub fn write_top_list_file(path: &Utf8Path, results: &[RankedResult]) -> Result<(), TopListError> {
    let file = gastro_fs::create_file(path).map_err(|source| TopListError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, results).map_err(|source| {
        TopListError::Serialise {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| TopListError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
    info!("wrote {} ranked restaurants to {path}", results.len());
    Ok(())
}
