//! Test helpers for staging record files in temporary workspaces.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use gastro_core::RestaurantRecord;
use gastro_core::test_support::sample_record;
use tempfile::TempDir;

use super::*;

/// Temporary directory that lives as long as the paths derived from it.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    let mut file = gastro_fs::create_file(path).expect("create file");
    file.write_all(contents).expect("write file");
}

/// Candidates where review volume decides the order: B, A, C; D is unrated.
pub(super) fn sample_records() -> Vec<RestaurantRecord> {
    vec![
        sample_record("A", Some(5.0), Some(100)),
        sample_record("B", Some(4.0), Some(400)),
        sample_record("C", Some(3.0), Some(900)),
        sample_record("D", None, Some(10)),
    ]
}

pub(super) fn write_records(path: &Utf8Path, records: &[RestaurantRecord]) {
    let payload = serde_json::to_vec_pretty(records).expect("serialize records");
    write_utf8(path, &payload);
}

pub(super) fn parse_cli<I, S>(argv: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(argv)
        .map(|cli| cli.command)
        .map_err(CliError::from)
}

pub(super) fn run_captured<I, S>(argv: I) -> (Result<(), CliError>, String)
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    let mut stdout = Vec::new();
    let outcome = parse_cli(argv).and_then(|command| dispatch(command, &mut stdout));
    let printed = String::from_utf8(stdout).expect("stdout utf-8");
    (outcome, printed)
}
