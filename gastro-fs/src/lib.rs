//! UTF-8 file helpers built on `cap-std` and `camino`.
//!
//! Every helper resolves a directory handle with ambient authority first and
//! then works relative to it, so callers pass plain paths while file access
//! stays capability-scoped.
#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Read a whole UTF-8 file into a string.
pub fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Create (or truncate) the file at `path`, creating missing parent
/// directories first.
pub fn create_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    create_parent_dirs(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    dir.create(name)
}

/// Open the directory containing `path` and return it with the final path
/// component.
pub fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} does not name a file"),
        )
    })?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Create every missing directory above `path`.
pub fn create_parent_dirs(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent().filter(|dir| !dir.as_str().is_empty()) else {
        return Ok(());
    };
    let (anchor, relative) = split_anchor(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?.create_dir_all(&relative)
}

/// Whether `path` names a regular file.
///
/// `Ok(false)` means something other than a file exists at `path`. A missing
/// file or parent directory surfaces as an `io::ErrorKind::NotFound` error.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Split a directory path into the directory it is anchored at (a root,
/// a drive prefix, or `.`) and the remainder relative to that anchor.
///
/// `cap-std` refuses absolute paths relative to a directory handle, so
/// absolute paths are opened from their root instead.
#[must_use]
pub fn split_anchor(dir: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut anchor = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in dir.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => {
                anchor.push(component.as_str());
            }
            Utf8Component::CurDir | Utf8Component::ParentDir | Utf8Component::Normal(_) => {
                relative.push(component.as_str());
            }
        }
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    (anchor, relative)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use camino::{Utf8Path, Utf8PathBuf};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    use super::{create_file, is_regular_file, read_to_string, split_anchor};

    #[fixture]
    fn workdir() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp dir");
        (temp, root)
    }

    #[rstest]
    fn creates_nested_file_and_reads_it_back(workdir: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workdir;
        let path = root.join("out/deeper/top.json");
        let mut file = create_file(&path).expect("create file");
        file.write_all(b"[]\n").expect("write file");
        drop(file);

        assert!(is_regular_file(&path).expect("inspect file"));
        assert_eq!(read_to_string(&path).expect("read file"), "[]\n");
    }

    #[rstest]
    #[case("absent.json")]
    #[case("absent/nested.json")]
    fn missing_paths_report_not_found(
        workdir: (TempDir, Utf8PathBuf),
        #[case] relative: &str,
    ) {
        let (_guard, root) = workdir;
        let err = is_regular_file(&root.join(relative)).expect_err("missing path should error");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[rstest]
    fn directories_are_not_files(workdir: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workdir;
        assert!(!is_regular_file(&root).expect("inspect dir"));
    }

    #[rstest]
    #[case("/srv/data", "/", "srv/data")]
    #[case("data/out", ".", "data/out")]
    #[case("/", "/", "")]
    fn splits_paths_at_their_anchor(
        #[case] input: &str,
        #[case] anchor: &str,
        #[case] relative: &str,
    ) {
        let (found_anchor, found_relative) = split_anchor(Utf8Path::new(input));
        assert_eq!(found_anchor, Utf8PathBuf::from(anchor));
        assert_eq!(found_relative, Utf8PathBuf::from(relative));
    }
}
