//! Capability-based file helpers for population inputs and report outputs.
//!
//! Paths arrive from the command line as UTF-8 strings, so every helper takes
//! a [`Utf8Path`] and resolves it against an ambient `cap-std` directory.
#![forbid(unsafe_code)]

use std::io;
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open `path` for reading.
///
/// # Errors
/// Returns the underlying IO error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create or truncate `path`, creating missing parent directories first.
///
/// # Errors
/// Returns an IO error when a directory or the file cannot be created.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    dir.create(name.as_str())
}

/// Report whether `path` names an existing regular file.
///
/// # Errors
/// Returns an IO error when the parent directory cannot be opened or the
/// metadata lookup fails for a reason other than absence.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    match dir.metadata(name.as_str()) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Create every missing directory above `path`.
///
/// # Errors
/// Returns an IO error when a directory cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }
    let (root, relative) = split_anchor(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    root.create_dir_all(&relative)
}

fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split `dir` into an openable anchor (root, drive or `.`) and the
/// remaining relative components, since `cap-std` refuses absolute paths.
fn split_anchor(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_dir = dir.as_std_path();
    let anchor = match std_dir.components().next() {
        Some(Component::Prefix(prefix)) => {
            let drive = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(drive).join(std::path::MAIN_SEPARATOR.to_string())
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string()),
        _ => Utf8PathBuf::from("."),
    };
    let relative = if anchor.as_str() == "." {
        dir.to_path_buf()
    } else {
        let stripped = std_dir
            .strip_prefix(anchor.as_std_path())
            .map_err(|_| io::Error::other(format!("cannot strip {anchor} from {dir}")))?;
        Utf8PathBuf::from_path_buf(stripped.to_path_buf())
            .map_err(|_| io::Error::other("non-UTF-8 directory path"))?
    };
    let root = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    Ok((root, relative))
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};

    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp dir")
    }

    #[rstest]
    fn creates_nested_output_and_reads_it_back(temp_dir: TempDir) {
        let path = utf8(&temp_dir).join("reports/2024/matches.txt");
        let mut file = create_utf8_file(&path).expect("create report");
        file.write_all(b"Optimal matches").expect("write report");
        drop(file);

        assert!(file_is_file(&path).expect("stat report"));
        let mut contents = String::new();
        open_utf8_file(&path)
            .expect("open report")
            .read_to_string(&mut contents)
            .expect("read report");
        assert_eq!(contents, "Optimal matches");
    }

    #[rstest]
    fn missing_file_is_not_a_file(temp_dir: TempDir) {
        let path = utf8(&temp_dir).join("absent.json");
        assert!(!file_is_file(&path).expect("stat missing"));
        assert!(open_utf8_file(&path).is_err());
    }

    #[rstest]
    fn directory_is_not_a_file(temp_dir: TempDir) {
        let path = utf8(&temp_dir).join("nested");
        std::fs::create_dir(path.as_std_path()).expect("create dir");
        assert!(!file_is_file(&path).expect("stat dir"));
    }

    #[rstest]
    fn bare_file_name_needs_no_parent() {
        assert!(ensure_parent_dir(Utf8Path::new("report.txt")).is_ok());
    }
}
