//! Filesystem helpers shared by every artifact writer.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ArtifactError, Result};

/// Whether something exists at `path`.
///
/// A missing path (or a missing parent) is `Ok(false)`; any other stat
/// failure, e.g. permission denied, is surfaced as an error.
pub fn file_exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ArtifactError::Stat {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Make sure the directory that will hold `file` exists.
pub fn ensure_parent_dir(file: impl AsRef<Path>) -> Result<()> {
    let dir = match file.as_ref().parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        // bare file name, lives in the working directory
        _ => return Ok(()),
    };

    if file_exists(dir)? {
        return Ok(());
    }

    debug!(dir = %dir.display(), "creating directory");
    fs::create_dir_all(dir).map_err(|e| ArtifactError::io("create directory", dir, e))
}

/// Open `file` for writing, replacing whatever was there.
///
/// An existing file is removed first; otherwise missing parent directories
/// are created. The handle is closed when dropped.
pub fn open_for_create_or_overwrite(file: impl AsRef<Path>) -> Result<File> {
    let file = file.as_ref();

    if file_exists(file)? {
        warn!(path = %file.display(), "overwriting existing file");
        fs::remove_file(file).map_err(|e| ArtifactError::io("remove", file, e))?;
    } else {
        ensure_parent_dir(file)?;
    }

    File::create(file).map_err(|e| ArtifactError::io("create", file, e))
}

/// Open an existing artifact for reading.
pub fn open_for_read(file: impl AsRef<Path>) -> Result<File> {
    let file = file.as_ref();
    File::open(file).map_err(|e| ArtifactError::io("open", file, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_parent_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("no").join("such").join("file.bin");

        assert!(!file_exists(&path).unwrap());
    }

    #[test]
    fn test_exists_after_open() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out").join("proof.bin");

        let f = open_for_create_or_overwrite(&path).unwrap();
        drop(f);

        assert!(file_exists(&path).unwrap());
    }

    #[test]
    fn test_ensure_parent_dir_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a").join("b").join("c").join("vk.sol");

        ensure_parent_dir(&path).unwrap();
        assert!(tmp.path().join("a/b/c").is_dir());
        assert!(!path.exists());

        // second call is a no-op
        ensure_parent_dir(&path).unwrap();
    }

    #[test]
    fn test_ensure_parent_dir_bare_name() {
        ensure_parent_dir("proof.bin").unwrap();
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("proof_solidity");

        let mut f = open_for_create_or_overwrite(&path).unwrap();
        f.write_all(b"a much longer first payload").unwrap();
        drop(f);

        let mut f = open_for_create_or_overwrite(&path).unwrap();
        f.write_all(b"second").unwrap();
        drop(f);

        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_open_for_read_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let err = open_for_read(tmp.path().join("missing")).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { op: "open", .. }));
    }

    #[test]
    fn test_stat_through_regular_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("proof.bin");
        fs::write(&file, b"not a directory").unwrap();
        let below_file = file.join("child");

        assert!(matches!(
            file_exists(&below_file),
            Err(ArtifactError::Stat { .. })
        ));
        assert!(matches!(
            ensure_parent_dir(below_file.join("vk.sol")),
            Err(ArtifactError::Stat { .. })
        ));
        assert!(matches!(
            open_for_create_or_overwrite(&below_file),
            Err(ArtifactError::Stat { .. })
        ));
    }
}
