/// Opening a path as a regular file, with directories reported as a distinct outcome.
use std::fs::File;
use std::io;
use std::path::Path;

use super::errors::DumpError;

/// Result of trying to open a path for reading.
#[derive(Debug)]
pub enum OpenOutcome {
    /// Opened and not a directory; ready to read.
    File(File),
    /// The path names a directory.
    IsDirectory,
    /// Anything else.
    Failed(DumpError),
}

/// Try to open `path` for binary reading.
///
/// On Linux `open(2)` happily returns a handle for a directory, so the handle
/// is stat'ed before it is handed out. Platforms that refuse to open
/// directories report `ErrorKind::IsADirectory` instead, which maps to the
/// same outcome.
#[must_use]
pub fn open_regular(path: &Path) -> OpenOutcome {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::IsADirectory => return OpenOutcome::IsDirectory,
        Err(source) => {
            return OpenOutcome::Failed(DumpError::Open {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match file.metadata() {
        Ok(meta) if meta.is_dir() => OpenOutcome::IsDirectory,
        Ok(_) => OpenOutcome::File(file),
        Err(source) => OpenOutcome::Failed(DumpError::Metadata {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_file_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f");
        std::fs::write(&path, b"data").unwrap();
        assert!(matches!(open_regular(&path), OpenOutcome::File(_)));
    }

    #[test]
    fn test_directory_is_distinct_outcome() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(open_regular(dir.path()), OpenOutcome::IsDirectory));
    }

    #[test]
    fn test_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope");
        match open_regular(&path) {
            OpenOutcome::Failed(DumpError::Open { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected open failure, got {other:?}"),
        }
    }
}
