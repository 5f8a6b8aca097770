use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Handle to the single backing file for a persisted history document.
///
/// Created once and never reassigned. Reads and writes go through the
/// committed path only; in-flight replacements live in sibling temporary
/// files until the atomic rename.
#[derive(Debug)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    /// Open a history file handle, creating parent directories as needed.
    ///
    /// The file itself is not created; a never-committed document simply
    /// reads as `None`.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if path.file_name().is_none() {
            return Err(StoreError::InvalidPath(path));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    /// Path of the committed document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the committed document.
    ///
    /// Returns `Ok(None)` if no document has ever been committed.
    pub fn read(&self) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                debug!(path = %self.path.display(), len = bytes.len(), "read history document");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomically replace the committed document with `bytes`.
    ///
    /// The new content is staged in a sibling temporary file, flushed and
    /// fsynced, then renamed over the target. On any failure the staged
    /// file is discarded and the previously committed document remains
    /// readable in full.
    pub fn replace(&self, bytes: &[u8]) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        // NamedTempFile deletes the staged file on drop, so every early
        // return below leaves no partial state behind.
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(bytes)?;
        staged.flush()?;
        staged.as_file().sync_all()?;

        staged
            .persist(&self.path)
            .map_err(|e| StoreError::Commit(e.error))?;

        debug!(path = %self.path.display(), len = bytes.len(), "committed history document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_committed_document_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let file = HistoryFile::open(dir.path().join("history.json")).unwrap();
        assert!(file.read().unwrap().is_none());
    }

    #[test]
    fn replace_then_read_returns_committed_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let file = HistoryFile::open(dir.path().join("history.json")).unwrap();

        file.replace(b"[1,2,3]").unwrap();
        assert_eq!(file.read().unwrap().unwrap(), b"[1,2,3]");
    }

    #[test]
    fn replace_overwrites_previous_document_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let file = HistoryFile::open(dir.path().join("history.json")).unwrap();

        file.replace(b"a much longer first document").unwrap();
        file.replace(b"short").unwrap();
        assert_eq!(file.read().unwrap().unwrap(), b"short");
    }

    #[test]
    fn open_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("history.json");
        let file = HistoryFile::open(&nested).unwrap();

        file.replace(b"[]").unwrap();
        assert_eq!(file.read().unwrap().unwrap(), b"[]");
    }

    #[test]
    fn open_rejects_path_without_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let err = HistoryFile::open(dir.path().join("..")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidPath(_)));
    }

    #[test]
    fn crashed_partial_write_is_not_observable() {
        let dir = tempfile::tempdir().unwrap();
        let file = HistoryFile::open(dir.path().join("history.json")).unwrap();
        file.replace(b"committed document").unwrap();

        // Simulate a crash mid-write: a staged sibling file exists but the
        // rename never happened.
        fs::write(dir.path().join(".tmpXYZ123"), b"partial gar").unwrap();

        assert_eq!(file.read().unwrap().unwrap(), b"committed document");
    }

    #[test]
    fn failed_staging_surfaces_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("gone");
        let file = HistoryFile::open(nested.join("history.json")).unwrap();

        // Remove the parent directory after open so staging cannot start.
        fs::remove_dir_all(&nested).unwrap();
        let err = file.replace(b"doomed").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn failed_commit_preserves_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("history.json");
        let file = HistoryFile::open(&target).unwrap();
        file.replace(b"first").unwrap();

        // Force the rename to fail by turning the target into a non-empty
        // directory at a sibling handle.
        let blocked = HistoryFile::open(dir.path().join("blocked")).unwrap();
        fs::create_dir(dir.path().join("blocked")).unwrap();
        fs::write(dir.path().join("blocked").join("x"), b"x").unwrap();
        let err = blocked.replace(b"second").unwrap_err();
        assert!(matches!(err, StoreError::Commit(_)));

        // The original committed document is untouched.
        assert_eq!(file.read().unwrap().unwrap(), b"first");
    }
}
