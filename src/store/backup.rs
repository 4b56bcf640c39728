//! Filesystem backup of raw uploads.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::logging::debug;

use super::BlobStore;
use super::error::StoreError;

const PARTIAL_SUFFIX: &str = ".partial";

/// Stores each blob as one file directly under `root`.
///
/// Keys are plain file names; anything that could resolve outside `root`
/// (separators, `..`, empty keys) is rejected.
#[derive(Debug, Clone)]
pub struct DirBlobStore {
    root: PathBuf,
}

impl DirBlobStore {
    /// Use `root` as the backup directory, creating it if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let escapes = key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\', '\0'])
            || Path::new(key).is_absolute();
        if escapes {
            return Err(StoreError::PathEscapesRoot(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

impl BlobStore for DirBlobStore {
    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        // Each writer gets its own sibling; the rename replaces `path` atomically.
        let mut partial = tempfile::Builder::new()
            .prefix(".")
            .suffix(PARTIAL_SUFFIX)
            .tempfile_in(&self.root)?;
        partial.write_all(bytes)?;
        partial.as_file().sync_all()?;
        partial
            .persist(&path)
            .map_err(|err| StoreError::Io(err.error))?;
        debug!(key = key, bytes = bytes.len(), "blob backed up");
        Ok(())
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if name.starts_with(prefix) && !name.ends_with(PARTIAL_SUFFIX) {
                keys.push(name);
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.path_for(key)?;
        fs::read(&path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => StoreError::BlobNotFound(key.to_string()),
            _ => StoreError::Io(err),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Barrier};

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_put_get_list() -> Result<(), StoreError> {
        let dir = TempDir::new()?;
        let blobs = DirBlobStore::new(dir.path().join("backup"))?;

        blobs.put("save-BB.sav", b"second")?;
        blobs.put("save-AA.sav", b"first")?;
        blobs.put("other.bin", b"ignored")?;

        assert_eq!(blobs.list("save-")?, vec!["save-AA.sav", "save-BB.sav"]);
        assert_eq!(blobs.list("")?.len(), 3);
        assert_eq!(blobs.get("save-AA.sav")?, b"first");

        blobs.put("save-AA.sav", b"replaced")?;
        assert_eq!(blobs.get("save-AA.sav")?, b"replaced");
        assert_eq!(blobs.list("save-")?.len(), 2);
        Ok(())
    }

    #[test]
    fn test_missing_blob() -> Result<(), StoreError> {
        let dir = TempDir::new()?;
        let blobs = DirBlobStore::new(dir.path())?;
        assert!(matches!(
            blobs.get("nope.sav"),
            Err(StoreError::BlobNotFound(key)) if key == "nope.sav"
        ));
        Ok(())
    }

    #[test]
    fn test_rejects_keys_outside_root() -> Result<(), StoreError> {
        let dir = TempDir::new()?;
        let blobs = DirBlobStore::new(dir.path().join("backup"))?;

        for key in ["", "..", "../escape.sav", "nested/key.sav", "/etc/passwd"] {
            assert!(
                matches!(blobs.put(key, b"x"), Err(StoreError::PathEscapesRoot(_))),
                "key {:?} should be rejected",
                key
            );
        }
        assert!(!dir.path().join("escape.sav").exists());
        Ok(())
    }

    #[test]
    fn test_parallel_puts_of_one_key() -> Result<(), StoreError> {
        let dir = TempDir::new()?;
        let blobs = Arc::new(DirBlobStore::new(dir.path())?);
        let blob = vec![0x5A; 8192];

        for _ in 0..10 {
            let barrier = Arc::new(Barrier::new(8));
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let (blobs, barrier, blob) = (blobs.clone(), barrier.clone(), blob.clone());
                    std::thread::spawn(move || {
                        barrier.wait();
                        blobs.put("save-AA.sav", &blob)
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap()?;
            }
        }

        assert_eq!(blobs.get("save-AA.sav")?, blob);
        // No temporary siblings are left behind.
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }
}
