use relative_path::{RelativePath, RelativePathBuf};
use std::path::PathBuf;

use crate::io::{self, IoError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Content not found: {0}")]
    NotFound(String),
    #[error("Invalid content path: {0}")]
    InvalidPath(String),
    #[error("Content store failed: {0}")]
    Backend(String),
}

impl From<IoError> for StoreError {
    fn from(err: IoError) -> Self {
        match err {
            IoError::NotFound(path) => StoreError::NotFound(path.display().to_string()),
            IoError::InvalidPath(path) => StoreError::InvalidPath(path),
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Where prompts are read from and finished pages are written to.
///
/// Paths are relative to the store's root. `store` reports success as a
/// flag: a failed write is logged by the implementation and the caller
/// decides whether that is fatal.
pub trait ContentStore {
    fn fetch(&self, path: &RelativePath) -> Result<String, StoreError>;

    fn store(&self, path: &RelativePath, content: &str, message: &str) -> bool;

    /// Files directly inside `folder`, sorted. A missing folder is empty.
    fn list(&self, folder: &RelativePath) -> Result<Vec<RelativePathBuf>, StoreError>;
}

/// A [`ContentStore`] backed by a local directory of static files.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentStore for FsContentStore {
    fn fetch(&self, path: &RelativePath) -> Result<String, StoreError> {
        Ok(io::read_file(path, &self.root)?)
    }

    fn store(&self, path: &RelativePath, content: &str, message: &str) -> bool {
        match io::write_file(path, &self.root, content) {
            Ok(()) => {
                log::info!("{message} ({} bytes)", content.len());
                true
            }
            Err(e) => {
                log::warn!("store failed for {path}: {e}");
                false
            }
        }
    }

    fn list(&self, folder: &RelativePath) -> Result<Vec<RelativePathBuf>, StoreError> {
        Ok(io::list_files(folder, &self.root)?)
    }
}
