//! File-based revision source.

use crate::model::error::InputError;
use crate::model::Revision;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Revisions read once from a text file.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    revisions: Vec<Revision>,
}

impl FileSource {
    /// Read and parse `path`.
    ///
    /// # Errors
    ///
    /// `FileNotFound` for a missing path, `Empty` if the file holds no
    /// revisions, `Io` for other read failures.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path)?;
        let revisions = Revision::parse_all(&text);
        if revisions.is_empty() {
            return Err(InputError::Empty {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), count = revisions.len(), "loaded revisions");
        Ok(Self {
            path: path.to_path_buf(),
            revisions,
        })
    }

    /// Path the revisions came from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Take the parsed revisions.
    pub fn into_revisions(self) -> Vec<Revision> {
        self.revisions
    }
}
