//! Revision input sources.
//!
//! - a text file given on the command line
//! - the built-in samples otherwise

use crate::model::error::InputError;
use crate::model::Revision;
use std::path::PathBuf;

pub mod file;

pub use file::FileSource;

/// Where the revision list comes from.
#[derive(Debug)]
pub enum InputSource {
    /// A parsed text file.
    File(FileSource),
    /// [`Revision::samples`].
    Samples,
}

impl InputSource {
    /// Short label for the status bar.
    pub fn label(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Samples => "samples".to_string(),
        }
    }

    /// Consume the source and return its revisions.
    pub fn into_revisions(self) -> Vec<Revision> {
        match self {
            InputSource::File(f) => f.into_revisions(),
            InputSource::Samples => Revision::samples(),
        }
    }
}

/// Pick the input source.
///
/// A file path is read eagerly; no path means the built-in samples.
///
/// # Errors
///
/// Propagates [`FileSource::new`] failures.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Samples),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_uses_samples() {
        let source = detect_input_source(None).expect("samples never fail");
        assert_eq!(source.label(), "samples");
        assert_eq!(source.into_revisions(), Revision::samples());
    }

    #[test]
    fn missing_file_propagates_error() {
        let result = detect_input_source(Some(PathBuf::from("/nonexistent/vctui/revs.txt")));
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }
}
