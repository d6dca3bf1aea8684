//! Error types for the vctui shell.
//!
//! The render core has no failure modes of its own. Everything that can go
//! wrong lives at the edges: reading input, loading configuration, setting
//! up logging and talking to the terminal.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from the shell
//!   - [`InputError`] - revision file reading failures
//!   - [`ConfigError`] - config file and palette failures
//!   - [`LoggingError`] - tracing subscriber setup failures
//!   - `std::io::Error` - terminal failures

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Every domain error converts into `AppError` via `From`, so the shell can
/// propagate with `?`.
///
/// ```
/// use vctui::model::error::{AppError, InputError};
///
/// fn open() -> Result<(), InputError> {
///     Err(InputError::FileNotFound { path: "missing.txt".into() })
/// }
///
/// fn run() -> Result<(), AppError> {
///     open()?;
///     Ok(())
/// }
/// assert!(run().unwrap_err().to_string().contains("missing.txt"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the revision list.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, drawing or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading revision input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given file does not exist.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use vctui::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound { path: PathBuf::from("/tmp/missing.log") };
    /// assert!(err.to_string().contains("/tmp/missing.log"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The input contained no revisions.
    #[error("No revisions found in {path}")]
    Empty {
        /// Path that was read.
        path: PathBuf,
    },

    /// Any other I/O failure while reading.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
