use glob::PatternError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::category::Category;

/// Custom error type for the notebook renderer
#[derive(Debug)]
pub enum Error {
    /// The requested category is not one of the recognised ones
    InvalidCategory { given: String },
    /// One or more conversions exited with a non-zero status
    BatchConversionFailed { failed: Vec<PathBuf> },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to glob pattern matching
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCategory { given } => {
                let names: Vec<String> = Category::ALL
                    .iter()
                    .map(|category| format!("'{category}'"))
                    .collect();
                write!(
                    f,
                    "Invalid notebook group given: '{given}'. Try {}",
                    names.join(", ")
                )
            }
            Error::BatchConversionFailed { failed } => {
                let paths: Vec<String> = failed
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect();
                write!(f, "The following notebooks failed: [{}]", paths.join(", "))
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::GlobPattern { pattern, .. } => {
                write!(f, "Invalid glob pattern: {pattern}")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::GlobPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the notebook renderer
///
/// # Examples
/// ```
/// use nb_render::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an invalid category error
pub fn invalid_category_error(given: &str) -> Error {
    Error::InvalidCategory {
        given: given.to_string(),
    }
}

/// Helper function to create a batch conversion failure
pub fn batch_conversion_failed_error(failed: Vec<PathBuf>) -> Error {
    Error::BatchConversionFailed { failed }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
