//! File operation functionality
//!
//! This module contains the directory provisioning done before a conversion.

use std::fs::create_dir_all;
use std::path::Path;

use log::debug;

use crate::errors::{Result, file_operation_error, generic_error};

/// Makes sure the directory an output file goes to exists
///
/// An existing directory is left as is, so provisioning the same directory
/// repeatedly succeeds.
///
/// # Errors
/// Returns an error if the directory cannot be created, for instance because a
/// regular file already occupies its path
pub fn ensure_output_directory(output: &Path) -> Result<()> {
    let directory = output.parent().ok_or_else(|| {
        generic_error(&format!(
            "Output path {} has no parent directory",
            output.display()
        ))
    })?;

    if directory.as_os_str().is_empty() || directory.is_dir() {
        return Ok(());
    }

    debug!("Creating directory {}", directory.display());
    create_dir_all(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "create directory"))
}
