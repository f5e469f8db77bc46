//! Notebook discovery
//!
//! This module contains functions for finding the notebooks of a category.

use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use log::{debug, warn};

use crate::category::Category;
use crate::constants::WILDCARD;
use crate::errors::{Result, file_operation_error, glob_pattern_error, invalid_filename_error};
use crate::utils::is_hidden_file;

/// Directory holding the notebooks of a category
pub fn category_directory(input_root: &Path, category: Category) -> PathBuf {
    input_root.join(category.directory_name())
}

/// Builds the glob pattern matching the notebooks of a category
///
/// The directory part is escaped, so only the file name part acts as a
/// pattern.
///
/// # Errors
/// Returns an error if the directory is not valid Unicode
pub fn notebook_pattern(input_root: &Path, category: Category, extension: &str) -> Result<String> {
    let directory = category_directory(input_root, category);
    let directory_str = directory
        .to_str()
        .ok_or_else(|| invalid_filename_error(directory.clone()))?;

    let file_pattern = format!("{WILDCARD}.{}", Pattern::escape(extension));
    let pattern = Path::new(&Pattern::escape(directory_str)).join(file_pattern);

    pattern
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_filename_error(pattern.clone()))
}

/// Finds the notebooks of a category
///
/// The search is not recursive and hidden files are skipped. Files are
/// returned in listing order. A missing category directory yields no
/// notebooks.
///
/// # Errors
/// Returns an error if the pattern is invalid or a directory entry cannot be read
pub fn discover_notebooks(
    input_root: &Path,
    category: Category,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let directory = category_directory(input_root, category);
    if !directory.is_dir() {
        warn!(
            "Notebook directory for '{}' does not exist: {}",
            category,
            directory.display()
        );
    }

    let pattern = notebook_pattern(input_root, category, extension)?;
    debug!("Scanning for notebooks matching {pattern}");

    let notebooks: Vec<PathBuf> = glob(&pattern)
        .map_err(|e| glob_pattern_error(e, &pattern))?
        .map(|entry| {
            entry.map_err(|e| {
                let path = e.path().to_path_buf();
                file_operation_error(e.into_error(), path, "access")
            })
        })
        .collect::<Result<Vec<PathBuf>>>()?
        .into_iter()
        .filter(|path| !is_hidden_file(path))
        .filter(|path| path.is_file())
        .collect();

    debug!("Found {} notebooks for '{}'", notebooks.len(), category);

    Ok(notebooks)
}
