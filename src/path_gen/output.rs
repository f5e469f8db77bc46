//! Output path derivation
//!
//! A rendered document keeps the name of the directory its notebook lives in
//! and the notebook's file stem; only the root and the extension change.

use std::path::{Path, PathBuf};

use log::trace;

use crate::errors::{Result, file_operation_error, invalid_filename_error};

/// Derives the destination of a rendered notebook
///
/// `rail/examples/core_examples/foo.ipynb` with output root `docs/rendered`
/// and format `rst` becomes `docs/rendered/core_examples/foo.rst`.
///
/// # Errors
/// Returns an error if the source has no file stem or no parent directory name
pub fn derive_output_path(source: &Path, output_root: &Path, target_format: &str) -> Result<PathBuf> {
    let stem = source
        .file_stem()
        .ok_or_else(|| invalid_filename_error(source.to_path_buf()))?;

    let subdirectory = source
        .parent()
        .and_then(Path::file_name)
        .ok_or_else(|| invalid_filename_error(source.to_path_buf()))?;

    // set_extension would replace the last dotted part of a stem like `x.v1`
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(target_format);
    let output = output_root.join(subdirectory).join(name);

    trace!("{} -> {}", source.display(), output.display());
    Ok(output)
}

/// Resolves a path against the current working directory
///
/// The converter interprets a relative output path against the notebook's
/// own directory, so it is always handed an absolute one.
///
/// # Errors
/// Returns an error if the current directory cannot be determined
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "resolve absolute path of"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output_path() {
        let output = derive_output_path(
            Path::new("rail/examples/core_examples/foo.ipynb"),
            Path::new("docs/rendered"),
            "rst",
        )
        .unwrap();
        assert_eq!(
            output,
            PathBuf::from("docs/rendered").join("core_examples").join("foo.rst")
        );
    }

    #[test]
    fn test_derive_output_path_keeps_inner_dots() {
        let output = derive_output_path(
            Path::new("rail/examples/estimation_examples/flux.to.mag.ipynb"),
            Path::new("out"),
            "html",
        )
        .unwrap();
        assert!(output.ends_with("estimation_examples/flux.to.mag.html"));
    }

    #[test]
    fn test_versioned_notebooks_get_distinct_outputs() {
        let first = derive_output_path(
            Path::new("rail/examples/core_examples/x.v1.ipynb"),
            Path::new("docs/rendered"),
            "rst",
        )
        .unwrap();
        let second = derive_output_path(
            Path::new("rail/examples/core_examples/x.v2.ipynb"),
            Path::new("docs/rendered"),
            "rst",
        )
        .unwrap();
        assert_eq!(
            first,
            PathBuf::from("docs/rendered").join("core_examples").join("x.v1.rst")
        );
        assert_ne!(first, second);
    }

    #[test]
    fn test_derive_output_path_requires_parent_directory() {
        let result = derive_output_path(Path::new("foo.ipynb"), Path::new("out"), "rst");
        assert!(result.is_err());
    }

    #[test]
    fn test_absolute_path() {
        let absolute = absolute_path(Path::new("docs/rendered/core_examples/foo.rst")).unwrap();
        assert!(absolute.is_absolute());
        assert!(absolute.ends_with("docs/rendered/core_examples/foo.rst"));
    }
}
