use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, file_operation_error, generic_error};

/// Expands a leading `~` to the home directory
pub fn expand_path(path: &str) -> String {
    tilde(path).to_string()
}

/// Joins path segments into one path, expanding `~` in each of them
pub fn process_strings_to_paths<S: AsRef<str>>(segments: &[S]) -> PathBuf {
    segments
        .iter()
        .map(|segment| expand_path(segment.as_ref()))
        .collect()
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}

#[cfg(unix)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(windows)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    let dotted = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'));

    if let Ok(metadata) = path.metadata() {
        dotted || metadata.file_attributes() & 0x2 != 0 // FILE_ATTRIBUTE_HIDDEN
    } else {
        dotted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_leaves_plain_paths_alone() {
        assert_eq!(expand_path("docs/rendered"), "docs/rendered");
        assert_eq!(expand_path("/abs/path"), "/abs/path");
    }

    #[test]
    fn test_expand_path_expands_tilde() {
        let expanded = expand_path("~/notebooks");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("notebooks"));
    }

    #[test]
    fn test_process_strings_to_paths() {
        let path = process_strings_to_paths(&["rail", "examples"]);
        assert_eq!(path, PathBuf::from("rail").join("examples"));
    }

    #[test]
    fn test_is_hidden_file() {
        assert!(is_hidden_file(Path::new("core_examples/.draft.ipynb")));
        assert!(!is_hidden_file(Path::new("core_examples/draft.ipynb")));
    }
}
