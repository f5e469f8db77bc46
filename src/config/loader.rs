//! Configuration loading functionality
//!
//! This module contains functions for loading and validating configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde::Deserialize;
use serde_yaml::from_str;

use crate::utils::{expand_path, process_strings_to_paths};

use super::model::RenderConfig;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<RenderConfig>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: &Path) -> Result<RenderConfig> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    let config = parse_config(&content_str).map_err(|e| {
        anyhow!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        )
    })?;

    config.validate()?;

    debug!("Loaded configuration from {}", file.display());
    Ok(config)
}

/// Loads the configuration file if it exists, or falls back to the defaults
///
/// A missing configuration file is not an error: the built-in layout matches
/// the repository this tool renders.
///
/// # Errors
/// Returns an error if an existing file cannot be loaded
pub fn load_or_default(file: &Path) -> Result<RenderConfig> {
    if file.exists() {
        load_config(file)
    } else {
        info!(
            "No configuration file at {}, using the default layout",
            file.display()
        );
        Ok(RenderConfig::default())
    }
}

fn parse_config(content: &str) -> std::result::Result<RenderConfig, serde_yaml::Error> {
    // An empty document deserializes to unit, not to an empty mapping
    if content.trim().is_empty() {
        return Ok(RenderConfig::default());
    }
    from_str(content)
}

/// A path written either as one string or as a list of segments
#[derive(Deserialize)]
#[serde(untagged)]
enum PathSpec {
    Single(String),
    Segments(Vec<String>),
}

/// Deserializes a path given as a string or as an array of segments
///
/// A leading `~` in any segment is expanded to the home directory.
pub fn deserialize_to_pathbuf<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match PathSpec::deserialize(deserializer)? {
        PathSpec::Single(path) => Ok(PathBuf::from(expand_path(&path))),
        PathSpec::Segments(segments) => Ok(process_strings_to_paths(segments.as_slice())),
    }
}

/// Arguments written either as one word or as a list of words
#[derive(Deserialize)]
#[serde(untagged)]
enum ArgumentSpec {
    Single(String),
    List(Vec<String>),
}

/// Deserializes null, a single argument or a list of arguments
///
/// Each entry is passed to the program as one argument; nothing is split on
/// whitespace.
pub fn deserialize_to_arguments<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<ArgumentSpec>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(ArgumentSpec::Single(argument)) => Ok(vec![argument]),
        Some(ArgumentSpec::List(arguments)) => Ok(arguments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_document() {
        let config = parse_config("").unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_parse_paths_as_string_and_segments() {
        let config = parse_config(
            r#"
input_root: "notebooks"
output_root:
  - "site"
  - "rendered"
"#,
        )
        .unwrap();
        assert_eq!(config.input_root, PathBuf::from("notebooks"));
        assert_eq!(config.output_root, PathBuf::from("site").join("rendered"));
        assert_eq!(config.converter.program, "jupyter");
    }

    #[test]
    fn test_parse_subcommand_forms() {
        let config = parse_config("converter:\n  subcommand: nbconvert\n").unwrap();
        assert_eq!(config.converter.subcommand, vec!["nbconvert"]);

        let config =
            parse_config("converter:\n  subcommand: [\"-m\", \"nbconvert\"]\n").unwrap();
        assert_eq!(config.converter.subcommand, vec!["-m", "nbconvert"]);

        let config = parse_config("converter:\n  subcommand: null\n").unwrap();
        assert!(config.converter.subcommand.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let result = parse_config("download: somewhere\n");
        assert!(result.is_err());
    }
}
