//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_CONVERTER_PROGRAM, DEFAULT_CONVERTER_SUBCOMMAND, DEFAULT_INPUT_ROOT,
    DEFAULT_NOTEBOOK_EXTENSION, DEFAULT_OUTPUT_ROOT, DEFAULT_TARGET_FORMAT,
};

use super::loader::{deserialize_to_arguments, deserialize_to_pathbuf};

/// Configuration for rendering notebooks
///
/// Every field has a default, so an empty document (or no configuration file
/// at all) describes the standard `rail/examples` to `docs/rendered` layout.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Directory holding one `<category>_examples` directory per category
    #[serde(
        default = "default_input_root",
        deserialize_with = "deserialize_to_pathbuf"
    )]
    pub input_root: PathBuf,
    /// Directory receiving the rendered documents
    #[serde(
        default = "default_output_root",
        deserialize_with = "deserialize_to_pathbuf"
    )]
    pub output_root: PathBuf,
    /// Extension of the notebooks to pick up, without the leading dot
    #[serde(default = "default_notebook_extension")]
    pub notebook_extension: String,
    /// The external conversion command
    #[serde(default)]
    pub converter: ConverterConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            input_root: default_input_root(),
            output_root: default_output_root(),
            notebook_extension: default_notebook_extension(),
            converter: ConverterConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Validates the configuration
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self) -> Result<()> {
        if self.input_root.as_os_str().is_empty() {
            return Err(anyhow!(
                "No input root specified in configuration. The notebooks must live somewhere."
            ));
        }

        if self.output_root.as_os_str().is_empty() {
            return Err(anyhow!(
                "No output root specified in configuration. Rendered documents need a destination."
            ));
        }

        validate_extension("notebook_extension", &self.notebook_extension)?;

        if self.converter.program.trim().is_empty() {
            return Err(anyhow!(
                "No converter program specified in configuration."
            ));
        }

        validate_extension("converter.target_format", &self.converter.target_format)?;

        Ok(())
    }
}

/// Settings of the external conversion command
///
/// The command is run as
/// `<program> [subcommand...] --to <target_format> --output <path> [--execute] <notebook>`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// Program to run
    #[serde(default = "default_converter_program")]
    pub program: String,
    /// Arguments passed before the conversion arguments, such as
    /// `[-m, nbconvert]`; empty to run the program directly
    #[serde(
        default = "default_converter_subcommand",
        deserialize_with = "deserialize_to_arguments"
    )]
    pub subcommand: Vec<String>,
    /// Document format to convert to; also the extension of the output files
    #[serde(default = "default_target_format")]
    pub target_format: String,
    /// Whether the notebook is executed before it is converted
    #[serde(default = "default_execute")]
    pub execute: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            program: default_converter_program(),
            subcommand: default_converter_subcommand(),
            target_format: default_target_format(),
            execute: default_execute(),
        }
    }
}

fn validate_extension(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("'{field}' must not be empty."));
    }
    if value.starts_with('.') || value.contains(&['/', '\\'][..]) {
        return Err(anyhow!(
            "'{field}' must be a bare extension such as 'rst', got '{value}'."
        ));
    }
    Ok(())
}

fn default_input_root() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_ROOT)
}

fn default_output_root() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_ROOT)
}

fn default_notebook_extension() -> String {
    DEFAULT_NOTEBOOK_EXTENSION.to_string()
}

fn default_converter_program() -> String {
    DEFAULT_CONVERTER_PROGRAM.to_string()
}

fn default_converter_subcommand() -> Vec<String> {
    vec![DEFAULT_CONVERTER_SUBCOMMAND.to_string()]
}

fn default_target_format() -> String {
    DEFAULT_TARGET_FORMAT.to_string()
}

fn default_execute() -> bool {
    true
}
