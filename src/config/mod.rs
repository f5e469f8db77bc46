//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{deserialize_to_arguments, deserialize_to_pathbuf, load_config, load_or_default};
pub use model::{ConverterConfig, RenderConfig};
