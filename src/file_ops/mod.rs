//! File operations module
//!
//! This module contains directory provisioning and the notebook converter.

mod actions;
mod converter;

pub use actions::ensure_output_directory;
pub use converter::{CommandConverter, Converter};
