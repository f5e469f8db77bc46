//! Path generation module
//!
//! This module contains components for deriving where rendered documents go.

mod output;

pub use output::{absolute_path, derive_output_path};
