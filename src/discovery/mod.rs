//! Notebook discovery module
//!
//! This module contains components for finding the notebooks of a category.

mod scanner;

pub use scanner::{category_directory, discover_notebooks, notebook_pattern};
