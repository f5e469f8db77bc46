//! Workflow module
//!
//! This module contains the batch rendering loop and its results.

mod context;
mod engine;

pub use context::{BatchReport, ConversionResult, PlannedConversion};
pub use engine::{RenderOptions, render_category, render_group, run_batch};
