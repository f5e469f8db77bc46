//! Batch results
//!
//! This module defines what a batch run accumulates.

use std::path::PathBuf;

use crate::category::Category;

/// Outcome of converting one notebook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// The notebook that was converted
    pub source_path: PathBuf,
    /// Where the rendered document was written
    pub output_path: PathBuf,
    /// Exit status of the converter, 0 on success
    pub exit_status: i32,
}

impl ConversionResult {
    pub fn succeeded(&self) -> bool {
        self.exit_status == 0
    }
}

/// A conversion that a dry run would have performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedConversion {
    /// The notebook to convert
    pub source_path: PathBuf,
    /// Where the rendered document would be written
    pub output_path: PathBuf,
}

/// Everything one batch run produced
///
/// Results are kept in the order the notebooks were processed, one entry per
/// discovered notebook.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// The category that was rendered
    pub category: Category,
    /// Whether conversions were only planned
    pub dry_run: bool,
    /// Outcomes of the conversions that ran
    pub results: Vec<ConversionResult>,
    /// Conversions listed by a dry run
    pub planned: Vec<PlannedConversion>,
}

impl BatchReport {
    pub fn new(category: Category, dry_run: bool) -> Self {
        BatchReport {
            category,
            dry_run,
            results: Vec::new(),
            planned: Vec::new(),
        }
    }

    pub fn record(&mut self, result: ConversionResult) {
        self.results.push(result);
    }

    pub fn plan(&mut self, planned: PlannedConversion) {
        self.planned.push(planned);
    }

    /// Conversions that exited with a non-zero status
    pub fn failed(&self) -> Vec<&ConversionResult> {
        self.results
            .iter()
            .filter(|result| !result.succeeded())
            .collect()
    }

    /// Conversions that exited with status 0
    pub fn succeeded(&self) -> Vec<&ConversionResult> {
        self.results
            .iter()
            .filter(|result| result.succeeded())
            .collect()
    }

    /// Source paths of the failed conversions, in processing order
    pub fn failed_sources(&self) -> Vec<PathBuf> {
        self.failed()
            .into_iter()
            .map(|result| result.source_path.clone())
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.results.iter().all(ConversionResult::succeeded)
    }
}
