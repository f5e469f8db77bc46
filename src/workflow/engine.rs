//! Workflow engine
//!
//! This module contains the batch loop that renders every notebook of a
//! category and aggregates the failures.

use std::str::FromStr;

use colored::Colorize;
use log::{debug, error, info};

use crate::category::Category;
use crate::config::RenderConfig;
use crate::discovery::discover_notebooks;
use crate::errors::{Result, batch_conversion_failed_error};
use crate::file_ops::{Converter, ensure_output_directory};
use crate::path_gen::derive_output_path;

use super::context::{BatchReport, ConversionResult, PlannedConversion};

/// Options for rendering a category
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Where notebooks are read from and documents written to
    pub config: RenderConfig,
    /// List the conversions instead of running them
    pub dry_run: bool,
}

/// Renders every notebook of the named category
///
/// The name is checked before anything touches the filesystem or starts a
/// process.
///
/// # Errors
/// * `InvalidCategory` if `category` is not a recognised name
/// * `BatchConversionFailed` listing every notebook whose conversion failed
/// * `FileOperation` if an output directory cannot be created
pub fn render_group<C: Converter>(
    category: &str,
    options: &RenderOptions,
    converter: &mut C,
) -> Result<BatchReport> {
    let category = Category::from_str(category)?;
    render_category(category, options, converter)
}

/// Renders every notebook of a category, failing if any conversion failed
///
/// All notebooks are attempted even after a failure; the failures are
/// reported together once the batch is done.
///
/// # Errors
/// * `BatchConversionFailed` listing every notebook whose conversion failed
/// * `FileOperation` if an output directory cannot be created
pub fn render_category<C: Converter>(
    category: Category,
    options: &RenderOptions,
    converter: &mut C,
) -> Result<BatchReport> {
    let report = run_batch(category, options, converter)?;
    log_summary(&report);

    let failed = report.failed_sources();
    if !failed.is_empty() {
        return Err(batch_conversion_failed_error(failed));
    }

    Ok(report)
}

/// Converts every notebook of a category and collects the outcomes
///
/// Unlike [`render_category`] a failed conversion is not an error here; it is
/// only recorded in the report.
///
/// # Errors
/// Returns an error if discovery fails or an output directory cannot be
/// created. The batch stops at that point.
pub fn run_batch<C: Converter>(
    category: Category,
    options: &RenderOptions,
    converter: &mut C,
) -> Result<BatchReport> {
    let config = &options.config;
    let mut report = BatchReport::new(category, options.dry_run);

    let notebooks = discover_notebooks(&config.input_root, category, &config.notebook_extension)?;

    if notebooks.is_empty() {
        info!("No notebooks found for '{category}'");
        return Ok(report);
    }

    info!(
        "Rendering {} notebooks for '{}'{}...",
        notebooks.len(),
        category,
        if options.dry_run { " (dry run)" } else { "" }
    );

    for source in notebooks {
        let output = derive_output_path(&source, &config.output_root, &config.converter.target_format)?;

        if options.dry_run {
            debug!(
                "Would render {} -> {}",
                source.display(),
                output.display()
            );
            report.plan(PlannedConversion {
                source_path: source,
                output_path: output,
            });
            continue;
        }

        info!("Rendering {} -> {}", source.display(), output.display());
        ensure_output_directory(&output)?;

        let exit_status = converter.convert(&source, &output);
        if exit_status != 0 {
            error!(
                "Rendering {} exited with status {}",
                source.display(),
                exit_status
            );
        }

        report.record(ConversionResult {
            source_path: source,
            output_path: output,
            exit_status,
        });
    }

    Ok(report)
}

/// Logs one line per notebook with its exit status
fn log_summary(report: &BatchReport) {
    if report.dry_run {
        log_plan(report);
        return;
    }

    for result in &report.results {
        let status = result.exit_status.to_string();
        let status = if result.succeeded() {
            status.green()
        } else {
            status.red().bold()
        };
        info!("{} {}", result.source_path.display(), status);
    }

    if !report.results.is_empty() {
        info!(
            "Rendered {} of {} notebooks for '{}'",
            report.succeeded().len(),
            report.results.len(),
            report.category
        );
    }
}

fn log_plan(report: &BatchReport) {
    if report.planned.is_empty() {
        return;
    }

    info!("Notebooks to be rendered for '{}':", report.category);
    for planned in &report.planned {
        info!("  From: {}", planned.source_path.display());
        info!("  To:   {}", planned.output_path.display());
    }
    info!("Run without --dry flag to render them.");
}
