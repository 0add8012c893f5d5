use std::path::PathBuf;

use rayon::prelude::*;

use crate::cli::Cli;
use crate::error::Result;
use crate::output::{FileReport, ScanReport};
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter, LanguageFilter};
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::context::{ScanContext, count_file, write_html_reports, write_output};
use super::report_error;

#[must_use]
pub fn run_scan(cli: &Cli) -> i32 {
    match run_scan_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_ERROR
        }
    }
}

/// Scan, classify, and print the report, plus HTML pages with `--html`.
///
/// # Errors
/// Returns an error for bad configuration, invalid globs, missing scan roots,
/// or a report that cannot be written.
pub fn run_scan_impl(cli: &Cli) -> Result<()> {
    let ctx = ScanContext::from_cli(cli)?;
    let files = discover_files(&ctx, &cli.paths)?;
    let report = build_report(&ctx, &files);

    tracing::info!(
        files = report.files.len(),
        code = report.total.code,
        comment = report.total.comment,
        blank = report.total.blank,
        "scan complete"
    );

    if let Some(dir) = cli.html.as_deref() {
        write_html_reports(dir, &report)?;
    }

    let output = cli.format.formatter().format(&report)?;
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    if cli.format.prints_total_line() {
        println!("{}", report.total_code());
    }
    Ok(())
}

/// With a forced language every non-excluded file is kept; otherwise only
/// files whose language the registry detects.
///
/// # Errors
/// Returns an error for an invalid exclude glob or a missing scan root.
pub fn discover_files(ctx: &ScanContext, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let globs = GlobFilter::new(&ctx.exclude)?;
    if ctx.forced_language.is_some() {
        DirectoryScanner::new(globs).scan_all(paths)
    } else {
        DirectoryScanner::new(LanguageFilter::new(&ctx.registry, globs)).scan_all(paths)
    }
}

/// Classify `files` in parallel. Unreadable files are logged and left out.
#[must_use]
pub fn build_report(ctx: &ScanContext, files: &[PathBuf]) -> ScanReport {
    let reports: Vec<FileReport> = files
        .par_iter()
        .filter_map(|path| {
            let language = ctx.language_for(path)?;
            tracing::debug!(path = %path.display(), language = %language.name, "classifying");
            match count_file(path, language) {
                Ok(result) => Some(FileReport::new(path, &language.name, result.stats)),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping file");
                    None
                }
            }
        })
        .collect();

    ScanReport::new(reports)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
