mod context;
mod languages;
mod scan;

pub use context::{LARGE_FILE_THRESHOLD, ScanContext, count_file};
pub use languages::{format_languages, run_print_languages};
pub use scan::{build_report, discover_files, run_scan, run_scan_impl};

use crate::cli::Cli;
use crate::error::SlocScanError;
use crate::logging;
use crate::EXIT_ERROR;

/// Entry point behind `main`: sets up logging and dispatches.
#[must_use]
pub fn run(cli: &Cli) -> i32 {
    let base = match logging::parse_log_level(&cli.log_level) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_ERROR;
        }
    };
    logging::init_logging(logging::effective_level(base, cli.verbose, cli.quiet));

    if cli.print_languages {
        return run_print_languages(cli);
    }

    run_scan(cli)
}

pub(crate) fn report_error(e: &SlocScanError) {
    tracing::error!(error_type = e.error_type(), "{e}");
    eprintln!("Error: {e}");
}
