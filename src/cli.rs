use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "sloc-scan")]
#[command(author, version, about = "Count code, comment and blank lines per file")]
#[command(long_about = "Classifies every line of every supported source file as code, \
    comment or blank and reports the counts per file.\n\n\
    The total number of code lines is printed as the last line of stdout \
    for csv and text output.\n\n\
    Exit codes:\n  \
    0 - Scan finished\n  \
    2 - Configuration or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Files or directories to scan
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Output format [possible values: csv, json, text]
    #[arg(short, long, default_value = "csv")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write per-directory HTML pages into this directory (index.html is the root)
    #[arg(long, value_name = "DIR")]
    pub html: Option<PathBuf>,

    /// Path to configuration file (default: ./.sloc-scan.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// File with one exclude glob per line
    #[arg(long)]
    pub ignore_file: Option<PathBuf>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// JSON or TOML file with language descriptors replacing the built-ins
    #[arg(long)]
    pub override_languages: Option<PathBuf>,

    /// Print the supported languages as JSON and exit
    #[arg(long)]
    pub print_languages: bool,

    /// Classify every file with this language instead of detecting it
    #[arg(short, long)]
    pub language: Option<String>,

    /// Log level: trace, debug, info, warn, error (`SLOC_SCAN_LOG` takes precedence)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the report on stdout; only the total line is printed
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
