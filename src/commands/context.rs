use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::counter::{ScanResult, SlocCounter};
use crate::error::{Result, SlocScanError};
use crate::language::{Language, LanguageRegistry};
use crate::output::{ScanReport, render_pages};

/// Files at or above this size are classified line by line from a reader.
pub const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

/// Everything a scan needs, resolved from the command line and config.
#[derive(Debug)]
pub struct ScanContext {
    pub registry: LanguageRegistry,
    pub exclude: Vec<String>,
    pub forced_language: Option<Language>,
}

impl ScanContext {
    /// Load config, overrides and ignore files named by `cli`.
    ///
    /// # Errors
    /// Returns an error if any of those files cannot be read or parsed, or
    /// `--language` names no registered language.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let loader = FileConfigLoader::new();
        let config = load_config(&loader, cli.config.as_deref(), cli.no_config)?;
        let registry = build_registry(&loader, &config, cli.override_languages.as_deref())?;

        let mut exclude = config.exclude;
        if let Some(path) = cli.ignore_file.as_deref() {
            exclude.extend(loader.read_ignore_file(path)?);
        }
        exclude.extend(cli.exclude.iter().cloned());

        let forced_language = cli
            .language
            .as_deref()
            .map(|name| registry.lookup(name).cloned())
            .transpose()?;

        Ok(Self {
            registry,
            exclude,
            forced_language,
        })
    }

    /// The forced language if one was given, else the detected one.
    #[must_use]
    pub fn language_for(&self, path: &Path) -> Option<&Language> {
        self.forced_language
            .as_ref()
            .or_else(|| self.registry.detect(path))
    }
}

pub(crate) fn load_config(
    loader: &FileConfigLoader,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Built-ins, then `[languages]` from config, then the override file.
/// Later sources replace earlier ones by name.
pub(crate) fn build_registry(
    loader: &FileConfigLoader,
    config: &Config,
    override_path: Option<&Path>,
) -> Result<LanguageRegistry> {
    let mut languages = config.custom_languages();
    if let Some(path) = override_path {
        languages.extend(loader.load_language_overrides(path)?);
    }
    LanguageRegistry::with_overrides(languages)
}

/// Classify one file. Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
/// Returns `SlocScanError::FileRead` if the file cannot be read.
pub fn count_file(path: &Path, language: &Language) -> Result<ScanResult> {
    let read_error = |source| SlocScanError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let counter = SlocCounter::new(&language.comment_syntax);
    let size = fs::metadata(path).map_err(read_error)?.len();

    if size >= LARGE_FILE_THRESHOLD {
        let file = File::open(path).map_err(read_error)?;
        return counter
            .classify_reader(BufReader::new(file))
            .map_err(read_error);
    }

    let bytes = fs::read(path).map_err(read_error)?;
    Ok(counter.classify(&String::from_utf8_lossy(&bytes)))
}

/// Write output to a file or stdout.
///
/// When `output_path` is `Some`, the content is written to the file (creating parent
/// directories if needed). The `quiet` flag only affects stdout output.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "report written");
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Write the per-directory HTML pages into `dir`, creating it if needed.
pub(crate) fn write_html_reports(dir: &Path, report: &ScanReport) -> Result<()> {
    fs::create_dir_all(dir)?;
    let pages = render_pages(report);
    for page in &pages {
        fs::write(dir.join(&page.file_name), &page.content)?;
    }
    tracing::info!(dir = %dir.display(), pages = pages.len(), "html report written");
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
