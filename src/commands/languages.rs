use crate::cli::Cli;
use crate::config::FileConfigLoader;
use crate::error::Result;
use crate::language::LanguageRegistry;
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::context::{build_registry, load_config, write_output};
use super::report_error;

#[must_use]
pub fn run_print_languages(cli: &Cli) -> i32 {
    match run_print_languages_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_ERROR
        }
    }
}

fn run_print_languages_impl(cli: &Cli) -> Result<()> {
    let loader = FileConfigLoader::new();
    let config = load_config(&loader, cli.config.as_deref(), cli.no_config)?;
    let registry = build_registry(&loader, &config, cli.override_languages.as_deref())?;

    let mut output = format_languages(&registry)?;
    output.push('\n');
    write_output(cli.output.as_deref(), &output, false)
}

/// Every registered descriptor as a pretty JSON array.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_languages(registry: &LanguageRegistry) -> Result<String> {
    Ok(serde_json::to_string_pretty(registry.all())?)
}

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;
