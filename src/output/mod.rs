mod csv;
mod html;
mod html_template;
mod json;
mod report;
mod text;

pub use csv::CsvFormatter;
pub use html::{HtmlPage, ROOT_PAGE, TreeNode, render_pages};
pub use json::JsonFormatter;
pub use report::{FileReport, ScanReport};
pub use text::TextFormatter;

use crate::error::Result;

/// Trait for formatting scan reports into various output formats.
pub trait OutputFormatter {
    /// Format the scan report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &ScanReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Text,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Csv => Box::new(CsvFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Text => Box::new(TextFormatter),
        }
    }

    /// Whether the total code count follows the report as a last stdout line.
    #[must_use]
    pub const fn prints_total_line(self) -> bool {
        matches!(self, Self::Csv | Self::Text)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "text" | "table" => Ok(Self::Text),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
