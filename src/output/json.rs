use serde::Serialize;

use crate::counter::LineStats;
use crate::error::Result;

use super::{FileReport, OutputFormatter, ScanReport};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    files: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    total: usize,
    code: usize,
    comment: usize,
    blank: usize,
}

#[derive(Serialize)]
struct FileResult<'a> {
    path: String,
    language: &'a str,
    stats: &'a LineStats,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_files: report.files.len(),
                total: report.total.total,
                code: report.total.code,
                comment: report.total.comment,
                blank: report.total.blank,
            },
            files: report.files.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(file: &FileReport) -> FileResult<'_> {
    FileResult {
        path: file.display_path(),
        language: &file.language,
        stats: &file.stats,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
