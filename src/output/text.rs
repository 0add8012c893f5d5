use std::fmt::Write;

use crate::error::Result;

use super::{OutputFormatter, ScanReport};

const COLUMN_GAP: usize = 3;
const HEADERS: [&str; 5] = ["File", "Language", "Blank", "Comment", "Code"];

/// Aligned table with one row per file and a closing total row.
pub struct TextFormatter;

impl TextFormatter {
    fn file_rows(report: &ScanReport) -> Vec<[String; 5]> {
        report
            .files
            .iter()
            .map(|file| {
                [
                    file.display_path(),
                    file.language.clone(),
                    file.stats.blank.to_string(),
                    file.stats.comment.to_string(),
                    file.stats.code.to_string(),
                ]
            })
            .collect()
    }

    fn total_row(report: &ScanReport) -> [String; 5] {
        [
            "Total".to_string(),
            format!("{} files", report.files.len()),
            report.total.blank.to_string(),
            report.total.comment.to_string(),
            report.total.code.to_string(),
        ]
    }

    fn widths<'a>(rows: impl Iterator<Item = &'a [String; 5]>) -> [usize; 5] {
        let mut widths = HEADERS.map(str::len);
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn write_line(output: &mut String, cells: [&str; 5], widths: &[usize; 5]) {
        let gap = " ".repeat(COLUMN_GAP);
        let line = format!(
            "{:<w0$}{gap}{:<w1$}{gap}{:>w2$}{gap}{:>w3$}{gap}{:>w4$}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            cells[4],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
            w4 = widths[4],
        );
        writeln!(output, "{}", line.trim_end()).ok();
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let files = Self::file_rows(report);
        let total = Self::total_row(report);
        let widths = Self::widths(files.iter().chain(std::iter::once(&total)));
        let border = "-".repeat(widths.iter().sum::<usize>() + COLUMN_GAP * (widths.len() - 1));

        let mut output = String::new();
        writeln!(output, "{border}").ok();
        Self::write_line(&mut output, HEADERS, &widths);
        writeln!(output, "{border}").ok();
        for row in &files {
            Self::write_line(&mut output, row.each_ref().map(String::as_str), &widths);
        }
        writeln!(output, "{border}").ok();
        Self::write_line(&mut output, total.each_ref().map(String::as_str), &widths);
        writeln!(output, "{border}").ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
