use std::borrow::Cow;
use std::fmt::Write;

use crate::error::Result;

use super::{OutputFormatter, ScanReport};

const HEADER: [&str; 5] = ["filePath", "languageName", "blank", "comment", "code"];

/// One row per file under a `filePath,languageName,blank,comment,code`
/// header, closed by a `total` row.
pub struct CsvFormatter;

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_row(output: &mut String, fields: &[&str]) {
    let row: Vec<Cow<'_, str>> = fields.iter().map(|f| escape_field(f)).collect();
    writeln!(output, "{}", row.join(",")).ok();
}

impl OutputFormatter for CsvFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut output = String::new();
        write_row(&mut output, &HEADER);

        for file in &report.files {
            let path = file.display_path();
            let blank = file.stats.blank.to_string();
            let comment = file.stats.comment.to_string();
            let code = file.stats.code.to_string();
            write_row(
                &mut output,
                &[
                    path.as_str(),
                    file.language.as_str(),
                    blank.as_str(),
                    comment.as_str(),
                    code.as_str(),
                ],
            );
        }

        let blank = report.total.blank.to_string();
        let comment = report.total.comment.to_string();
        let code = report.total.code.to_string();
        write_row(
            &mut output,
            &["total", "", blank.as_str(), comment.as_str(), code.as_str()],
        );

        Ok(output)
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
