use std::path::PathBuf;

use serde::Serialize;

use crate::counter::LineStats;

/// Line counts for one scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: String,
    pub stats: LineStats,
}

impl FileReport {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, language: &str, stats: LineStats) -> Self {
        Self {
            path: path.into(),
            language: language.to_string(),
            stats,
        }
    }

    #[must_use]
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// All file reports of one run, largest first, plus their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub total: LineStats,
}

impl ScanReport {
    /// Sorts by code lines descending, ties broken by path.
    #[must_use]
    pub fn new(mut files: Vec<FileReport>) -> Self {
        files.sort_by(|a, b| {
            b.stats
                .code
                .cmp(&a.stats.code)
                .then_with(|| a.path.cmp(&b.path))
        });

        let mut total = LineStats::new();
        for file in &files {
            total.accumulate(&file.stats);
        }

        Self { files, total }
    }

    #[must_use]
    pub const fn total_code(&self) -> usize {
        self.total.code
    }
}
