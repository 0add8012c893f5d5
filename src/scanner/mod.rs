mod filter;

pub use filter::{FileFilter, GlobFilter, LanguageFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SlocScanError};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a file or directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Scan several roots. The result is sorted by path and free of
    /// duplicates.
    ///
    /// # Errors
    /// Returns the first error any root produces.
    fn scan_all(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for root in roots {
            files.extend(self.scan(root)?);
        }
        files.sort();
        files.dedup();
        Ok(files)
    }
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !e.file_type().is_dir() || self.filter.should_descend(e.path())
            })
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| self.filter.should_include(p))
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(SlocScanError::FileRead {
                path: root.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "path does not exist"),
            });
        }

        let files = self.scan_impl(root);
        tracing::debug!(root = %root.display(), files = files.len(), "scanned path");
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
