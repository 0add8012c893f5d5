use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, SlocScanError};
use crate::language::LanguageRegistry;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;

    /// Whether the walk should enter `dir` at all.
    fn should_descend(&self, _dir: &Path) -> bool {
        true
    }
}

/// Drops paths matching any exclude glob.
pub struct GlobFilter {
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a new filter with the given exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| SlocScanError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| SlocScanError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { exclude_patterns })
    }

    /// Matches `path` as walked and, for paths under `.`, without the
    /// leading `./` so root-relative patterns like `vendor/**` apply.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude_patterns.is_match(path) {
            return true;
        }
        path.strip_prefix(".")
            .is_ok_and(|relative| self.exclude_patterns.is_match(relative))
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        if self.is_excluded(path) {
            tracing::debug!(path = %path.display(), "skipping excluded file");
            return false;
        }
        true
    }

    fn should_descend(&self, dir: &Path) -> bool {
        !self.is_excluded(dir)
    }
}

/// Keeps files the registry can detect a language for and no glob excludes.
pub struct LanguageFilter<'r> {
    registry: &'r LanguageRegistry,
    globs: GlobFilter,
}

impl<'r> LanguageFilter<'r> {
    #[must_use]
    pub const fn new(registry: &'r LanguageRegistry, globs: GlobFilter) -> Self {
        Self { registry, globs }
    }
}

impl FileFilter for LanguageFilter<'_> {
    fn should_include(&self, path: &Path) -> bool {
        if !self.globs.should_include(path) {
            return false;
        }
        if self.registry.detect(path).is_none() {
            tracing::debug!(path = %path.display(), "skipping unsupported file");
            return false;
        }
        true
    }

    fn should_descend(&self, dir: &Path) -> bool {
        self.globs.should_descend(dir)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
