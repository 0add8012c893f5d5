use std::path::{Path, PathBuf};

use crate::error::{Result, SlocScanError};
use crate::language::Language;

use super::Config;
use super::model::{JsonOverrides, LanguageFile};

pub const LOCAL_CONFIG_NAME: &str = ".sloc-scan.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Loads configuration, language overrides and ignore files.
///
/// `load` looks for `.sloc-scan.toml` in the current directory and returns
/// `Config::default()` when there is none.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.fs
            .read_to_string(path)
            .map_err(|source| SlocScanError::FileRead {
                path: path.to_path_buf(),
                source,
            })
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        for language in config.custom_languages() {
            language.validate()?;
        }
        Ok(config)
    }

    /// Read a language override file. `.json` files hold an array of
    /// descriptors or a map of name to `{ LineComments, MultiLineComments,
    /// Extensions }`; anything else is read as TOML with `[[language]]`
    /// tables.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or holds an
    /// invalid descriptor.
    pub fn load_language_overrides(&self, path: &Path) -> Result<Vec<Language>> {
        let content = self.read(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let languages = if is_json {
            serde_json::from_str::<JsonOverrides>(&content)?.into_languages()?
        } else {
            toml::from_str::<LanguageFile>(&content)?.languages
        };

        for language in &languages {
            language.validate()?;
        }
        tracing::debug!(
            path = %path.display(),
            count = languages.len(),
            "loaded language overrides"
        );
        Ok(languages)
    }

    /// Read exclude globs from an ignore file: one pattern per line, blank
    /// lines and `#` comments skipped.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn read_ignore_file(&self, path: &Path) -> Result<Vec<String>> {
        let content = self.read(path)?;
        let patterns: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();
        tracing::debug!(path = %path.display(), ?patterns, "read ignore file");
        Ok(patterns)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        if let Some(path) = self.local_config_path()
            && self.fs.exists(&path)
        {
            return self.load_from_path(&path);
        }

        tracing::debug!("no {LOCAL_CONFIG_NAME} found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self.read(path)?;
        let config = Self::parse_config(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
