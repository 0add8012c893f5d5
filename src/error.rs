use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlocScanError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SlocScanError {
    /// Short, stable name of the error kind, used in log fields.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::UnknownLanguage(_) => "UnknownLanguage",
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::Json(_) => "Json",
        }
    }
}

pub type Result<T> = std::result::Result<T, SlocScanError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
