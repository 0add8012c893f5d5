use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlocScanError};

use super::builtin::builtin_languages;

static BUILTIN: LazyLock<LanguageRegistry> = LazyLock::new(LanguageRegistry::default);

const fn is_false(value: &bool) -> bool {
    !*value
}

/// A block comment delimiter pair such as `/*` ... `*/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockComment {
    pub open: String,
    pub close: String,
    /// Both delimiters only count when nothing but whitespace precedes them
    /// on the line (Ruby `=begin` / `=end`).
    #[serde(default, skip_serializing_if = "is_false")]
    pub line_start_only: bool,
}

impl BlockComment {
    #[must_use]
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
            line_start_only: false,
        }
    }

    #[must_use]
    pub const fn at_line_start(mut self) -> Self {
        self.line_start_only = true;
        self
    }
}

/// Lexical rules the classifier needs for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentSyntax {
    pub line_comments: Vec<String>,
    pub block_comments: Vec<BlockComment>,
    /// Block comments of the same pair nest (Rust, Swift).
    #[serde(skip_serializing_if = "is_false")]
    pub nested: bool,
    pub quotes: Vec<char>,
    /// Quotes whose strings may continue past the end of a line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub multi_line_quotes: Vec<char>,
    pub escape: Option<char>,
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self {
            line_comments: Vec::new(),
            block_comments: Vec::new(),
            nested: false,
            quotes: Vec::new(),
            multi_line_quotes: Vec::new(),
            escape: Some('\\'),
        }
    }
}

impl CommentSyntax {
    #[must_use]
    pub fn new(line_comments: Vec<&str>, block_comments: Vec<(&str, &str)>) -> Self {
        Self::with_blocks(
            line_comments,
            block_comments
                .into_iter()
                .map(|(open, close)| BlockComment::new(open, close))
                .collect(),
        )
    }

    #[must_use]
    pub fn with_blocks(line_comments: Vec<&str>, block_comments: Vec<BlockComment>) -> Self {
        Self {
            line_comments: line_comments.into_iter().map(String::from).collect(),
            block_comments,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_nesting(mut self) -> Self {
        self.nested = true;
        self
    }

    #[must_use]
    pub fn with_quotes(mut self, quotes: &[char]) -> Self {
        self.quotes = quotes.to_vec();
        self
    }

    /// Adds quotes whose strings may span lines. They are also registered as
    /// ordinary quotes.
    #[must_use]
    pub fn with_multi_line_quotes(mut self, quotes: &[char]) -> Self {
        for &quote in quotes {
            if !self.quotes.contains(&quote) {
                self.quotes.push(quote);
            }
        }
        self.multi_line_quotes = quotes.to_vec();
        self
    }

    #[must_use]
    pub const fn without_escape(mut self) -> Self {
        self.escape = None;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_names: Vec<String>,
    #[serde(flatten)]
    pub comment_syntax: CommentSyntax,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, comment_syntax: CommentSyntax) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            file_names: Vec::new(),
            comment_syntax,
        }
    }

    #[must_use]
    pub fn with_file_names(mut self, file_names: Vec<&str>) -> Self {
        self.file_names = file_names.into_iter().map(String::from).collect();
        self
    }

    /// Rejects descriptors the classifier cannot run with.
    ///
    /// # Errors
    /// Returns `SlocScanError::Config` for an empty name or an empty delimiter.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SlocScanError::Config(
                "language name must not be empty".to_string(),
            ));
        }
        let syntax = &self.comment_syntax;
        if syntax.line_comments.iter().any(String::is_empty) {
            return Err(SlocScanError::Config(format!(
                "language '{}' has an empty line comment marker",
                self.name
            )));
        }
        if syntax
            .block_comments
            .iter()
            .any(|b| b.open.is_empty() || b.close.is_empty())
        {
            return Err(SlocScanError::Config(format!(
                "language '{}' has an empty block comment delimiter",
                self.name
            )));
        }
        Ok(())
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}

#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    /// Indices into `languages`, oldest registration first.
    order: Vec<usize>,
    extension_map: HashMap<String, usize>,
    file_name_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            order: Vec::new(),
            extension_map: HashMap::new(),
            file_name_map: HashMap::new(),
        }
    }

    /// The process-wide registry of built-in languages.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Adds a language. A language with the same name (ignoring ASCII case)
    /// is replaced; extensions and file names map to the latest registration.
    pub fn register(&mut self, language: Language) {
        if let Some(idx) = self.position(&language.name) {
            self.languages[idx] = language;
            self.order.retain(|&i| i != idx);
            self.order.push(idx);
            self.rebuild_maps();
            return;
        }
        let idx = self.languages.len();
        self.index(idx, &language);
        self.languages.push(language);
        self.order.push(idx);
    }

    fn index(&mut self, idx: usize, language: &Language) {
        for ext in &language.extensions {
            self.extension_map.insert(normalize_extension(ext), idx);
        }
        for file_name in &language.file_names {
            self.file_name_map.insert(file_name.clone(), idx);
        }
    }

    fn rebuild_maps(&mut self) {
        self.extension_map.clear();
        self.file_name_map.clear();
        let languages = std::mem::take(&mut self.languages);
        let order = std::mem::take(&mut self.order);
        for &idx in &order {
            self.index(idx, &languages[idx]);
        }
        self.languages = languages;
        self.order = order;
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.languages
            .iter()
            .position(|l| l.name.eq_ignore_ascii_case(name))
    }

    /// Finds a language by its name, ignoring ASCII case.
    ///
    /// # Errors
    /// Returns `SlocScanError::UnknownLanguage` when no language has that name.
    pub fn lookup(&self, language_id: &str) -> Result<&Language> {
        self.position(language_id)
            .map(|idx| &self.languages[idx])
            .ok_or_else(|| SlocScanError::UnknownLanguage(language_id.to_string()))
    }

    /// Finds a language by file extension, with or without the leading dot.
    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(&normalize_extension(ext))
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn get_by_file_name(&self, file_name: &str) -> Option<&Language> {
        self.file_name_map
            .get(file_name)
            .map(|&idx| &self.languages[idx])
    }

    /// Picks the language for a path: exact file name first, then extension.
    #[must_use]
    pub fn detect(&self, path: &Path) -> Option<&Language> {
        let by_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| self.get_by_file_name(n));
        by_name.or_else(|| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .and_then(|ext| self.get_by_extension(ext))
        })
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    /// Built-in languages overridden by the given descriptors.
    ///
    /// # Errors
    /// Returns an error if any override fails validation.
    pub fn with_overrides<I>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = Language>,
    {
        let mut registry = Self::default();

        for language in overrides {
            language.validate()?;
            tracing::debug!(language = %language.name, "registering language override");
            registry.register(language);
        }

        Ok(registry)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for language in builtin_languages() {
            registry.register(language);
        }
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
