use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlocScanError};
use crate::language::{BlockComment, CommentSyntax, Language};

/// Contents of `.sloc-scan.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Glob patterns of files and directories to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Extra or replacement languages, keyed by language name.
    #[serde(default)]
    pub languages: BTreeMap<String, CustomLanguageConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub file_names: Vec<String>,

    #[serde(flatten)]
    pub comment_syntax: CommentSyntax,
}

impl Config {
    /// The `[languages]` tables as descriptors, in name order.
    #[must_use]
    pub fn custom_languages(&self) -> Vec<Language> {
        self.languages
            .iter()
            .map(|(name, custom)| Language {
                name: name.clone(),
                extensions: custom.extensions.clone(),
                file_names: custom.file_names.clone(),
                comment_syntax: custom.comment_syntax.clone(),
            })
            .collect()
    }
}

/// Top-level shape of a TOML language override file.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct LanguageFile {
    #[serde(default, rename = "language")]
    pub languages: Vec<Language>,
}

/// A JSON override file: a list of descriptors, or the older map of
/// language name to `{ LineComments, MultiLineComments, Extensions }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum JsonOverrides {
    List(Vec<Language>),
    Legacy(BTreeMap<String, LegacyLanguage>),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(super) struct LegacyLanguage {
    pub line_comments: Vec<String>,
    pub multi_line_comments: Vec<Vec<String>>,
    pub extensions: Vec<String>,
    pub file_names: Vec<String>,
}

impl JsonOverrides {
    /// Descriptors in file order, or name order for the map form.
    pub(super) fn into_languages(self) -> Result<Vec<Language>> {
        match self {
            Self::List(languages) => Ok(languages),
            Self::Legacy(map) => map
                .into_iter()
                .map(|(name, legacy)| legacy.into_language(name))
                .collect(),
        }
    }
}

impl LegacyLanguage {
    fn into_language(self, name: String) -> Result<Language> {
        let block_comments = self
            .multi_line_comments
            .into_iter()
            .map(|pair| match pair.as_slice() {
                [open, close] => Ok(BlockComment::new(open, close)),
                _ => Err(SlocScanError::Config(format!(
                    "language '{name}' has a block comment that is not an open/close pair"
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Language {
            name,
            extensions: self.extensions,
            file_names: self.file_names,
            comment_syntax: CommentSyntax {
                line_comments: self.line_comments,
                block_comments,
                ..CommentSyntax::default()
            },
        })
    }
}
