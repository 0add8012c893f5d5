mod comment;
mod sloc;
mod state;

pub use comment::{CommentDetector, Opening};
pub use sloc::{LineKind, LineRecord, LineStats, ScanResult, SlocCounter};

use crate::language::Language;

/// Classifies `source` with the comment rules of `language`.
#[must_use]
pub fn classify(source: &str, language: &Language) -> ScanResult {
    SlocCounter::new(&language.comment_syntax).classify(source)
}

#[cfg(test)]
mod test_fixtures;
