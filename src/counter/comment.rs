use crate::language::CommentSyntax;

/// A comment delimiter that starts at some position in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opening {
    /// Line comment marker of the given length in chars.
    Line { len: usize },
    /// Block comment opener; `block` indexes the syntax's block pairs.
    Block { block: usize, len: usize },
}

impl Opening {
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Line { len } | Self::Block { len, .. } => len,
        }
    }
}

#[derive(Debug)]
struct BlockDelimiters {
    open: Vec<char>,
    close: Vec<char>,
    line_start_only: bool,
}

/// Matches comment delimiters and string quotes of one language against
/// a line that has been split into chars.
#[derive(Debug)]
pub struct CommentDetector<'a> {
    syntax: &'a CommentSyntax,
    line_markers: Vec<Vec<char>>,
    blocks: Vec<BlockDelimiters>,
}

fn matches_at(chars: &[char], pos: usize, needle: &[char]) -> bool {
    !needle.is_empty() && chars.get(pos..).is_some_and(|rest| rest.starts_with(needle))
}

impl<'a> CommentDetector<'a> {
    #[must_use]
    pub fn new(syntax: &'a CommentSyntax) -> Self {
        let line_markers = syntax
            .line_comments
            .iter()
            .map(|m| m.chars().collect())
            .collect();
        let blocks = syntax
            .block_comments
            .iter()
            .map(|b| BlockDelimiters {
                open: b.open.chars().collect(),
                close: b.close.chars().collect(),
                line_start_only: b.line_start_only,
            })
            .collect();

        Self {
            syntax,
            line_markers,
            blocks,
        }
    }

    /// Finds the comment delimiter starting at `pos`.
    ///
    /// The longest candidate wins; on equal length a block opener beats a
    /// line marker, so `<!--` opens a block even where it is also listed as
    /// a line marker. `at_line_start` is true when only whitespace precedes
    /// `pos` on the line.
    #[must_use]
    pub fn opening_at(&self, chars: &[char], pos: usize, at_line_start: bool) -> Option<Opening> {
        let block = self
            .blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| at_line_start || !b.line_start_only)
            .filter(|(_, b)| matches_at(chars, pos, &b.open))
            .max_by_key(|(idx, b)| (b.open.len(), std::cmp::Reverse(*idx)))
            .map(|(block, b)| Opening::Block {
                block,
                len: b.open.len(),
            });
        let line = self
            .line_markers
            .iter()
            .filter(|m| matches_at(chars, pos, m))
            .map(Vec::len)
            .max()
            .map(|len| Opening::Line { len });

        match (block, line) {
            (Some(b), Some(l)) if l.width() > b.width() => Some(l),
            (Some(b), _) => Some(b),
            (None, l) => l,
        }
    }

    /// Length of the closing delimiter of `block` if it starts at `pos`.
    #[must_use]
    pub fn closing_at(
        &self,
        block: usize,
        chars: &[char],
        pos: usize,
        at_line_start: bool,
    ) -> Option<usize> {
        let b = self.blocks.get(block)?;
        if b.line_start_only && !at_line_start {
            return None;
        }
        matches_at(chars, pos, &b.close).then_some(b.close.len())
    }

    /// Length of a nested opener of `block` at `pos`, if nesting is enabled.
    #[must_use]
    pub fn nested_opening_at(
        &self,
        block: usize,
        chars: &[char],
        pos: usize,
        at_line_start: bool,
    ) -> Option<usize> {
        if !self.syntax.nested {
            return None;
        }
        let b = self.blocks.get(block)?;
        if b.line_start_only && !at_line_start {
            return None;
        }
        matches_at(chars, pos, &b.open).then_some(b.open.len())
    }

    #[must_use]
    pub fn is_quote(&self, c: char) -> bool {
        self.syntax.quotes.contains(&c)
    }

    /// Whether a string opened by `quote` may continue on the next line.
    #[must_use]
    pub fn spans_lines(&self, quote: char) -> bool {
        self.syntax.multi_line_quotes.contains(&quote)
    }

    #[must_use]
    pub fn is_escape(&self, c: char) -> bool {
        self.syntax.escape == Some(c)
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
