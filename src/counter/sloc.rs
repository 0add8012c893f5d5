use std::io::BufRead;

use serde::Serialize;

use crate::language::CommentSyntax;

use super::CommentDetector;
use super::comment::Opening;
use super::state::{Mode, ScanState};

/// Classification of one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Code,
    Comment,
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRecord {
    /// 1-based line number.
    pub number: usize,
    pub kind: LineKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    #[must_use]
    pub const fn sloc(&self) -> usize {
        self.code
    }

    pub const fn record(&mut self, kind: LineKind) {
        self.total += 1;
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Blank => self.blank += 1,
        }
    }

    pub const fn accumulate(&mut self, other: &Self) {
        self.total += other.total;
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

/// Per-line classifications of one file plus their totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub lines: Vec<LineRecord>,
    pub stats: LineStats,
}

impl ScanResult {
    fn push(&mut self, kind: LineKind) {
        self.stats.record(kind);
        self.lines.push(LineRecord {
            number: self.stats.total,
            kind,
        });
    }

    /// Classification of a 1-based line number.
    #[must_use]
    pub fn kind_of(&self, number: usize) -> Option<LineKind> {
        number
            .checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(|r| r.kind)
    }
}

pub struct SlocCounter<'a> {
    detector: CommentDetector<'a>,
}

impl<'a> SlocCounter<'a> {
    #[must_use]
    pub fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            detector: CommentDetector::new(syntax),
        }
    }

    /// Classifies every physical line of `source`.
    ///
    /// Never fails: an unterminated block comment or string simply leaves
    /// the remaining lines in that state.
    #[must_use]
    pub fn classify(&self, source: &str) -> ScanResult {
        let mut state = ScanState::new();
        let mut result = ScanResult::default();

        for line in source.lines() {
            result.push(self.scan_line(line, &mut state));
        }

        result
    }

    /// Classify lines from a buffered reader (streaming, memory-efficient for large files).
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails or the input is not UTF-8.
    pub fn classify_reader<R: BufRead>(&self, reader: R) -> std::io::Result<ScanResult> {
        let mut state = ScanState::new();
        let mut result = ScanResult::default();

        for line_result in reader.lines() {
            let line = line_result?;
            result.push(self.scan_line(&line, &mut state));
        }

        Ok(result)
    }

    fn scan_line(&self, line: &str, state: &mut ScanState) -> LineKind {
        let chars: Vec<char> = line.chars().collect();
        state.begin_line();

        let mut i = 0;
        while i < chars.len() {
            let consumed = match state.mode {
                Mode::Code => self.step_code(&chars, i, state),
                Mode::LineComment => chars.len() - i,
                Mode::BlockComment { block, depth } => {
                    self.step_block(&chars, i, state, block, depth)
                }
                Mode::Str { quote } => self.step_string(chars[i], state, quote),
            };
            debug_assert!(consumed >= 1, "every step must consume at least 1 char");
            state.consumed(&chars[i..i + consumed]);
            i += consumed;
        }

        state.end_line(&self.detector)
    }

    fn step_code(&self, chars: &[char], i: usize, state: &mut ScanState) -> usize {
        match self.detector.opening_at(chars, i, state.at_line_start()) {
            Some(Opening::Block { block, len }) => {
                state.enter_block(block);
                return len;
            }
            Some(Opening::Line { .. }) => {
                state.enter_line_comment();
                return chars.len() - i;
            }
            None => {}
        }

        let c = chars[i];
        if self.detector.is_quote(c) {
            state.enter_string(c);
        } else if !c.is_whitespace() {
            state.mark_code();
        }
        1
    }

    fn step_block(
        &self,
        chars: &[char],
        i: usize,
        state: &mut ScanState,
        block: usize,
        depth: usize,
    ) -> usize {
        let at_line_start = state.at_line_start();

        if let Some(len) = self.detector.closing_at(block, chars, i, at_line_start) {
            state.mode = if depth > 1 {
                Mode::BlockComment {
                    block,
                    depth: depth - 1,
                }
            } else {
                Mode::Code
            };
            return len;
        }

        if let Some(len) = self
            .detector
            .nested_opening_at(block, chars, i, at_line_start)
        {
            state.mode = Mode::BlockComment {
                block,
                depth: depth + 1,
            };
            return len;
        }

        1
    }

    fn step_string(&self, c: char, state: &mut ScanState, quote: char) -> usize {
        if state.escape_pending {
            state.escape_pending = false;
        } else if self.detector.is_escape(c) {
            state.escape_pending = true;
        } else if c == quote {
            state.mode = Mode::Code;
        }
        1
    }
}

#[cfg(test)]
#[path = "sloc_tests/mod.rs"]
mod tests;
