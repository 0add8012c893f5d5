use super::comment::CommentDetector;
use super::sloc::LineKind;

/// Lexical mode of the scanner at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Code,
    LineComment,
    BlockComment { block: usize, depth: usize },
    Str { quote: char },
}

/// Scanner state for one classification call. Carried across lines,
/// never shared between calls.
#[derive(Debug)]
pub struct ScanState {
    pub mode: Mode,
    pub escape_pending: bool,
    line_has_code: bool,
    line_has_comment: bool,
    line_has_token: bool,
}

impl ScanState {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Code,
            escape_pending: false,
            line_has_code: false,
            line_has_comment: false,
            line_has_token: false,
        }
    }

    /// Lines that begin inside a string count as code, lines that begin
    /// inside a block comment count as comment.
    pub const fn begin_line(&mut self) {
        self.line_has_code = matches!(self.mode, Mode::Str { .. });
        self.line_has_comment = matches!(self.mode, Mode::BlockComment { .. });
        self.line_has_token = false;
    }

    /// True while only whitespace has been consumed on the current line.
    pub const fn at_line_start(&self) -> bool {
        !self.line_has_token
    }

    pub fn consumed(&mut self, span: &[char]) {
        if !self.line_has_token && span.iter().any(|c| !c.is_whitespace()) {
            self.line_has_token = true;
        }
    }

    pub const fn mark_code(&mut self) {
        self.line_has_code = true;
    }

    pub const fn enter_line_comment(&mut self) {
        self.line_has_comment = true;
        self.mode = Mode::LineComment;
    }

    pub const fn enter_block(&mut self, block: usize) {
        self.line_has_comment = true;
        self.mode = Mode::BlockComment { block, depth: 1 };
    }

    pub const fn enter_string(&mut self, quote: char) {
        self.line_has_code = true;
        self.escape_pending = false;
        self.mode = Mode::Str { quote };
    }

    /// Finishes the physical line and returns its classification.
    pub fn end_line(&mut self, detector: &CommentDetector<'_>) -> LineKind {
        match self.mode {
            Mode::LineComment => self.mode = Mode::Code,
            Mode::Str { quote } => {
                if self.escape_pending {
                    // escaped newline continues the string
                    self.escape_pending = false;
                } else if !detector.spans_lines(quote) {
                    self.mode = Mode::Code;
                }
            }
            Mode::Code | Mode::BlockComment { .. } => {}
        }

        if self.line_has_code {
            LineKind::Code
        } else if self.line_has_comment {
            LineKind::Comment
        } else {
            LineKind::Blank
        }
    }
}
