//! Shared test fixtures for counter tests.
//!
//! Provides common `CommentSyntax` configurations used across both
//! `comment_tests` and `sloc_tests` modules.

use crate::language::{BlockComment, CommentSyntax};

/// JavaScript: `//`, `/* */`, quotes with backtick template literals
pub fn js_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/")])
        .with_quotes(&['"', '\''])
        .with_multi_line_quotes(&['`'])
}

/// C: same delimiters as JavaScript but no multi-line strings
pub fn c_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/")]).with_quotes(&['"', '\''])
}

/// Rust syntax WITH nesting support and strings that span lines
pub fn rust_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/")])
        .with_nesting()
        .with_multi_line_quotes(&['"'])
}

/// Python syntax with triple-quoted strings as multi-line comments
pub fn python_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec![("\"\"\"", "\"\"\""), ("'''", "'''")])
        .with_quotes(&['"', '\''])
}

/// Ruby syntax with =begin/=end multi-line comments
pub fn ruby_syntax() -> CommentSyntax {
    CommentSyntax::with_blocks(
        vec!["#"],
        vec![BlockComment::new("=begin", "=end").at_line_start()],
    )
    .with_quotes(&['"', '\''])
}

/// SQL syntax with -- single-line and /* */ multi-line comments
pub fn sql_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["--"], vec![("/*", "*/")])
        .with_quotes(&['\''])
        .without_escape()
}

/// Markup where `<!--` is listed both as a line marker and a block opener
pub fn markup_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["<!--"], vec![("<!--", "-->")])
}

/// Lua-style syntax where the block opener extends the line marker
pub fn lua_like_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["--"], vec![("--[[", "]]")]).with_quotes(&['"', '\''])
}
