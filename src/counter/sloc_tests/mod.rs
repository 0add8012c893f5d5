use super::*;
use std::io::Cursor;

mod block_comment_tests;
mod counting_tests;
mod fixture_tests;

// Re-export shared test fixtures for submodules
pub(super) use crate::counter::test_fixtures::{
    c_syntax, js_syntax, lua_like_syntax, markup_syntax, python_syntax, ruby_syntax, rust_syntax,
    sql_syntax,
};

pub(super) fn kinds(result: &ScanResult) -> Vec<LineKind> {
    result.lines.iter().map(|r| r.kind).collect()
}

/// Asserts the category counts add up to the physical line count.
pub(super) fn assert_consistent(result: &ScanResult, source: &str) {
    let stats = result.stats;
    assert_eq!(stats.code + stats.comment + stats.blank, stats.total);
    assert_eq!(stats.total, source.lines().count());
    assert_eq!(result.lines.len(), stats.total);
}
