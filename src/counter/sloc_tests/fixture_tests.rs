//! The JavaScript fixtures under `tests/fixtures/js`.

use super::*;

use LineKind::{Blank, Code, Comment};

const EASY_JS: &str = include_str!("../../../tests/fixtures/js/easy.js");
const HARD_JS: &str = include_str!("../../../tests/fixtures/js/hard.js");

#[test]
fn easy_js_counts() {
    let syntax = js_syntax();
    let result = SlocCounter::new(&syntax).classify(EASY_JS);

    assert_eq!(result.stats.code, 16);
    assert_eq!(result.stats.comment, 9);
    assert_eq!(result.stats.blank, 7);
    assert_eq!(result.stats.total, 32);
    assert_consistent(&result, EASY_JS);
}

#[test]
fn easy_js_opening_lines() {
    let syntax = js_syntax();
    let result = SlocCounter::new(&syntax).classify(EASY_JS);

    // header comment, function, comment, whitespace-only line, statement
    assert_eq!(
        kinds(&result)[..5],
        [Comment, Code, Comment, Blank, Code]
    );
}

#[test]
fn hard_js_counts() {
    let syntax = js_syntax();
    let result = SlocCounter::new(&syntax).classify(HARD_JS);

    assert_eq!(result.stats.code, 16);
    assert_eq!(result.stats.comment, 27);
    assert_eq!(result.stats.blank, 7);
    assert_eq!(result.stats.total, 50);
    assert_consistent(&result, HARD_JS);
}

#[test]
fn hard_js_block_comment_spans() {
    let syntax = js_syntax();
    let result = SlocCounter::new(&syntax).classify(HARD_JS);

    // lines 4-7: block comment whose closer stands alone, then the statement
    assert_eq!(result.kind_of(4), Some(Comment));
    assert_eq!(result.kind_of(6), Some(Comment));
    assert_eq!(result.kind_of(7), Some(Comment));
    assert_eq!(result.kind_of(8), Some(Code));

    // the whitespace-only line inside the second block comment
    assert_eq!(result.kind_of(14), Some(Comment));
}

#[test]
fn hard_js_jsdoc_before_declaration() {
    let syntax = js_syntax();
    let result = SlocCounter::new(&syntax).classify(HARD_JS);

    for line in 35..=38 {
        assert_eq!(result.kind_of(line), Some(Comment), "line {line}");
    }
    assert_eq!(result.kind_of(39), Some(Code));
}

#[test]
fn fixtures_are_stable_across_runs() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);

    assert_eq!(counter.classify(HARD_JS), counter.classify(HARD_JS));
}
