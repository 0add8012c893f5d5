use super::*;

use LineKind::{Blank, Code, Comment};

#[test]
fn multi_line_block_comment_interior_is_comment() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "/*\n  first\n  second\n*/\nrun();";
    let result = counter.classify(source);

    assert_eq!(kinds(&result), vec![Comment, Comment, Comment, Comment, Code]);
}

#[test]
fn whitespace_inside_block_comment_is_comment_not_blank() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "/*\n\n   \n*/\n\n";
    let result = counter.classify(source);

    assert_eq!(kinds(&result), vec![Comment, Comment, Comment, Comment, Blank]);
}

#[test]
fn code_after_close_on_same_line_is_code() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "/* start\n   still comment\n*/ console.log(\"after\");";
    let result = counter.classify(source);

    assert_eq!(kinds(&result), vec![Comment, Comment, Code]);
}

#[test]
fn close_followed_by_whitespace_only_is_comment() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let result = counter.classify("/*\n text\n  */   \n");

    assert_eq!(kinds(&result), vec![Comment, Comment, Comment]);
}

#[test]
fn close_followed_by_line_comment_is_comment() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let result = counter.classify("/* a\n*/ // b");

    assert_eq!(kinds(&result), vec![Comment, Comment]);
}

#[test]
fn inline_block_comment_between_code_is_code() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let result = counter.classify("foo(/* inline */ 1, 2);");

    assert_eq!(kinds(&result), vec![Code]);
}

#[test]
fn leading_inline_block_comment_then_code_is_code() {
    let syntax = c_syntax();
    let counter = SlocCounter::new(&syntax);
    let line = "/* GFLOPS 3.398 x 20 = 67.956 */ {{7, 7}, {{1, 128, 46, 46}}, 128, \"\", true},";
    let result = counter.classify(line);

    assert_eq!(kinds(&result), vec![Code]);
}

#[test]
fn block_comment_on_single_line_is_comment() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let result = counter.classify("/* one line */\n/** doc */");

    assert_eq!(kinds(&result), vec![Comment, Comment]);
}

#[test]
fn code_then_block_open_keeps_line_code() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let result = counter.classify("x = 1; /* starts here\n continues */");

    assert_eq!(kinds(&result), vec![Code, Comment]);
}

#[test]
fn jsdoc_block_before_declaration() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "/**\n * Adds numbers.\n * @param {number} a\n */\nfunction add(a) {";
    let result = counter.classify(source);

    assert_eq!(kinds(&result), vec![Comment, Comment, Comment, Comment, Code]);
}

#[test]
fn unterminated_block_comment_runs_to_eof() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "a();\n/* never closed\nb();\n\n";
    let result = counter.classify(source);

    assert_eq!(kinds(&result), vec![Code, Comment, Comment, Comment]);
    assert_consistent(&result, source);
}

#[test]
fn line_marker_inside_block_comment_is_ignored() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let result = counter.classify("/* // not a line comment\n*/ x();");

    assert_eq!(kinds(&result), vec![Comment, Code]);
}

#[test]
fn quote_inside_block_comment_is_ignored() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let result = counter.classify("/* it's here */ x();\ny();");

    assert_eq!(kinds(&result), vec![Code, Code]);
}
