use super::*;

use LineKind::{Blank, Code, Comment};

#[test]
fn line_stats_default() {
    let stats = LineStats::default();
    assert_eq!(stats, LineStats::new());
    assert_eq!(stats.total, 0);
    assert_eq!(stats.sloc(), 0);
}

#[test]
fn line_stats_accumulate() {
    let mut total = LineStats::new();
    total.record(Code);
    total.record(Blank);

    let mut other = LineStats::new();
    other.record(Comment);
    total.accumulate(&other);

    assert_eq!(total.total, 3);
    assert_eq!(total.code, 1);
    assert_eq!(total.comment, 1);
    assert_eq!(total.blank, 1);
}

#[test]
fn count_empty_source() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let result = counter.classify("");

    assert_eq!(result.stats.total, 0);
    assert!(result.lines.is_empty());
}

#[test]
fn count_code_only() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "function main() {\n    run();\n}";
    let result = counter.classify(source);

    assert_eq!(kinds(&result), vec![Code, Code, Code]);
    assert_consistent(&result, source);
}

#[test]
fn count_with_blank_lines() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "a();\n\n    \n\t\nb();";
    let result = counter.classify(source);

    assert_eq!(kinds(&result), vec![Code, Blank, Blank, Blank, Code]);
    assert_eq!(result.stats.blank, 3);
}

#[test]
fn trailing_newline_does_not_add_a_line() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);

    assert_eq!(counter.classify("a();\n").stats.total, 1);
    assert_eq!(counter.classify("a();").stats.total, 1);
    assert_eq!(counter.classify("a();\n\n").stats.total, 2);
    assert_eq!(counter.classify("\n").stats.total, 1);
}

#[test]
fn single_line_comment_alone_is_comment() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let result = counter.classify("// just a note\n    // indented note");

    assert_eq!(kinds(&result), vec![Comment, Comment]);
}

#[test]
fn trailing_comment_does_not_demote_code() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let result = counter.classify("x = 1; // set x");

    assert_eq!(kinds(&result), vec![Code]);
}

#[test]
fn rest_of_line_after_marker_is_comment_text() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    // the quote after the marker must not open a string
    let source = "// don't\nx();";
    let result = counter.classify(source);

    assert_eq!(kinds(&result), vec![Comment, Code]);
}

#[test]
fn crlf_line_endings() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "a();\r\n\r\n// c\r\n/*\r\n\r\n*/\r\n";
    let result = counter.classify(source);

    assert_eq!(kinds(&result), vec![Code, Blank, Comment, Comment, Comment, Comment]);
    assert_consistent(&result, source);
}

#[test]
fn records_are_numbered_in_order() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let result = counter.classify("a();\n// b\n\n");

    let numbers: Vec<usize> = result.lines.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(result.kind_of(1), Some(Code));
    assert_eq!(result.kind_of(2), Some(Comment));
    assert_eq!(result.kind_of(3), Some(Blank));
    assert_eq!(result.kind_of(0), None);
    assert_eq!(result.kind_of(4), None);
}

#[test]
fn classify_reader_matches_classify() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let source = "/* a\n\n b */ c();\n`tpl\n// not a comment\n`;\n";

    let from_reader = counter.classify_reader(Cursor::new(source)).unwrap();

    assert_eq!(from_reader, counter.classify(source));
}

#[test]
fn classify_reader_rejects_invalid_utf8() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let bytes: &[u8] = &[b'a', 0xff, 0xfe, b'\n'];

    assert!(counter.classify_reader(Cursor::new(bytes)).is_err());
}

#[test]
fn counts_always_add_up() {
    let syntax = js_syntax();
    let counter = SlocCounter::new(&syntax);
    let sources = [
        "",
        "\n\n\n",
        "/*",
        "/* open\n\n",
        "\"unterminated",
        "`open template\n\n",
        "a /* b */ c\n// d\n\n  \n*/ e",
        "x = '\\\n'; // escaped newline",
    ];

    for source in sources {
        let result = counter.classify(source);
        assert_consistent(&result, source);
    }
}
