use super::*;

fn stats(code: usize, comment: usize, blank: usize) -> LineStats {
    LineStats {
        total: code + comment + blank,
        code,
        comment,
        blank,
    }
}

#[test]
fn json_contains_summary_and_files() {
    let report = ScanReport::new(vec![
        FileReport::new("a.py", "Python", stats(3, 2, 1)),
        FileReport::new("b.go", "Go", stats(10, 0, 2)),
    ]);

    let output = JsonFormatter.format(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total_files"], 2);
    assert_eq!(parsed["summary"]["code"], 13);
    assert_eq!(parsed["summary"]["comment"], 2);
    assert_eq!(parsed["summary"]["blank"], 3);
    assert_eq!(parsed["summary"]["total"], 18);
    assert_eq!(parsed["files"][0]["path"], "b.go");
    assert_eq!(parsed["files"][0]["language"], "Go");
    assert_eq!(parsed["files"][1]["stats"]["comment"], 2);
}

#[test]
fn json_empty_report() {
    let output = JsonFormatter.format(&ScanReport::new(Vec::new())).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total_files"], 0);
    assert!(parsed["files"].as_array().unwrap().is_empty());
}
