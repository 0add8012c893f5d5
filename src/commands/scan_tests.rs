use clap::Parser;
use tempfile::TempDir;

use super::*;

fn context(args: &[&str]) -> ScanContext {
    let cli = Cli::parse_from(
        ["sloc-scan", "--no-config"]
            .into_iter()
            .chain(args.iter().copied()),
    );
    ScanContext::from_cli(&cli).unwrap()
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn discover_skips_unsupported_and_excluded() {
    let dir = TempDir::new().unwrap();
    write(&dir, "app.js", "x();\n");
    write(&dir, "README.txt", "hello\n");
    write(&dir, "vendor/lib.js", "y();\n");

    let ctx = context(&["-x", "**/vendor/**"]);
    let files = discover_files(&ctx, &[dir.path().to_path_buf()]).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("app.js"));
}

#[test]
fn discover_with_forced_language_keeps_every_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "app.js", "x();\n");
    write(&dir, "script", "# comment\n");

    let ctx = context(&["--language", "Shell"]);
    let files = discover_files(&ctx, &[dir.path().to_path_buf()]).unwrap();

    assert_eq!(files.len(), 2);
}

#[test]
fn discover_missing_root_fails() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&[]);

    assert!(discover_files(&ctx, &[dir.path().join("missing")]).is_err());
}

#[test]
fn discover_invalid_glob_fails() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&["-x", "[oops"]);

    assert!(discover_files(&ctx, &[dir.path().to_path_buf()]).is_err());
}

#[test]
fn build_report_counts_and_sorts() {
    let dir = TempDir::new().unwrap();
    let small = write(&dir, "small.py", "# doc\nx = 1\n");
    let large = write(&dir, "large.rs", "fn a() {}\nfn b() {}\n\n/* c */\n");

    let ctx = context(&[]);
    let report = build_report(&ctx, &[small, large]);

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.files[0].language, "Rust");
    assert_eq!(report.files[0].stats.code, 2);
    assert_eq!(report.files[1].language, "Python");
    assert_eq!(report.total.code, 3);
    assert_eq!(report.total.comment, 2);
    assert_eq!(report.total.blank, 1);
}

#[test]
fn build_report_with_forced_language() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "notes.txt", "-- a comment\nselect 1;\n");

    let ctx = context(&["--language", "SQL"]);
    let report = build_report(&ctx, &[file]);

    assert_eq!(report.files[0].language, "SQL");
    assert_eq!(report.total.comment, 1);
    assert_eq!(report.total.code, 1);
}

#[test]
fn build_report_skips_unreadable_files() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&[]);

    let report = build_report(&ctx, &[dir.path().join("gone.rs")]);

    assert!(report.files.is_empty());
}

#[test]
fn run_scan_writes_csv_report() {
    let dir = TempDir::new().unwrap();
    write(&dir, "src/main.go", "package main\n// entry\n\nfunc main() {}\n");
    let out = dir.path().join("out/report.csv");

    let cli = Cli::parse_from([
        "sloc-scan",
        "--no-config",
        "--output",
        out.to_str().unwrap(),
        dir.path().join("src").to_str().unwrap(),
    ]);
    run_scan_impl(&cli).unwrap();

    let csv = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "filePath,languageName,blank,comment,code");
    assert!(lines[1].ends_with("main.go,Go,1,1,2"));
    assert_eq!(lines[2], "total,,1,1,2");
}

#[test]
fn run_scan_error_exit_code() {
    let dir = TempDir::new().unwrap();
    let cli = Cli::parse_from([
        "sloc-scan",
        "--no-config",
        dir.path().join("missing").to_str().unwrap(),
    ]);

    assert_eq!(run_scan(&cli), EXIT_ERROR);
}
