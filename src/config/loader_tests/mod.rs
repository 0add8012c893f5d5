use std::path::Path;

use super::*;

mod mock_fs;

use mock_fs::MockFileSystem;

#[test]
fn load_returns_default_without_local_config() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let config = loader.load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_reads_local_config() {
    let fs = MockFileSystem::new().with_file(
        "/project/.sloc-scan.toml",
        r#"exclude = ["**/vendor/**", "*.min.js"]"#,
    );
    let loader = FileConfigLoader::with_fs(fs);
    let config = loader.load().unwrap();

    assert_eq!(config.exclude, vec!["**/vendor/**", "*.min.js"]);
}

#[test]
fn load_from_path_missing_file_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();

    assert!(
        matches!(err, SlocScanError::FileRead { ref path, .. } if path == Path::new("/nope.toml"))
    );
}

#[test]
fn load_invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.sloc-scan.toml", "exclude = [");
    let loader = FileConfigLoader::with_fs(fs);

    assert!(matches!(loader.load(), Err(SlocScanError::TomlParse(_))));
}

#[test]
fn load_rejects_invalid_custom_language() {
    let fs = MockFileSystem::new().with_file(
        "/project/.sloc-scan.toml",
        r#"
        [languages.Broken]
        extensions = ["brk"]
        line_comments = [""]
        "#,
    );
    let loader = FileConfigLoader::with_fs(fs);

    assert!(matches!(loader.load(), Err(SlocScanError::Config(_))));
}

#[test]
fn read_ignore_file_skips_blank_and_comment_lines() {
    let fs = MockFileSystem::new().with_file(
        "/project/ignore.txt",
        "*.js\n\n  # generated code\n  misc/**  \n",
    );
    let loader = FileConfigLoader::with_fs(fs);
    let patterns = loader
        .read_ignore_file(Path::new("/project/ignore.txt"))
        .unwrap();

    assert_eq!(patterns, vec!["*.js", "misc/**"]);
}

#[test]
fn read_missing_ignore_file_fails() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    assert!(loader.read_ignore_file(Path::new("/missing")).is_err());
}
