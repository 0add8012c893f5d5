#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sloc-scan binary.
#[macro_export]
macro_rules! sloc_scan {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sloc-scan"))
    };
}

/// Path of a checked-in fixture under `tests/fixtures`.
pub fn fixture(relative_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative_path)
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Copies a checked-in fixture into the temp directory.
    pub fn copy_fixture(&self, fixture_path: &str, relative_path: &str) -> PathBuf {
        let content = fs::read_to_string(fixture(fixture_path)).expect("Failed to read fixture");
        self.create_file(relative_path, &content)
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.sloc-scan.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".sloc-scan.toml", content);
    }
}
