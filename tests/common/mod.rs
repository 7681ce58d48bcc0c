//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use t262_frontmatter::TestFile;
use t262_frontmatter::test_utils::init_test_logging;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Raw contents of a fixture under `tests/fixtures`.
pub fn fixture_text(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

/// A fixture as a named test file.
pub fn fixture(name: &str) -> TestFile {
    TestFile::new(name, fixture_text(name))
}

/// Initialize logging once for the whole test binary.
pub fn init_test_env() {
    init_test_logging(None);
}
