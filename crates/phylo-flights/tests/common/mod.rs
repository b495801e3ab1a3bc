//! Test fixture loading utilities

use std::path::PathBuf;

/// Directory holding the fixture files
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_fixtures")
}

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    fixture_dir().join(name)
}
