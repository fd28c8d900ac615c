//! Test fixture loading utilities

use std::path::PathBuf;

use groupsite_core::DataConfig;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Data config pointing at the sample site
#[allow(dead_code)]
pub fn sample_site_config() -> DataConfig {
    DataConfig::in_dir(fixture_path("site"))
}
