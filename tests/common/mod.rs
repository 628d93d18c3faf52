//! Common test utilities for integration tests

use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub const APPLE_CIK: u64 = 320193;

/// Accession number of Apple's 2020 10-K
#[allow(dead_code)]
pub const APPLE_10K_ACCESSION: &str = "0000320193-20-000096";

/// Helper function to write a TOML batch file into a directory
#[allow(dead_code)]
pub fn write_batch_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("requests.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Batch file covering one entity and one filing resource
#[allow(dead_code)]
pub const SAMPLE_BATCH: &str = r#"
[[requests]]
resource = "entity-json"
cik = 320193

[[requests]]
resource = "filing"
cik = 903377
accession = "0000898430-95-001046"
"#;
