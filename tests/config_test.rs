//! Tests for config module

mod common;

use common::{write_batch_file, SAMPLE_BATCH};
use edgar_urls::config::BatchConfigFile;
use edgar_urls::{build_url, AccessionNumber, AppError, Cik, Resource};
use tempfile::TempDir;

#[test]
fn test_batch_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_batch_file(temp_dir.path(), SAMPLE_BATCH);

    let requests = BatchConfigFile::from_toml_file(&path).unwrap();

    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].resource, Resource::EntityJson);
    assert_eq!(requests[0].cik, Cik::new(320193));
    assert_eq!(requests[0].accession, None);
    assert_eq!(requests[1].resource, Resource::Filing);
    assert_eq!(
        requests[1].accession.as_ref().map(AccessionNumber::as_str),
        Some("0000898430-95-001046")
    );
}

#[test]
fn test_batch_requests_build_urls() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_batch_file(temp_dir.path(), SAMPLE_BATCH);

    let urls: Vec<String> = BatchConfigFile::from_toml_file(&path)
        .unwrap()
        .iter()
        .map(|r| {
            build_url(
                r.resource,
                r.cik.value(),
                r.accession.as_ref().map(AccessionNumber::as_str),
            )
            .unwrap()
        })
        .collect();

    assert_eq!(
        urls,
        vec![
            "https://data.sec.gov/submissions/CIK0000320193.json".to_string(),
            "https://www.sec.gov/Archives/edgar/data/0000701169/0000898430-95-001046.txt"
                .to_string(),
        ]
    );
}

#[test]
fn test_batch_unknown_key_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_batch_file(
        temp_dir.path(),
        r#"
[[requests]]
resource = "filing"
cik = 320193
accession = "0000320193-20-000096"
form = "10-K"
"#,
    );

    let result = BatchConfigFile::from_toml_file(&path);
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_batch_negative_cik_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_batch_file(
        temp_dir.path(),
        r#"
[[requests]]
resource = "entity-page"
cik = -5
"#,
    );

    assert!(BatchConfigFile::from_toml_file(&path).is_err());
}

#[test]
fn test_batch_empty_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_batch_file(temp_dir.path(), "");

    let result = BatchConfigFile::from_toml_file(&path);
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_batch_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_batch_file(temp_dir.path(), "[[requests]\nresource = \"filing\"\n");

    assert!(BatchConfigFile::from_toml_file(&path).is_err());
}

#[test]
fn test_batch_nonexistent_file() {
    let result = BatchConfigFile::from_toml_file(std::path::Path::new("nonexistent.toml"));
    assert!(matches!(result, Err(AppError::IoError(_))));
}

#[test]
fn test_batch_malformed_accession_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_batch_file(
        temp_dir.path(),
        r#"
[[requests]]
resource = "entity-page"
cik = 320193

[[requests]]
resource = "filing"
cik = 320193
accession = "not-an-accession"
"#,
    );

    let result = BatchConfigFile::from_toml_file(&path);
    assert_eq!(
        result,
        Err(AppError::InvalidAccessionNumber(
            "not-an-accession".to_string()
        ))
    );
}
