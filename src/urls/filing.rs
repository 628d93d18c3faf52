use super::{cached_base, with_segments};
use crate::constants::ARCHIVES_URL;
use crate::errors::AppResult;
use crate::identifiers::{format_cik, repair_cik, strip_accession_number, validate_accession_number};
use std::sync::OnceLock;
use url::Url;

static ARCHIVES_BASE: OnceLock<Url> = OnceLock::new();

/// Validates the accession number and returns the formatted, repaired CIK.
fn archive_cik(cik: u64, accession_number: &str) -> AppResult<String> {
    validate_accession_number(accession_number)?;
    Ok(format_cik(repair_cik(cik, accession_number)))
}

fn archive_url(segments: &[&str]) -> String {
    with_segments(cached_base(&ARCHIVES_BASE, ARCHIVES_URL), segments)
}

/// Full filing in `.txt` form: header, main document, exhibits and attachments.
///
/// This file is updated when corrections are submitted.
///
/// e.g. `https://www.sec.gov/Archives/edgar/data/0000320193/0000320193-20-000096.txt`
///
/// # Errors
///
/// Returns `InvalidAccessionNumber` if `accession_number` is malformed.
pub fn get_filing_url(cik: u64, accession_number: &str) -> AppResult<String> {
    let cik = archive_cik(cik, accession_number)?;
    let file_name = format!("{accession_number}.txt");
    Ok(archive_url(&[cik.as_str(), file_name.as_str()]))
}

/// Machine-readable SGML filing header.
///
/// Unlike the `.txt` filing, the header is not updated when corrections are submitted.
///
/// e.g. `https://www.sec.gov/Archives/edgar/data/0000320193/000032019320000096/0000320193-20-000096.hdr.sgml`
///
/// # Errors
///
/// Returns `InvalidAccessionNumber` if `accession_number` is malformed.
pub fn get_filing_header_url(cik: u64, accession_number: &str) -> AppResult<String> {
    let cik = archive_cik(cik, accession_number)?;
    let folder = strip_accession_number(accession_number);
    let file_name = format!("{accession_number}.hdr.sgml");
    Ok(archive_url(&[cik.as_str(), folder.as_str(), file_name.as_str()]))
}

/// Filing index page listing the filing's documents.
///
/// # Errors
///
/// Returns `InvalidAccessionNumber` if `accession_number` is malformed.
pub fn get_filing_page_url(cik: u64, accession_number: &str) -> AppResult<String> {
    let cik = archive_cik(cik, accession_number)?;
    let file_name = format!("{accession_number}-index.htm");
    Ok(archive_url(&[cik.as_str(), file_name.as_str()]))
}
