use crate::constants::{ACCESSION_NUMBER_PATTERN, CIK_WIDTH};
use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Filings that EDGAR archives under a different CIK than the one reported
/// for them: `(reported CIK, accession number, archived CIK)`.
const CIK_REPAIRS: &[(u64, &str, u64)] = &[
    // 903377 has no copy of this filing; it lives under 701169.
    (903377, "0000898430-95-001046", 701169),
    // The 880026 copy is broken and has no header; 1319519 has both.
    (880026, "0001193125-08-024463", 1319519),
];

/// Cached regex for accession numbers.
/// Compiled once at initialization for performance.
static ACCESSION_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Lookup built from [`CIK_REPAIRS`] on first use.
static CIK_REPAIR_TABLE: OnceLock<HashMap<(u64, &'static str), u64>> = OnceLock::new();

/// Formats a CIK as a zero-padded, 10-digit decimal string.
///
/// The width is a minimum: values longer than 10 digits are returned as-is.
pub fn format_cik(cik: u64) -> String {
    format!("{cik:0width$}", width = CIK_WIDTH)
}

/// Validates that an accession number matches `NNNNNNNNNN-YY-NNNNNN`.
///
/// The last group may be longer than six digits. Only ASCII digits are accepted.
///
/// # Errors
///
/// Returns `InvalidAccessionNumber` if the value does not match the pattern exactly.
pub fn validate_accession_number(accession_number: &str) -> AppResult<()> {
    let regex = ACCESSION_NUMBER_REGEX.get_or_init(|| {
        Regex::new(ACCESSION_NUMBER_PATTERN)
            .expect("ACCESSION_NUMBER_PATTERN is a valid regex pattern")
    });

    if regex.is_match(accession_number) {
        Ok(())
    } else {
        Err(AppError::InvalidAccessionNumber(
            accession_number.to_string(),
        ))
    }
}

/// Returns the CIK under which EDGAR actually archives the given filing.
///
/// Only exact `(cik, accession_number)` pairs from the repair table are
/// rewritten; every other pair returns `cik` unchanged.
pub fn repair_cik(cik: u64, accession_number: &str) -> u64 {
    let table = CIK_REPAIR_TABLE.get_or_init(|| {
        CIK_REPAIRS
            .iter()
            .map(|&(reported, accession, archived)| ((reported, accession), archived))
            .collect()
    });

    match table.get(&(cik, accession_number)) {
        Some(&repaired) => {
            debug!(
                cik,
                repaired_cik = repaired,
                accession_number,
                "Repaired CIK for known archive inconsistency"
            );
            repaired
        }
        None => cik,
    }
}

/// Removes the hyphens from an accession number, as used in archive folder names.
pub(crate) fn strip_accession_number(accession_number: &str) -> String {
    accession_number.chars().filter(|&c| c != '-').collect()
}
