//! URL builders for EDGAR resources.
//!
//! Entity builders only need a CIK and never fail. Filing builders also take an
//! accession number, validate it, and apply the CIK repair table before building
//! the archive path. [`build_url`] dispatches on a [`Resource`].

mod entity;
mod filing;

use crate::errors::{AppError, AppResult};
use crate::models::Resource;
use std::sync::OnceLock;
use tracing::debug;
use url::Url;

// Re-export public API
pub use entity::{
    get_entity_json_url, get_entity_page_url, get_entity_page_url_alternate,
    get_insider_transactions_page_url, get_owner_transactions_page_url,
};
pub use filing::{get_filing_header_url, get_filing_page_url, get_filing_url};

/// Builds the URL of `resource` for the given CIK.
///
/// # Errors
///
/// Returns `MissingAccessionNumber` if the resource is a filing resource and no
/// accession number was given, or `InvalidAccessionNumber` if the given one is
/// malformed. An accession number passed for an entity resource is ignored.
pub fn build_url(
    resource: Resource,
    cik: u64,
    accession_number: Option<&str>,
) -> AppResult<String> {
    if !resource.requires_accession() {
        if let Some(accession_number) = accession_number {
            debug!(
                resource = resource.name(),
                accession_number, "Ignoring accession number for entity resource"
            );
        }
    }

    match (resource, accession_number) {
        (Resource::EntityPage, _) => Ok(get_entity_page_url(cik)),
        (Resource::EntityPageAlternate, _) => Ok(get_entity_page_url_alternate(cik)),
        (Resource::InsiderTransactions, _) => Ok(get_insider_transactions_page_url(cik)),
        (Resource::OwnerTransactions, _) => Ok(get_owner_transactions_page_url(cik)),
        (Resource::EntityJson, _) => Ok(get_entity_json_url(cik)),
        (Resource::Filing, Some(acc)) => get_filing_url(cik, acc),
        (Resource::FilingHeader, Some(acc)) => get_filing_header_url(cik, acc),
        (Resource::FilingPage, Some(acc)) => get_filing_page_url(cik, acc),
        (Resource::Filing | Resource::FilingHeader | Resource::FilingPage, None) => Err(
            AppError::MissingAccessionNumber(resource.name().to_string()),
        ),
    }
}

/// Returns a clone of the base URL cached in `cell`, parsing `raw` on first use.
fn cached_base(cell: &'static OnceLock<Url>, raw: &'static str) -> Url {
    cell.get_or_init(|| Url::parse(raw).expect("base URL constants are valid URLs"))
        .clone()
}

/// Appends percent-encoded path segments to `url`, replacing a trailing empty segment.
fn with_segments(mut url: Url, segments: &[&str]) -> String {
    // http(s) URLs always have a path, so this never takes the else branch.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url.to_string()
}
