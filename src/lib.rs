//! edgar-urls library
//!
//! Builds canonical URLs for SEC EDGAR resources from a Central Index Key (CIK)
//! and, for filing resources, an accession number. Nothing here performs network
//! I/O: every function is a pure string transformation.
//!
//! ## Overview
//!
//! - [`identifiers`] - CIK formatting, accession number validation and the CIK repair table
//! - [`urls`] - URL builders for entity pages, JSON metadata and filing archives
//! - [`models`] - Typed [`Cik`], [`AccessionNumber`] and [`Resource`] values
//! - [`config`] - TOML batch files of URL requests
//! - [`cli`] - Command-line interface for the `edgar-urls` binary
//! - [`errors`] - Error types used throughout the crate
//!
//! ## Example Usage
//!
//! ```
//! use edgar_urls::{get_entity_page_url, get_filing_header_url, errors::AppResult};
//!
//! # fn main() -> AppResult<()> {
//! assert_eq!(
//!     get_entity_page_url(320193),
//!     "https://www.sec.gov/edgar/browse/?CIK=0000320193"
//! );
//!
//! let header = get_filing_header_url(320193, "0000320193-20-000096")?;
//! assert!(header.ends_with("/000032019320000096/0000320193-20-000096.hdr.sgml"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod identifiers;
pub mod models;
pub mod urls;

pub use errors::{AppError, AppResult};
pub use identifiers::{format_cik, repair_cik, validate_accession_number};
pub use models::{AccessionNumber, Cik, Resource};
pub use urls::{
    build_url, get_entity_json_url, get_entity_page_url, get_entity_page_url_alternate,
    get_filing_header_url, get_filing_page_url, get_filing_url, get_insider_transactions_page_url,
    get_owner_transactions_page_url,
};
