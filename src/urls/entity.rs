use super::{cached_base, with_segments};
use crate::constants::{
    ENTITY_PAGE_ALTERNATE_URL, ENTITY_PAGE_URL, INSIDER_TRANSACTIONS_URL, OWNER_TRANSACTIONS_URL,
    SUBMISSIONS_URL,
};
use crate::identifiers::format_cik;
use std::sync::OnceLock;
use url::Url;

static ENTITY_PAGE_BASE: OnceLock<Url> = OnceLock::new();
static ENTITY_PAGE_ALTERNATE_BASE: OnceLock<Url> = OnceLock::new();
static INSIDER_TRANSACTIONS_BASE: OnceLock<Url> = OnceLock::new();
static OWNER_TRANSACTIONS_BASE: OnceLock<Url> = OnceLock::new();
static SUBMISSIONS_BASE: OnceLock<Url> = OnceLock::new();

/// Appends `key=<formatted CIK>` to the query of a cached base URL.
fn with_cik_param(base: Url, key: &str, cik: u64) -> String {
    let mut url = base;
    url.query_pairs_mut().append_pair(key, &format_cik(cik));
    url.to_string()
}

/// Entity landing page in the primary EDGAR system.
///
/// e.g. `https://www.sec.gov/edgar/browse/?CIK=0000320193`
pub fn get_entity_page_url(cik: u64) -> String {
    with_cik_param(cached_base(&ENTITY_PAGE_BASE, ENTITY_PAGE_URL), "CIK", cik)
}

/// Entity landing page in the auxiliary EDGAR company database.
///
/// e.g. `https://www.edgarcompany.sec.gov/servlet/CompanyDBSearch?page=detailed&main_back=1&cik=0000320193`
pub fn get_entity_page_url_alternate(cik: u64) -> String {
    with_cik_param(
        cached_base(&ENTITY_PAGE_ALTERNATE_BASE, ENTITY_PAGE_ALTERNATE_URL),
        "cik",
        cik,
    )
}

/// Page listing transactions in the entity's securities by insiders.
pub fn get_insider_transactions_page_url(cik: u64) -> String {
    with_cik_param(
        cached_base(&INSIDER_TRANSACTIONS_BASE, INSIDER_TRANSACTIONS_URL),
        "CIK",
        cik,
    )
}

/// Page listing transactions in securities owned by the entity.
pub fn get_owner_transactions_page_url(cik: u64) -> String {
    with_cik_param(
        cached_base(&OWNER_TRANSACTIONS_BASE, OWNER_TRANSACTIONS_URL),
        "CIK",
        cik,
    )
}

/// JSON document with entity metadata and its recent filings.
///
/// e.g. `https://data.sec.gov/submissions/CIK0000320193.json`
pub fn get_entity_json_url(cik: u64) -> String {
    let file_name = format!("CIK{}.json", format_cik(cik));
    with_segments(cached_base(&SUBMISSIONS_BASE, SUBMISSIONS_URL), &[file_name.as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_page_url() {
        assert_eq!(
            get_entity_page_url(320193),
            "https://www.sec.gov/edgar/browse/?CIK=0000320193"
        );
    }

    #[test]
    fn test_entity_page_url_alternate_keeps_fixed_params_first() {
        assert_eq!(
            get_entity_page_url_alternate(320193),
            "https://www.edgarcompany.sec.gov/servlet/CompanyDBSearch?page=detailed&main_back=1&cik=0000320193"
        );
    }

    #[test]
    fn test_insider_and_owner_transactions_urls() {
        assert_eq!(
            get_insider_transactions_page_url(320193),
            "https://www.sec.gov/cgi-bin/own-disp?action=getissuer&CIK=0000320193"
        );
        assert_eq!(
            get_owner_transactions_page_url(320193),
            "https://www.sec.gov/cgi-bin/own-disp?action=getowner&CIK=0000320193"
        );
    }

    #[test]
    fn test_entity_json_url() {
        assert_eq!(
            get_entity_json_url(320193),
            "https://data.sec.gov/submissions/CIK0000320193.json"
        );
    }

    #[test]
    fn test_repeated_calls_do_not_accumulate_params() {
        let first = get_entity_page_url(1);
        let second = get_entity_page_url(2);
        assert_eq!(first, "https://www.sec.gov/edgar/browse/?CIK=0000000001");
        assert_eq!(second, "https://www.sec.gov/edgar/browse/?CIK=0000000002");
    }

    #[test]
    fn test_long_cik_is_not_truncated() {
        assert_eq!(
            get_entity_page_url(12_345_678_901),
            "https://www.sec.gov/edgar/browse/?CIK=12345678901"
        );
    }
}
