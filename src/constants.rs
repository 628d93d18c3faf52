// Entity pages
pub const ENTITY_PAGE_URL: &str = "https://www.sec.gov/edgar/browse/";
pub const ENTITY_PAGE_ALTERNATE_URL: &str =
    "https://www.edgarcompany.sec.gov/servlet/CompanyDBSearch?page=detailed&main_back=1";
pub const INSIDER_TRANSACTIONS_URL: &str = "https://www.sec.gov/cgi-bin/own-disp?action=getissuer";
pub const OWNER_TRANSACTIONS_URL: &str = "https://www.sec.gov/cgi-bin/own-disp?action=getowner";
pub const SUBMISSIONS_URL: &str = "https://data.sec.gov/submissions/";

// Filing archive
pub const ARCHIVES_URL: &str = "https://www.sec.gov/Archives/edgar/data/";

// Identifier formats
pub const CIK_WIDTH: usize = 10;
pub const ACCESSION_NUMBER_PATTERN: &str = r"^[0-9]{10}-[0-9]{2}-[0-9]{6,}$";

// Resource aliases
pub const ENTITY_PAGE_ALIASES: &[&str] = &["entity-page", "entity", "browse"];
pub const ENTITY_PAGE_ALTERNATE_ALIASES: &[&str] =
    &["entity-page-alternate", "entity-alt", "company-db"];
pub const INSIDER_TRANSACTIONS_ALIASES: &[&str] = &["insider-transactions", "insider", "issuer"];
pub const OWNER_TRANSACTIONS_ALIASES: &[&str] = &["owner-transactions", "owner"];
pub const ENTITY_JSON_ALIASES: &[&str] = &["entity-json", "json", "submissions"];
pub const FILING_ALIASES: &[&str] = &["filing", "txt"];
pub const FILING_HEADER_ALIASES: &[&str] = &["filing-header", "header", "hdr"];
pub const FILING_PAGE_ALIASES: &[&str] = &["filing-page", "index"];
