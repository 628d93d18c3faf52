use crate::constants::*;
use crate::errors::{AppError, AppResult};
use crate::identifiers::{format_cik, strip_accession_number, validate_accession_number};
use std::fmt;
use std::str::FromStr;

/// Central Index Key of an EDGAR entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cik(u64);

impl Cik {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Cik {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cik(self.0))
    }
}

impl FromStr for Cik {
    type Err = AppError;

    fn from_str(value: &str) -> AppResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::InvalidInput(format!(
                "CIK must contain only digits, got: {value:?}"
            )));
        }
        Ok(Self(trimmed.parse()?))
    }
}

/// Filing accession number in `NNNNNNNNNN-YY-NNNNNN` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessionNumber(String);

impl AccessionNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the accession number without hyphens, e.g. `000032019320000096`.
    pub fn stripped(&self) -> String {
        strip_accession_number(&self.0)
    }
}

impl fmt::Display for AccessionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccessionNumber {
    type Err = AppError;

    fn from_str(value: &str) -> AppResult<Self> {
        validate_accession_number(value)?;
        Ok(Self(value.to_string()))
    }
}

/// EDGAR resource a URL can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    EntityPage,
    EntityPageAlternate,
    InsiderTransactions,
    OwnerTransactions,
    EntityJson,
    Filing,
    FilingHeader,
    FilingPage,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Self::EntityPage,
        Self::EntityPageAlternate,
        Self::InsiderTransactions,
        Self::OwnerTransactions,
        Self::EntityJson,
        Self::Filing,
        Self::FilingHeader,
        Self::FilingPage,
    ];

    /// Returns the canonical kebab-case name of the resource.
    pub fn name(&self) -> &'static str {
        self.aliases()[0]
    }

    /// Whether building this resource's URL needs an accession number.
    pub fn requires_accession(&self) -> bool {
        matches!(self, Self::Filing | Self::FilingHeader | Self::FilingPage)
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::EntityPage => ENTITY_PAGE_ALIASES,
            Self::EntityPageAlternate => ENTITY_PAGE_ALTERNATE_ALIASES,
            Self::InsiderTransactions => INSIDER_TRANSACTIONS_ALIASES,
            Self::OwnerTransactions => OWNER_TRANSACTIONS_ALIASES,
            Self::EntityJson => ENTITY_JSON_ALIASES,
            Self::Filing => FILING_ALIASES,
            Self::FilingHeader => FILING_HEADER_ALIASES,
            Self::FilingPage => FILING_PAGE_ALIASES,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = AppError;

    fn from_str(value: &str) -> AppResult<Self> {
        // Trim whitespace and compare case-insensitively
        let lower = value.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|resource| resource.aliases().contains(&lower.as_str()))
            .ok_or_else(|| AppError::UnknownResource(value.to_string()))
    }
}
