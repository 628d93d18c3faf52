use crate::errors::{AppError, AppResult};
use crate::models::{AccessionNumber, Cik, Resource};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A single URL request as written in a TOML batch file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UrlRequestEntry {
    /// Resource name or alias, e.g. `"filing"`, `"hdr"`, `"entity-json"`
    pub resource: String,
    /// Central Index Key of the entity
    pub cik: u64,
    /// Accession number, required by filing resources
    #[serde(default)]
    pub accession: Option<String>,
}

/// Batch of URL requests that can be loaded from a TOML file.
///
/// ```toml
/// [[requests]]
/// resource = "filing"
/// cik = 320193
/// accession = "0000320193-20-000096"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfigFile {
    #[serde(default)]
    pub requests: Vec<UrlRequestEntry>,
}

/// A request whose resource name has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRequest {
    pub resource: Resource,
    pub cik: Cik,
    pub accession: Option<AccessionNumber>,
}

impl BatchConfigFile {
    /// Loads and validates a batch file.
    ///
    /// Rejects unknown keys to prevent typos from being silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, `InvalidInput` if the TOML is
    /// malformed or contains no requests, and `UnknownResource`,
    /// `MissingAccessionNumber` or `InvalidAccessionNumber` for a request that
    /// cannot be resolved.
    pub fn from_toml_file(path: &Path) -> AppResult<Vec<UrlRequest>> {
        let contents = fs::read_to_string(path)?;
        let config: BatchConfigFile = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        config.resolve()
    }

    /// Resolves every entry, failing on the first invalid one.
    pub fn resolve(self) -> AppResult<Vec<UrlRequest>> {
        if self.requests.is_empty() {
            return Err(AppError::InvalidInput(
                "Config must contain at least one [[requests]] entry".into(),
            ));
        }

        self.requests
            .into_iter()
            .map(|entry| {
                let resource: Resource = entry.resource.parse()?;
                if resource.requires_accession() && entry.accession.is_none() {
                    return Err(AppError::MissingAccessionNumber(resource.name().to_string()));
                }
                let accession = entry
                    .accession
                    .map(|a| a.parse::<AccessionNumber>())
                    .transpose()?;
                Ok(UrlRequest {
                    resource,
                    cik: Cik::new(entry.cik),
                    accession,
                })
            })
            .collect()
    }
}
