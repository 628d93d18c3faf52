use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Accession number does not match `NNNNNNNNNN-YY-NNNNNN`
    #[error("Accession number does not have the correct format: {0}")]
    InvalidAccessionNumber(String),
    /// Resource needs an accession number but none was given
    #[error("Resource '{0}' requires an accession number")]
    MissingAccessionNumber(String),
    /// Resource name is not recognized
    #[error("Unknown resource: {0}")]
    UnknownResource(String),
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// URL could not be built
    #[error("Invalid URL: {0}")]
    UrlError(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
}

// Conversion implementations for common errors
impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
