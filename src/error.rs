use thiserror::Error;

/// Fatal errors while ingesting a contact file
///
/// Problems confined to a single data row are not errors at this level; they
/// are collected as [`crate::ingest::RowError`] values and parsing continues.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Missing required header. Expected one of {candidates:?}")]
    MissingRequiredHeader { candidates: Vec<String> },

    #[error("Failed to read contact file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed contact file: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("You must specify either a first name and last name or an email address")]
    InvalidCriteria,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No API key found. Pass --api-key or set GOPHISH_API_KEY (a .env file is honoured)")]
    MissingApiKey,

    #[error("Invalid instance URL '{input}': {reason}")]
    InvalidInstance { input: String, reason: String },

    #[error("Invalid delimiter '{0}': expected a single ASCII character")]
    InvalidDelimiter(String),
}
