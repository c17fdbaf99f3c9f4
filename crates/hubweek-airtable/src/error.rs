//! Error types for the Airtable client.

use thiserror::Error;

/// Errors from the remote tabular-data service.
#[derive(Debug, Error)]
pub enum AirtableError {
    /// The API answered with a non-success status.
    #[error("Airtable API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Transport-level failure (connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body was not the JSON shape we expect.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request URL could not be built from the base id or table name.
    #[error("Invalid request URL: {0}")]
    Url(String),
}

/// Result type for Airtable operations.
pub type Result<T> = std::result::Result<T, AirtableError>;

impl From<reqwest::Error> for AirtableError {
    fn from(e: reqwest::Error) -> Self {
        AirtableError::Http(e.to_string())
    }
}
