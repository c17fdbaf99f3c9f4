//! Error types for the Slack notifier.

use thiserror::Error;

/// Errors that can occur posting to Slack.
#[derive(Debug, Error)]
pub enum SlackError {
    /// No channel configured for posting.
    #[error("Slack channel not set. Set SLACK_CHANNEL_ID environment variable.")]
    ChannelUnset,

    /// The Web API answered `ok: false`.
    #[error("Slack API error: {0}")]
    Api(String),

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body was not the JSON shape we expect.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request URL could not be built.
    #[error("Invalid request URL: {0}")]
    Url(String),
}

/// Result type for Slack operations.
pub type Result<T> = std::result::Result<T, SlackError>;

impl From<reqwest::Error> for SlackError {
    fn from(e: reqwest::Error) -> Self {
        SlackError::Http(e.to_string())
    }
}
