//! Slack Web API client.

use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::{Result, SlackError};

/// Production Web API root.
pub const DEFAULT_API_ROOT: &str = "https://slack.com/api";

/// Authenticated Slack Web API client.
#[derive(Debug, Clone)]
pub struct SlackClient {
    http: reqwest::Client,
    api_root: String,
    token: String,
}

impl SlackClient {
    /// Creates a client with the given bot token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_root: DEFAULT_API_ROOT.to_string(),
            token: token.into(),
        }
    }

    /// Overrides the API root (local test servers).
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// Looks up a workspace user id by email.
    ///
    /// Returns `Ok(None)` when no user carries that email; that is a lookup
    /// miss, not an error.
    pub async fn lookup_user_by_email(&self, email: &str) -> Result<Option<String>> {
        let mut url = self.method_url("users.lookupByEmail")?;
        url.query_pairs_mut().append_pair("email", email);

        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;

        let body: serde_json::Value = response.json().await?;
        let id = parse_lookup_response(&body)?;
        debug!(email = %email, user_id = ?id, "resolved Slack user");
        Ok(id)
    }

    /// Posts a message to a channel with rich-text markup enabled.
    pub async fn post_message(&self, channel: &str, text: &str) -> Result<()> {
        if channel.is_empty() {
            return Err(SlackError::ChannelUnset);
        }

        let url = self.method_url("chat.postMessage")?;
        let response = self
            .http
            .post(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&json!({
                "channel": channel,
                "text": text,
                "mrkdwn": true,
            }))
            .send()
            .await?;

        let body: serde_json::Value = response.json().await?;
        parse_post_response(&body)?;
        debug!(channel = %channel, "message posted");
        Ok(())
    }

    fn method_url(&self, method: &str) -> Result<Url> {
        let mut url =
            Url::parse(&self.api_root).map_err(|e| SlackError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SlackError::Url(self.api_root.clone()))?
            .push(method);
        Ok(url)
    }
}

/// Interprets a `users.lookupByEmail` body.
///
/// `users_not_found` is a lookup miss, not an error; any other `ok: false`
/// body is. A body with neither `ok` nor `error` is malformed.
fn parse_lookup_response(body: &serde_json::Value) -> Result<Option<String>> {
    if body["ok"].as_bool() == Some(true) {
        return Ok(body["user"]["id"].as_str().map(|s| s.to_string()));
    }

    match body["error"].as_str() {
        Some("users_not_found") => Ok(None),
        Some(error) => Err(SlackError::Api(error.to_string())),
        None => Err(SlackError::Api("malformed response".to_string())),
    }
}

/// Interprets a `chat.postMessage` body.
fn parse_post_response(body: &serde_json::Value) -> Result<()> {
    if body["ok"].as_bool() == Some(true) {
        Ok(())
    } else {
        let error = body["error"].as_str().unwrap_or("malformed response");
        Err(SlackError::Api(error.to_string()))
    }
}
