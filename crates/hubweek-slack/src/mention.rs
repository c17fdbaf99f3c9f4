//! Mention resolution with plain-text fallback.
//!
//! A mention degrades, never fails: missing email, lookup miss and lookup
//! error all render as literal `@name` text.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::client::SlackClient;

/// Literal fallback mention used whenever identity resolution fails.
pub fn fallback_mention(name: &str) -> String {
    format!("@{name}")
}

/// Resolves a person's display name (and optional email) to a mention.
#[async_trait]
pub trait MentionResolver: Send + Sync {
    async fn resolve(&self, name: &str, email: Option<&str>) -> String;
}

/// Resolver that never touches the network; used for dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainResolver;

#[async_trait]
impl MentionResolver for PlainResolver {
    async fn resolve(&self, name: &str, _email: Option<&str>) -> String {
        fallback_mention(name)
    }
}

/// Resolver backed by the Slack identity lookup.
#[derive(Debug, Clone)]
pub struct SlackResolver {
    client: SlackClient,
}

impl SlackResolver {
    pub fn new(client: SlackClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MentionResolver for SlackResolver {
    async fn resolve(&self, name: &str, email: Option<&str>) -> String {
        let Some(email) = email else {
            debug!(name = %name, "no email on record, using plain mention");
            return fallback_mention(name);
        };

        match self.client.lookup_user_by_email(email).await {
            Ok(Some(user_id)) => format!("<@{user_id}>"),
            Ok(None) => {
                debug!(name = %name, email = %email, "no Slack user for email");
                fallback_mention(name)
            }
            Err(e) => {
                warn!(name = %name, email = %email, error = %e, "mention lookup failed");
                fallback_mention(name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_mention() {
        assert_eq!(fallback_mention("Jane Doe"), "@Jane Doe");
    }

    #[tokio::test]
    async fn test_plain_resolver_ignores_email() {
        let resolver = PlainResolver;
        assert_eq!(
            resolver.resolve("Jane Doe", Some("jane@x.com")).await,
            "@Jane Doe"
        );
    }

    #[tokio::test]
    async fn test_slack_resolver_without_email_skips_network() {
        // Unroutable API root: the resolver must return before any request.
        let client = SlackClient::new("xoxb-token").with_api_root("http://127.0.0.1:1");
        let resolver = SlackResolver::new(client);
        assert_eq!(resolver.resolve("Jane Doe", None).await, "@Jane Doe");
    }
}
