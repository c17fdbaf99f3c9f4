//! Process configuration loaded once at startup.
//!
//! All environment lookups happen here, before any network call; every
//! component receives the resulting [`Config`] explicitly.

use thiserror::Error;

use hubweek_airtable::DEFAULT_PROJECTS_TABLE;

/// Environment variable holding the base identifier.
pub const BASE_ID_ENV: &str = "AIRTABLE_BASE_ID";

/// Environment variable holding the personal access token.
pub const TOKEN_ENV: &str = "AIRTABLE_PERSONAL_ACCESS_TOKEN";

/// Environment variable holding the Slack bot token.
pub const SLACK_TOKEN_ENV: &str = "SLACK_BOT_TOKEN";

/// Environment variable holding the target channel id.
pub const SLACK_CHANNEL_ENV: &str = "SLACK_CHANNEL_ID";

/// Optional override for the projects table name.
pub const PROJECTS_TABLE_ENV: &str = "AIRTABLE_TABLE_NAME";

/// Missing required configuration; fatal before any network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub airtable_base_id: String,
    pub airtable_token: String,
    pub slack_bot_token: String,
    pub slack_channel_id: String,
    /// Table holding project records.
    pub projects_table: String,
}

impl Config {
    /// Builds the configuration from the environment, failing fast on any
    /// missing required value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            airtable_base_id: require(BASE_ID_ENV)?,
            airtable_token: require(TOKEN_ENV)?,
            slack_bot_token: require(SLACK_TOKEN_ENV)?,
            slack_channel_id: require(SLACK_CHANNEL_ENV)?,
            projects_table: std::env::var(PROJECTS_TABLE_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PROJECTS_TABLE.to_string()),
        })
    }
}

/// An empty value counts as missing.
fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-global, so every case lives in one
    // test function.
    #[test]
    fn test_from_env() {
        std::env::set_var(BASE_ID_ENV, "appBase");
        std::env::set_var(TOKEN_ENV, "pat.secret");
        std::env::set_var(SLACK_TOKEN_ENV, "xoxb-token");
        std::env::set_var(SLACK_CHANNEL_ENV, "C012345");
        std::env::remove_var(PROJECTS_TABLE_ENV);

        let config = Config::from_env().unwrap();
        assert_eq!(config.airtable_base_id, "appBase");
        assert_eq!(config.projects_table, DEFAULT_PROJECTS_TABLE);

        std::env::set_var(PROJECTS_TABLE_ENV, "Projects");
        let config = Config::from_env().unwrap();
        assert_eq!(config.projects_table, "Projects");

        std::env::set_var(SLACK_CHANNEL_ENV, "");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing(SLACK_CHANNEL_ENV)));
        std::env::set_var(SLACK_CHANNEL_ENV, "C012345");
    }
}
