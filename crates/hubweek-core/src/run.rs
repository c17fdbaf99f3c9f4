//! One pipeline run: fetch, filter, format, notify.
//!
//! A run is sequential and holds no state; if the remote fetch fails the
//! run degrades to the static mock dataset instead of aborting, so the
//! digest still goes out. The post itself is never retried.

use chrono::Local;
use thiserror::Error;
use tracing::{info, warn};

use hubweek_airtable::AirtableClient;
use hubweek_models::{Designer, Project};
use hubweek_slack::{MentionResolver, PlainResolver, SlackClient, SlackResolver};

use crate::config::Config;
use crate::digest::{build_teams, render_digest, week_of};
use crate::filter::{hub_designer_ids, ProjectFilter, DEFAULT_FOCUS_PROJECTS};
use crate::mock::{mock_assignments, render_assignment_digest};

/// Hub the report covers unless overridden.
pub const DEFAULT_HUB: &str = "San Francisco";

/// Errors surfaced by a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] hubweek_airtable::AirtableError),

    #[error("Notify failed: {0}")]
    Notify(#[from] hubweek_slack::SlackError),
}

/// Result type for run operations.
pub type Result<T> = std::result::Result<T, RunError>;

/// Per-invocation switches for a run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Print the digest instead of posting it.
    pub dry_run: bool,
    /// Skip the remote service and use the mock dataset directly.
    pub use_mock: bool,
    /// Hub whose designers the report covers.
    pub target_hub: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            use_mock: false,
            target_hub: DEFAULT_HUB.to_string(),
        }
    }
}

/// What a run produced.
#[derive(Debug)]
pub struct RunOutcome {
    /// The rendered digest; empty when nothing matched.
    pub message: String,
    /// Whether the digest was posted to the channel.
    pub posted: bool,
}

/// Fetches both tables and normalizes them into typed views.
pub async fn fetch_views(config: &Config) -> Result<(Vec<Project>, Vec<Designer>)> {
    let client = AirtableClient::new(&config.airtable_base_id, &config.airtable_token);
    fetch_views_with(&client, config).await
}

async fn fetch_views_with(
    client: &AirtableClient,
    config: &Config,
) -> Result<(Vec<Project>, Vec<Designer>)> {
    let projects = client.fetch_projects(&config.projects_table).await?;
    let designers = client.fetch_designers().await?;
    info!(
        projects = projects.len(),
        designers = designers.len(),
        "fetched records"
    );

    Ok((
        projects.iter().map(Project::from_record).collect(),
        designers.iter().map(Designer::from_record).collect(),
    ))
}

/// Executes one full run.
///
/// An empty digest skips the post and still counts as success.
pub async fn run_digest(config: &Config, options: &RunOptions) -> Result<RunOutcome> {
    let client = AirtableClient::new(&config.airtable_base_id, &config.airtable_token);
    let message = build_message(&client, config, options).await?;

    if message.is_empty() {
        info!("no projects with matching designers, skipping post");
        return Ok(RunOutcome {
            message,
            posted: false,
        });
    }

    if options.dry_run {
        return Ok(RunOutcome {
            message,
            posted: false,
        });
    }

    let slack = SlackClient::new(&config.slack_bot_token);
    slack
        .post_message(&config.slack_channel_id, &message)
        .await?;
    info!(channel = %config.slack_channel_id, "weekly digest posted");

    Ok(RunOutcome {
        message,
        posted: true,
    })
}

async fn build_message(
    client: &AirtableClient,
    config: &Config,
    options: &RunOptions,
) -> Result<String> {
    let report_date = week_of(Local::now().date_naive());

    if options.use_mock {
        return Ok(render_assignment_digest(&mock_assignments(), report_date));
    }

    let (projects, designers) = match fetch_views_with(client, config).await {
        Ok(views) => views,
        Err(e) => {
            warn!(error = %e, "remote fetch failed, falling back to mock dataset");
            return Ok(render_assignment_digest(&mock_assignments(), report_date));
        }
    };

    let filter = ProjectFilter::new()
        .active_only()
        .with_name_prefixes(DEFAULT_FOCUS_PROJECTS.iter().copied())
        .with_designer_ids(hub_designer_ids(&designers, &options.target_hub));
    let selected: Vec<Project> = projects.into_iter().filter(|p| filter.matches(p)).collect();
    info!(selected = selected.len(), hub = %options.target_hub, "selected projects");

    let teams = build_teams(&selected, &designers, &options.target_hub);
    let resolver: Box<dyn MentionResolver> = if options.dry_run {
        Box::new(PlainResolver)
    } else {
        Box::new(SlackResolver::new(SlackClient::new(
            &config.slack_bot_token,
        )))
    };

    Ok(render_digest(&teams, resolver.as_ref(), report_date).await)
}
