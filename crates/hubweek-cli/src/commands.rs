//! Command handlers for CLI subcommands.

use chrono::Local;
use tracing::{error, info, warn};

use hubweek_airtable::AirtableClient;
use hubweek_core::{
    build_teams, fetch_views, next_weekly_run, run_digest, sleep_duration, Config, ProjectFilter,
    RunOptions, DEFAULT_FOCUS_PROJECTS,
};
use hubweek_core::filter::hub_designer_ids;
use hubweek_core::mock::mock_assignments;
use hubweek_models::Project;

use crate::cli::Commands;

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command.
pub async fn execute(command: Commands, config: &Config, hub: &str) -> Result<()> {
    match command {
        Commands::Tables => cmd_tables(config).await,
        Commands::Designers => cmd_designers(config).await,
        Commands::Projects => cmd_projects(config, hub).await,
        Commands::Post { test, use_mock } => cmd_post(config, hub, test, use_mock).await,
        Commands::Run { test, use_mock } => cmd_run(config, hub, test, use_mock).await,
        Commands::Check => cmd_check(config).await,
    }
}

async fn cmd_tables(config: &Config) -> Result<()> {
    let client = AirtableClient::new(&config.airtable_base_id, &config.airtable_token);
    let tables = client.list_tables().await?;

    println!("Found {} tables:", tables.len());
    for table in tables {
        println!("- {} ({})", table.name, table.id);
    }
    Ok(())
}

async fn cmd_designers(config: &Config) -> Result<()> {
    let (_, designers) = fetch_views(config).await?;

    println!("Found {} designers:", designers.len());
    for designer in designers {
        let hub = if designer.hubs.is_empty() {
            "Not specified".to_string()
        } else {
            designer.hubs.join(", ")
        };
        let email = designer.email.as_deref().unwrap_or("-");
        println!("- {} | {} | {}", designer.name, hub, email);
    }
    Ok(())
}

async fn cmd_projects(config: &Config, hub: &str) -> Result<()> {
    let (projects, designers) = fetch_views(config).await?;

    let filter = ProjectFilter::new()
        .active_only()
        .with_name_prefixes(DEFAULT_FOCUS_PROJECTS.iter().copied())
        .with_designer_ids(hub_designer_ids(&designers, hub));
    let selected: Vec<Project> = projects.into_iter().filter(|p| filter.matches(p)).collect();

    println!(
        "Found {} active focus projects with {} designers:",
        selected.len(),
        hub
    );
    for team in build_teams(&selected, &designers, hub) {
        let region = selected
            .iter()
            .find(|p| p.stripped_name() == team.name)
            .map(Project::region_label)
            .unwrap_or_else(|| "Not specified".to_string());
        let names: Vec<&str> = team.designers.iter().map(|m| m.name.as_str()).collect();
        println!("- {} [{}]: {}", team.name, region, names.join(", "));
    }
    Ok(())
}

async fn cmd_post(config: &Config, hub: &str, test: bool, use_mock: bool) -> Result<()> {
    let options = RunOptions {
        dry_run: test,
        use_mock,
        target_hub: hub.to_string(),
    };
    let outcome = run_digest(config, &options).await?;

    if outcome.message.is_empty() {
        println!("Nothing to report, no message posted.");
    } else if outcome.posted {
        println!("Digest posted to {}.", config.slack_channel_id);
    } else {
        println!("{}", outcome.message);
    }
    Ok(())
}

async fn cmd_run(config: &Config, hub: &str, test: bool, use_mock: bool) -> Result<()> {
    // Run once immediately, then settle into the weekly schedule.
    if let Err(e) = cmd_post(config, hub, test, use_mock).await {
        error!(error = %e, "run failed");
    }

    loop {
        let now = Local::now().naive_local();
        let next = next_weekly_run(now);
        info!(next_run = %next, "sleeping until next scheduled run");

        tokio::select! {
            _ = tokio::time::sleep(sleep_duration(now, next)) => {
                if let Err(e) = cmd_post(config, hub, test, use_mock).await {
                    error!(error = %e, "scheduled run failed");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, stopping scheduler");
                break;
            }
        }
    }
    Ok(())
}

async fn cmd_check(config: &Config) -> Result<()> {
    let client = AirtableClient::new(&config.airtable_base_id, &config.airtable_token);

    println!("Checking base access...");
    match client.list_tables().await {
        Ok(tables) => println!("Schema access ok, {} tables visible.", tables.len()),
        Err(e) => {
            warn!(error = %e, "schema endpoint not accessible");
            println!("Could not access schema; trying direct table access.");
        }
    }

    let mut any_accessible = false;
    for table in [config.projects_table.as_str(), "Current Assignments"] {
        match client.probe_table(table).await {
            Ok(records) => {
                any_accessible = true;
                let fields: Vec<&String> = records
                    .first()
                    .map(|r| r.fields.keys().collect())
                    .unwrap_or_default();
                println!("Table \"{}\" accessible. Sample fields: {:?}", table, fields);
            }
            Err(e) => println!("Table \"{}\" not accessible: {}", table, e),
        }
    }

    if !any_accessible {
        let mock = mock_assignments();
        println!(
            "No table accessible; {} mock assignments are available as fallback.",
            mock.len()
        );
    }
    Ok(())
}
