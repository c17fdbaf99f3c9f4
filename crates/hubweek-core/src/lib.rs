//! Core pipeline for the weekly hub staffing digest.
//!
//! One run is a linear pipeline: fetch projects and designers from the
//! remote base, select active focus projects staffed from the target hub,
//! group and render the digest, post it to the chat channel. No state
//! survives a run.

pub mod config;
pub mod digest;
pub mod filter;
pub mod mock;
pub mod run;
pub mod schedule;

pub use config::{Config, ConfigError};
pub use digest::{build_teams, render_digest, week_of, ProjectTeam, TeamMember};
pub use filter::{ProjectFilter, DEFAULT_FOCUS_PROJECTS};
pub use run::{fetch_views, run_digest, RunError, RunOptions, RunOutcome, DEFAULT_HUB};
pub use schedule::{next_weekly_run, sleep_duration};
