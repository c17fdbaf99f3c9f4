//! Grouping and formatting pipeline for the weekly digest.
//!
//! Selected projects are sorted, their designer references resolved against
//! the designer index, deduplicated by display name, and rendered as one
//! line per project under a dated header.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use futures::future::join_all;

use hubweek_models::{Designer, Project};
use hubweek_slack::MentionResolver;

/// One line of the digest: a project and its target-hub team.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTeam {
    /// Display name with the trailing numeric code stripped.
    pub name: String,
    /// Deduplicated team, in reference order.
    pub designers: Vec<TeamMember>,
}

/// A designer kept for mention rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub email: Option<String>,
}

/// Groups selected projects with their target-hub designers.
///
/// Projects are ordered by lower-cased display name (ties keep input
/// order). A designer referenced twice, or two references resolving to the
/// same display name, appears once: the first name/email pair seen wins.
/// Projects with no matching designer are dropped.
pub fn build_teams(
    projects: &[Project],
    designers: &[Designer],
    target_hub: &str,
) -> Vec<ProjectTeam> {
    let index: HashMap<&str, &Designer> =
        designers.iter().map(|d| (d.id.as_str(), d)).collect();

    let mut sorted: Vec<&Project> = projects.iter().collect();
    sorted.sort_by_key(|p| p.name.to_lowercase());

    let mut teams = Vec::new();
    for project in sorted {
        let mut members: Vec<TeamMember> = Vec::new();
        for designer_id in project.designer_refs() {
            let Some(designer) = index.get(designer_id.as_str()) else {
                continue;
            };
            if !designer.matches_hub(target_hub) || designer.name.is_empty() {
                continue;
            }
            if members.iter().any(|m| m.name == designer.name) {
                continue;
            }
            members.push(TeamMember {
                name: designer.name.clone(),
                email: designer.email.clone(),
            });
        }

        if !members.is_empty() {
            teams.push(ProjectTeam {
                name: project.stripped_name(),
                designers: members,
            });
        }
    }

    teams
}

/// The Monday the digest reports on: always the next Monday.
///
/// Run on a Monday, the digest covers the following week; the scheduled
/// Monday-morning run therefore always announces the week being planned.
pub fn week_of(today: NaiveDate) -> NaiveDate {
    let days_ahead = 7 - i64::from(today.weekday().num_days_from_monday());
    today + chrono::Duration::days(days_ahead)
}

/// Header line shared by the live and mock digest formats.
pub fn digest_header(week_of: NaiveDate) -> String {
    format!(
        ":disco-ball-still: Projects Week of {}",
        format_short_date(week_of)
    )
}

/// Locale-style numeric date: month/day/2-digit year, no zero padding.
fn format_short_date(date: NaiveDate) -> String {
    format!("{}/{}/{:02}", date.month(), date.day(), date.year() % 100)
}

/// Renders the digest message, resolving mentions as a concurrent batch.
///
/// Mention lookups for different designers complete in any order; the
/// rendered message preserves input order. Returns an empty string when no
/// project has a matching designer, in which case the caller skips posting.
pub async fn render_digest(
    teams: &[ProjectTeam],
    resolver: &dyn MentionResolver,
    week_of: NaiveDate,
) -> String {
    if teams.is_empty() {
        return String::new();
    }

    let lines = join_all(teams.iter().map(|team| async move {
        let mentions = join_all(
            team.designers
                .iter()
                .map(|member| resolver.resolve(&member.name, member.email.as_deref())),
        )
        .await;
        format!("- {} {}", team.name, mentions.join(" "))
    }))
    .await;

    format!("{}\n\n{}", digest_header(week_of), lines.join("\n"))
}
