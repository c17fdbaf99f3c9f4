//! Static fallback dataset and its digest format.
//!
//! When the remote base is unreachable the run substitutes these
//! assignments and still produces a digest, grouped by home project with a
//! plain `@name` per person.

use chrono::NaiveDate;
use serde_json::json;

use hubweek_models::{Assignment, Record};

use crate::digest::digest_header;

/// Simulated assignment records in the wire shape.
pub fn mock_records() -> Vec<Record> {
    let rows = [
        ("rec1", "AJ Mapes VidCom, Director", "Sigma Alimentos: The Studio (10000121D)", "Confirmed", "Core", "3/31/2025", "5/16/2025", ""),
        ("rec2", "Amina Jambo DR, Team", "IDEO Thinking Page Redesign", "Confirmed: In Progress", "Core", "3/11/2025", "4/18/2025", ""),
        ("rec3", "Andreas Yanklow HO, Team", "Builders Vision - Innovation Engine (100001522)", "Confirmed", "Core", "3/3/2025", "4/25/2025", "Nazlican Goksu"),
        ("rec4", "Angela Kochoska DS, Team", "Sony SIE Special Project: (TinkerToo) (100001263)", "Confirmed", "Core", "3/31/2025", "4/25/2025", "Cory Seeger"),
        ("rec5", "Anya Shapiro B&D, Team", "Builders Vision - Innovation Engine (100001522)", "Confirmed", "Core", "3/3/2025", "4/25/2025", "Nazlican Goksu"),
        ("rec6", "Becca Carroll B&D, Enterprise", "Builders Vision - Innovation Engine (100001522)", "Confirmed", "25%", "2/3/2025", "7/25/2025", "Nazlican Goksu"),
        ("rec7", "Bianca Jimenez Rivera DR, Senior Team", "Sigma Alimentos: The Studio (10000121D)", "Confirmed", "Core", "11/1/2024", "12/31/2025", ""),
        ("rec8", "Brian Pelsoh VidCom, Enterprise", "CalMHSA BHSA Planning Process Redesign (100001548)", "Confirmed: Opening", "Guide", "1/13/2025", "5/9/2025", ""),
        ("rec9", "Cory Seeger Env, Director", "Sony SIE Special Project: (TinkerToo) (100001263)", "Confirmed", "Core", "12/2/2024", "7/11/2025", "Cory Seeger"),
        ("rec10", "Jesse Fourt ME, Enterprise", "Exact Sciences Cologuard Experience & Product Design", "Confirmed: Opening", "Guide", "2/25/2025", "7/18/2025", "Dyan Lok"),
    ];

    rows.iter()
        .map(|(id, title, project, status, role, start, end, manager)| {
            let fields = json!({
                "Title: Designer, Discipline, Journey": title,
                "Home Project (input/automation add)": project,
                "Status": status,
                "Role Type": role,
                "Start Date": start,
                "End Date": end,
                "Project Manager (WO)": manager,
            });
            Record::new(*id, fields.as_object().cloned().unwrap_or_default())
        })
        .collect()
}

/// The simulated records as typed assignments.
pub fn mock_assignments() -> Vec<Assignment> {
    mock_records().iter().map(Assignment::from_record).collect()
}

/// Renders the fallback digest: assignments grouped by home project.
///
/// Groups keep first-seen order; each person appears as a plain `@name`
/// mention taken from the composite title.
pub fn render_assignment_digest(assignments: &[Assignment], week_of: NaiveDate) -> String {
    let mut groups: Vec<(&str, Vec<&Assignment>)> = Vec::new();
    for assignment in assignments {
        match groups
            .iter_mut()
            .find(|(project, _)| *project == assignment.home_project)
        {
            Some((_, members)) => members.push(assignment),
            None => groups.push((assignment.home_project.as_str(), vec![assignment])),
        }
    }

    let lines: Vec<String> = groups
        .iter()
        .map(|(project, members)| {
            let mentions: Vec<String> = members
                .iter()
                .map(|a| format!("@{}", a.person_name()))
                .collect();
            format!("- {} {}", project, mentions.join(" "))
        })
        .collect();

    format!("{}\n\n{}", digest_header(week_of), lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_assignments_shape() {
        let assignments = mock_assignments();
        assert_eq!(assignments.len(), 10);
        assert_eq!(assignments[0].person_name(), "AJ Mapes VidCom");
        assert_eq!(assignments[2].project_manager, "Nazlican Goksu");
    }

    #[test]
    fn test_mock_records_carry_per_row_statuses() {
        let records = mock_records();
        let status = |i: usize| records[i].fields["Status"].as_str().unwrap();

        assert_eq!(status(1), "Confirmed: In Progress");
        assert_eq!(status(7), "Confirmed: Opening");
        assert_eq!(status(9), "Confirmed: Opening");
        assert_eq!(status(0), "Confirmed");
    }

    #[test]
    fn test_assignment_digest_groups_by_home_project() {
        let assignments = mock_assignments();
        let date = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap();
        let message = render_assignment_digest(&assignments, date);

        assert!(message.starts_with(":disco-ball-still: Projects Week of 4/14/25"));
        // Three Builders Vision assignments collapse into one line.
        let builders: Vec<&str> = message
            .lines()
            .filter(|l| l.contains("Builders Vision"))
            .collect();
        assert_eq!(builders.len(), 1);
        assert!(builders[0].contains("@Andreas Yanklow HO"));
        assert!(builders[0].contains("@Anya Shapiro B&D"));
        assert!(builders[0].contains("@Becca Carroll B&D"));
    }

    #[test]
    fn test_assignment_digest_not_empty() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap();
        assert!(!render_assignment_digest(&mock_assignments(), date).is_empty());
    }
}
