//! Typed view over assignment records (mock fallback path).

use crate::fields;
use crate::record::Record;

/// Field aliases for the composite assignment title.
pub const TITLE_FIELDS: &[&str] = &["Title: Designer, Discipline, Journey"];

/// Field aliases for the home-project display string.
pub const HOME_PROJECT_FIELDS: &[&str] = &["Home Project (input/automation add)"];

/// Field aliases for the role type tag.
pub const ROLE_TYPE_FIELDS: &[&str] = &["Role Type"];

/// Field aliases for the start/end date strings.
pub const START_DATE_FIELDS: &[&str] = &["Start Date"];
pub const END_DATE_FIELDS: &[&str] = &["End Date"];

/// Field aliases for the project manager name.
pub const PROJECT_MANAGER_FIELDS: &[&str] = &["Project Manager (WO)"];

/// A staffing assignment: one person on one home project.
///
/// Dates stay opaque strings; no structure is imposed beyond the composite
/// title, whose first comma-separated segment is the person's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub home_project: String,
    pub role_type: String,
    pub start_date: String,
    pub end_date: String,
    pub project_manager: String,
}

impl Assignment {
    /// Builds the view from a raw record, defaulting absent fields.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            title: fields::string_or(&record.fields, TITLE_FIELDS, "Unnamed"),
            home_project: fields::string_or(&record.fields, HOME_PROJECT_FIELDS, "Not specified"),
            role_type: fields::string_or(&record.fields, ROLE_TYPE_FIELDS, "Not specified"),
            start_date: fields::string_or(&record.fields, START_DATE_FIELDS, "Not specified"),
            end_date: fields::string_or(&record.fields, END_DATE_FIELDS, "Not specified"),
            project_manager: fields::string_or(&record.fields, PROJECT_MANAGER_FIELDS, ""),
        }
    }

    /// The person's name: the first segment of the composite title.
    pub fn person_name(&self) -> &str {
        self.title
            .split(',')
            .next()
            .unwrap_or(&self.title)
            .trim_end()
    }
}
