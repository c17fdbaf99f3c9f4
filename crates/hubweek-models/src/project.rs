//! Typed view over project records.

use std::sync::OnceLock;

use regex::Regex;

use crate::fields;
use crate::record::Record;

/// Field aliases for the project display name.
pub const NAME_FIELDS: &[&str] = &["Project Name (Editable)"];

/// Field aliases for the status tag list, newest naming first.
pub const STATUS_FIELDS: &[&str] = &["Project Status (WD)", "Project Status"];

/// Field aliases for the region tag(s).
pub const REGION_FIELDS: &[&str] = &["Region (WD)"];

/// Field aliases for the locked designer reference list.
pub const LOCKED_DESIGNER_FIELDS: &[&str] = &["Locked Designers", "Locked Designers 🧩"];

/// Field aliases for the open-role / added designer reference list.
pub const ADDED_DESIGNER_FIELDS: &[&str] = &["Open Roles & Added Designers (Complete)"];

/// A project snapshot: read-only per run, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: Vec<String>,
    pub regions: Vec<String>,
    /// Designer record ids in the "locked" role.
    pub locked_designers: Vec<String>,
    /// Designer record ids in the "open roles / added" role.
    pub added_designers: Vec<String>,
}

impl Project {
    /// Builds the view from a raw record, defaulting absent fields.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            name: fields::string_or(&record.fields, NAME_FIELDS, ""),
            status: fields::string_list(&record.fields, STATUS_FIELDS),
            regions: fields::string_list(&record.fields, REGION_FIELDS),
            locked_designers: fields::string_list(&record.fields, LOCKED_DESIGNER_FIELDS),
            added_designers: fields::string_list(&record.fields, ADDED_DESIGNER_FIELDS),
        }
    }

    /// True iff any status tag equals "Active", case-insensitively.
    ///
    /// An empty or missing status list means not active.
    pub fn is_active(&self) -> bool {
        self.status.iter().any(|s| s.eq_ignore_ascii_case("active"))
    }

    /// Region tags joined for display, or a placeholder when untagged.
    pub fn region_label(&self) -> String {
        if self.regions.is_empty() {
            "Not specified".to_string()
        } else {
            self.regions.join(", ")
        }
    }

    /// All designer references across both roles, locked first.
    pub fn designer_refs(&self) -> impl Iterator<Item = &String> {
        self.locked_designers
            .iter()
            .chain(self.added_designers.iter())
    }

    /// Display name with a trailing parenthesized numeric code removed.
    ///
    /// `"Foo Bar (100001522)"` becomes `"Foo Bar"`; names without a code
    /// are unchanged. The code is presentation noise only.
    pub fn stripped_name(&self) -> String {
        static CODE_SUFFIX: OnceLock<Regex> = OnceLock::new();
        let re = CODE_SUFFIX.get_or_init(|| Regex::new(r" \(\d+\)$").expect("valid regex"));
        re.replace(&self.name, "").into_owned()
    }
}
