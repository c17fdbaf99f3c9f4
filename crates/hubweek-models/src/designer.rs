//! Typed view over designer records.

use crate::fields;
use crate::record::Record;

/// Field aliases for the designer display name, preferred naming first.
pub const NAME_FIELDS: &[&str] = &["Table Designer List", "Name", "Full Name"];

/// Field aliases for the hub / location tag(s).
pub const HUB_FIELDS: &[&str] = &["Hub", "Location (WD)", "Location (General)"];

/// Field aliases for the email; the rollup variant is a list.
pub const EMAIL_FIELDS: &[&str] = &["Email (WD) 📡", "Email (WD)"];

/// A designer snapshot: read-only per run, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Designer {
    pub id: String,
    pub name: String,
    pub hubs: Vec<String>,
    pub email: Option<String>,
}

impl Designer {
    /// Builds the view from a raw record, defaulting absent fields.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            name: fields::string_or(&record.fields, NAME_FIELDS, ""),
            hubs: fields::string_list(&record.fields, HUB_FIELDS),
            email: fields::first_string(&record.fields, EMAIL_FIELDS),
        }
    }

    /// True iff `target` appears in the hub set, exact case.
    ///
    /// A designer with no hub value never matches.
    pub fn matches_hub(&self, target: &str) -> bool {
        self.hubs.iter().any(|h| h == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn designer(fields: serde_json::Value) -> Designer {
        let record = Record::new("recD", fields.as_object().cloned().unwrap());
        Designer::from_record(&record)
    }

    #[test]
    fn test_name_alias_priority() {
        let d = designer(json!({"Name": "J. Doe", "Table Designer List": "Jane Doe"}));
        assert_eq!(d.name, "Jane Doe");

        let d = designer(json!({"Full Name": "Jane Doe"}));
        assert_eq!(d.name, "Jane Doe");
    }

    #[test]
    fn test_matches_hub_scalar_and_list() {
        let d = designer(json!({"Hub": "San Francisco"}));
        assert!(d.matches_hub("San Francisco"));

        let d = designer(json!({"Hub": ["Chicago", "San Francisco"]}));
        assert!(d.matches_hub("San Francisco"));
    }

    #[test]
    fn test_matches_hub_is_case_sensitive() {
        let d = designer(json!({"Hub": ["san francisco"]}));
        assert!(!d.matches_hub("San Francisco"));
    }

    #[test]
    fn test_no_hub_never_matches() {
        let d = designer(json!({"Name": "Jane Doe"}));
        assert!(!d.matches_hub("San Francisco"));
    }

    #[test]
    fn test_email_first_list_element_wins() {
        let d = designer(json!({"Email (WD) 📡": ["jane@x.com", "jane@old.com"]}));
        assert_eq!(d.email.as_deref(), Some("jane@x.com"));
    }

    #[test]
    fn test_email_scalar_fallback() {
        let d = designer(json!({"Email (WD)": "jane@x.com"}));
        assert_eq!(d.email.as_deref(), Some("jane@x.com"));
    }

    #[test]
    fn test_missing_email_is_none() {
        let d = designer(json!({"Name": "Jane Doe"}));
        assert!(d.email.is_none());
    }
}
