//! Field-alias lookup over raw record field maps.
//!
//! The same semantic attribute has accumulated several historical field
//! names in the base (`Hub` vs `Location (WD)`, plain vs emoji-suffixed
//! email columns). Accessors here take an ordered alias list; the first
//! alias that is present wins. Multi-valued attributes tolerate both a
//! scalar and a list on the wire: a scalar is a single-element set.

use serde_json::{Map, Value};

/// Extracts a scalar string from a value.
///
/// A list-valued field yields its first string element, matching how the
/// base stores rollup fields such as emails.
pub fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(|v| match v {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }),
        _ => None,
    }
}

/// Extracts a string set from a value, treating a scalar as a singleton.
pub fn as_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.clone()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Returns the first non-empty string found under any of the aliases.
pub fn first_string(fields: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|alias| fields.get(*alias))
        .filter_map(as_string)
        .find(|s| !s.is_empty())
}

/// Returns the first non-empty string, or `default` when no alias matches.
pub fn string_or(fields: &Map<String, Value>, aliases: &[&str], default: &str) -> String {
    first_string(fields, aliases).unwrap_or_else(|| default.to_string())
}

/// Returns the value list of the first present alias.
///
/// An alias that is present but empty still wins over later aliases; the
/// base uses empty lists to mean "no entries", not "field absent".
pub fn string_list(fields: &Map<String, Value>, aliases: &[&str]) -> Vec<String> {
    aliases
        .iter()
        .find_map(|alias| fields.get(*alias))
        .map(as_string_list)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_first_string_alias_priority() {
        let f = fields(json!({"Name": "Fallback", "Table Designer List": "Jane Doe"}));
        assert_eq!(
            first_string(&f, &["Table Designer List", "Name"]),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_first_string_skips_empty_values() {
        let f = fields(json!({"Table Designer List": "", "Name": "Jane Doe"}));
        assert_eq!(
            first_string(&f, &["Table Designer List", "Name"]),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_first_string_takes_first_list_element() {
        let f = fields(json!({"Email (WD) 📡": ["jane@x.com", "old@x.com"]}));
        assert_eq!(
            first_string(&f, &["Email (WD) 📡", "Email (WD)"]),
            Some("jane@x.com".to_string())
        );
    }

    #[test]
    fn test_string_list_scalar_is_singleton() {
        let f = fields(json!({"Hub": "San Francisco"}));
        assert_eq!(string_list(&f, &["Hub"]), vec!["San Francisco"]);
    }

    #[test]
    fn test_string_list_present_empty_wins() {
        let f = fields(json!({"Locked Designers": [], "Locked Designers 🧩": ["d1"]}));
        assert!(string_list(&f, &["Locked Designers", "Locked Designers 🧩"]).is_empty());
    }

    #[test]
    fn test_missing_alias_defaults() {
        let f = fields(json!({}));
        assert_eq!(string_or(&f, &["Role Type"], "Not specified"), "Not specified");
        assert!(string_list(&f, &["Hub"]).is_empty());
    }
}
