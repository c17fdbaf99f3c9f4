//! Raw record shape returned by the tabular-data API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single raw record: an opaque id plus a free-form field map.
///
/// Fields the views do not understand stay in `fields` and are ignored;
/// deserialization never fails on extra or missing attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Creates a record from an id and a field map.
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_unknown_fields() {
        let record: Record = serde_json::from_str(
            r#"{"id": "rec1", "fields": {"Name": "Jane", "Mystery": [1, 2]}}"#,
        )
        .unwrap();

        assert_eq!(record.id, "rec1");
        assert_eq!(record.fields["Name"], "Jane");
    }

    #[test]
    fn test_deserialize_without_fields() {
        let record: Record = serde_json::from_str(r#"{"id": "rec2"}"#).unwrap();
        assert!(record.fields.is_empty());
    }
}
