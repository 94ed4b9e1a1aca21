// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// One row of a tabular file, represented as a schema-less
// document: a mapping from column name to scalar value.
//
// The converter (Layer 4) builds Records from CSV rows, the
// bulk loader (Layer 6) serialises them into the document
// store. Between those two points a Record is never mutated.
//
// Scalars are serde_json::Value restricted by construction to
// Null, Number, and String — the converter's inference rules
// never produce arrays or nested objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single row as a column → scalar mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Record {
    fields: serde_json::Map<String, Value>,
}

impl Record {
    /// Create an empty Record. Fields are added by the converter
    /// as it walks one CSV row.
    pub fn new() -> Self {
        Self { fields: serde_json::Map::new() }
    }

    /// Set a column's value, replacing any previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.fields.insert(column.into(), value);
    }

    /// Look up a column's value.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Number of columns in this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over (column, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_and_get() {
        let mut r = Record::new();
        r.insert("having_ip_address", json!(-1));
        r.insert("url_length", json!(1.5));
        assert_eq!(r.get("having_ip_address"), Some(&json!(-1)));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_serialises_as_flat_object() {
        let mut r = Record::new();
        r.insert("col", json!("v"));
        // #[serde(transparent)] means no wrapper key around the fields
        assert_eq!(serde_json::to_string(&r).unwrap(), r#"{"col":"v"}"#);
    }
}
