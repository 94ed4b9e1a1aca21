// ============================================================
// Layer 3 — Schema Definition
// ============================================================
// The reference description of expected columns against which
// ingested data is checked. Loaded from a JSON file by the
// infra layer (Layer 6); this module only defines the shape
// and the pure queries validation needs.
//
// Example schema file:
//   {
//     "columns": [
//       { "name": "having_ip_address", "dtype": "int" },
//       { "name": "url_length",        "dtype": "int" },
//       { "name": "result",            "dtype": "int" }
//     ],
//     "critical_columns": ["result"]
//   }

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One expected column: its name and declared type/role.
/// The dtype is informational — validation checks presence and
/// count, not value types (the store is schema-less anyway).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name:  String,
    pub dtype: String,
}

/// The full reference schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Every column an ingested file is expected to carry.
    pub columns: Vec<ColumnSpec>,

    /// Columns that must be non-null for a row to count as
    /// well-formed during routing. Typically the target column.
    #[serde(default)]
    pub critical_columns: Vec<String>,
}

impl SchemaDefinition {
    /// Expected number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The expected column names as a set, for order-insensitive
    /// comparison against a file's header row.
    pub fn column_names(&self) -> HashSet<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// True when `headers` carries exactly the schema's columns
    /// (any order, no extras, no omissions).
    pub fn matches_header(&self, headers: &[String]) -> bool {
        let actual: HashSet<&str> = headers.iter().map(|h| h.as_str()).collect();
        actual == self.column_names()
    }
}
