// ============================================================
// Layer 6 — Schema Store
// ============================================================
// Loads the reference SchemaDefinition from its JSON file.
// A file that cannot be read or parsed is a typed
// configuration error — validation never runs against a
// half-loaded schema.

use std::fs;
use std::path::Path;

use crate::domain::error::PipelineError;
use crate::domain::schema::SchemaDefinition;

/// Load a schema definition from a JSON file.
pub fn load_schema(path: &Path) -> Result<SchemaDefinition, PipelineError> {
    let content = fs::read_to_string(path).map_err(|e| PipelineError::MalformedSchema {
        path:   path.to_path_buf(),
        source: e.into(),
    })?;

    let schema: SchemaDefinition =
        serde_json::from_str(&content).map_err(|e| PipelineError::MalformedSchema {
            path:   path.to_path_buf(),
            source: e.into(),
        })?;

    tracing::debug!(
        "Loaded schema with {} columns from '{}'",
        schema.column_count(),
        path.display(),
    );
    Ok(schema)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_valid_schema() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(
            br#"{
                "columns": [
                    { "name": "having_ip_address", "dtype": "int" },
                    { "name": "result",            "dtype": "int" }
                ],
                "critical_columns": ["result"]
            }"#,
        )
        .unwrap();

        let schema = load_schema(&path).unwrap();
        assert_eq!(schema.column_count(), 2);
        assert_eq!(schema.critical_columns, vec!["result"]);
    }

    #[test]
    fn test_malformed_schema_is_typed_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_schema(&path).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedSchema { .. }));
    }

    #[test]
    fn test_missing_schema_is_typed_error() {
        let err = load_schema(Path::new("/no/such/schema.json")).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedSchema { .. }));
    }
}
