// ============================================================
// Layer 4 — Record Converter
// ============================================================
// Converts a delimited tabular file into a sequence of
// schema-less Records, one per row. The header row supplies
// the column names; every data row becomes one column → scalar
// mapping.
//
// Two invariants matter here:
//   1. Row count is preserved exactly — no silent drops, no
//      duplication. The caller can compare records.len()
//      against the file's row count.
//   2. No spurious index column leaks into the records. Keys
//      come from the header and nowhere else.
//
// Scalar inference mirrors how a dataframe would read the file:
//   ""        → Null
//   "42"      → integer
//   "3.14"    → float
//   otherwise → string

use std::path::Path;

use serde_json::Value;

use crate::domain::error::PipelineError;
use crate::domain::record::Record;

/// Read a CSV file and produce one Record per data row.
///
/// The file must be UTF-8 with a header row. A missing file or
/// a malformed row (wrong field count, bad encoding) is an
/// error — the ETL entry point treats it as fatal.
pub fn csv_to_records(path: &Path) -> Result<Vec<Record>, PipelineError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| PipelineError::SourceRead {
        path:   path.to_path_buf(),
        source: e.into(),
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| PipelineError::SourceRead {
            path:   path.to_path_buf(),
            source: e.into(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();

    for row in reader.records() {
        // The csv crate rejects ragged rows by default, so a
        // malformed file surfaces here rather than as a short record.
        let row = row.map_err(|e| PipelineError::SourceRead {
            path:   path.to_path_buf(),
            source: e.into(),
        })?;

        let mut record = Record::new();
        for (header, field) in headers.iter().zip(row.iter()) {
            record.insert(header, infer_scalar(field));
        }
        records.push(record);
    }

    tracing::info!("Converted {} rows from '{}'", records.len(), path.display());
    Ok(records)
}

/// Map one CSV field to a JSON scalar.
fn infer_scalar(field: &str) -> Value {
    if field.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = field.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = field.parse::<f64>() {
        // Infinities and NaN have no JSON representation;
        // fall through and keep them as strings.
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::from(field)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_row_count_preserved() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "data.csv", "a,b\n1,2\n3,4\n5,6\n");
        let records = csv_to_records(&path).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_keys_come_from_header_only() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "data.csv", "x,y\n1,2\n");
        let records = csv_to_records(&path).unwrap();
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0].get("x"), Some(&json!(1)));
        assert_eq!(records[0].get("y"), Some(&json!(2)));
        // No index or positional key sneaks in
        assert_eq!(records[0].get("0"), None);
    }

    #[test]
    fn test_scalar_inference() {
        assert_eq!(infer_scalar(""), Value::Null);
        assert_eq!(infer_scalar("7"), json!(7));
        assert_eq!(infer_scalar("-1"), json!(-1));
        assert_eq!(infer_scalar("2.5"), json!(2.5));
        assert_eq!(infer_scalar("http://a.b"), json!("http://a.b"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = csv_to_records(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::SourceRead { .. }));
    }

    #[test]
    fn test_ragged_row_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "bad.csv", "a,b\n1,2\n3\n");
        assert!(csv_to_records(&path).is_err());
    }
}
