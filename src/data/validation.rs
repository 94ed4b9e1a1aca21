// ============================================================
// Layer 4 — Data Validation
// ============================================================
// Consumes an IngestionArtifact and a SchemaDefinition and
// performs, in order:
//
//   Step 1: Schema check       — column count vs. schema, per
//                                partition (soft: sets status)
//   Step 2: Drift check        — per-column KS test between
//                                train and test (soft: sets
//                                status + report)
//   Step 3: Row routing        — well-formed rows to the valid
//                                paths, the rest to invalid
//   Step 4: Report persistence — full drift mapping as JSON
//
// Schema mismatches and drift never raise: they are encoded in
// validation_status so a failing run still produces the full
// diagnostic. Only unreadable/empty inputs and unwritable
// outputs are errors.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::drift::ks_2samp;
use crate::data::ingestion::{read_rows, write_rows};
use crate::domain::artifact::{ColumnDrift, DriftReport, IngestionArtifact, ValidationArtifact};
use crate::domain::error::PipelineError;
use crate::domain::schema::SchemaDefinition;

// ─── Validation Configuration ─────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub valid_train_path:   PathBuf,
    pub valid_test_path:    PathBuf,
    pub invalid_train_path: PathBuf,
    pub invalid_test_path:  PathBuf,
    pub drift_report_path:  PathBuf,

    /// Significance level for the KS test; a column with
    /// p_value below this is flagged as drifted.
    pub drift_threshold: f64,
}

// ─── DataValidation ───────────────────────────────────────────────────────────
pub struct DataValidation {
    config: ValidationConfig,
    schema: SchemaDefinition,
}

/// One loaded partition plus its name for log/report context.
struct Partition {
    name:    &'static str,
    headers: Vec<String>,
    rows:    Vec<Vec<String>>,
}

impl DataValidation {
    pub fn new(config: ValidationConfig, schema: SchemaDefinition) -> Self {
        Self { config, schema }
    }

    /// Run the full validation step against an ingestion artifact.
    pub fn run(&self, ingestion: &IngestionArtifact) -> Result<ValidationArtifact, PipelineError> {
        let train = load_partition("train", &ingestion.trained_file_path)?;
        let test  = load_partition("test", &ingestion.test_file_path)?;

        // ── Step 1: Schema check on each partition ───────────────────────────
        let schema_ok = self.check_schema(&train) & self.check_schema(&test);

        // ── Step 2: Per-column drift check ───────────────────────────────────
        let report = self.build_drift_report(&train, &test);
        let drifted: Vec<&str> = report
            .iter()
            .filter(|(_, d)| d.drift_detected)
            .map(|(c, _)| c.as_str())
            .collect();
        if !drifted.is_empty() {
            tracing::warn!("Drift detected in columns: {}", drifted.join(", "));
        }

        let validation_status = schema_ok && drifted.is_empty();

        // ── Step 3: Row-level routing ────────────────────────────────────────
        // Independent of the column-level status above: a run
        // with a failed schema check still routes every row.
        self.route(&train, &self.config.valid_train_path, &self.config.invalid_train_path)?;
        self.route(&test, &self.config.valid_test_path, &self.config.invalid_test_path)?;

        // ── Step 4: Persist the drift report ─────────────────────────────────
        self.write_report(&report)?;

        tracing::info!(
            "Validation finished: status={}, {} columns checked for drift",
            validation_status,
            report.len(),
        );

        Ok(ValidationArtifact {
            validation_status,
            valid_train_file_path:   self.config.valid_train_path.clone(),
            valid_test_file_path:    self.config.valid_test_path.clone(),
            invalid_train_file_path: self.config.invalid_train_path.clone(),
            invalid_test_file_path:  self.config.invalid_test_path.clone(),
            drift_report_file_path:  self.config.drift_report_path.clone(),
        })
    }

    /// Soft schema check: actual column count vs. expected.
    fn check_schema(&self, part: &Partition) -> bool {
        let expected = self.schema.column_count();
        let actual   = part.headers.len();
        if actual != expected {
            tracing::warn!(
                "Schema check failed on {}: {} columns, expected {}",
                part.name,
                actual,
                expected,
            );
            return false;
        }
        true
    }

    /// KS-test every column present in both partitions whose
    /// values parse as numbers on BOTH sides. Non-numeric
    /// columns are skipped: the KS test has nothing to say
    /// about them, and a made-up p-value would poison the
    /// report.
    fn build_drift_report(&self, train: &Partition, test: &Partition) -> DriftReport {
        let mut report = DriftReport::new();

        for column in &train.headers {
            if !test.headers.contains(column) {
                continue;
            }
            let a = numeric_series(train, column);
            let b = numeric_series(test, column);
            if a.is_empty() || b.is_empty() {
                if a.is_empty() != b.is_empty() {
                    // Numeric on one side only — a type change the
                    // KS test cannot quantify. Skipped from the
                    // report, but loudly.
                    tracing::warn!(
                        "Column '{}' is numeric in only one partition, skipping drift test",
                        column,
                    );
                } else {
                    tracing::debug!("Column '{}' is non-numeric, skipping drift test", column);
                }
                continue;
            }

            let ks = ks_2samp(&a, &b);
            report.insert(
                column.clone(),
                ColumnDrift {
                    drift_detected: ks.p_value < self.config.drift_threshold,
                    p_value:        ks.p_value,
                },
            );
        }

        report
    }

    /// Partition rows into well-formed and malformed and write
    /// both files. A row is well-formed when the file's column
    /// set matches the schema and all critical columns are
    /// non-null. Headers are written even when a side is empty.
    fn route(&self, part: &Partition, valid: &Path, invalid: &Path) -> Result<(), PipelineError> {
        let header_ok = self.schema.matches_header(&part.headers);

        let critical_idx: Vec<usize> = self
            .schema
            .critical_columns
            .iter()
            .filter_map(|c| part.headers.iter().position(|h| h == c))
            .collect();

        let (mut good, mut bad) = (Vec::new(), Vec::new());
        for row in &part.rows {
            let well_formed = header_ok && critical_idx.iter().all(|&i| !row[i].is_empty());
            if well_formed {
                good.push(row.clone());
            } else {
                bad.push(row.clone());
            }
        }

        tracing::info!(
            "Routed {}: {} valid rows, {} invalid rows",
            part.name,
            good.len(),
            bad.len(),
        );

        write_rows(valid, &part.headers, &good)?;
        write_rows(invalid, &part.headers, &bad)
    }

    fn write_report(&self, report: &DriftReport) -> Result<(), PipelineError> {
        let path = &self.config.drift_report_path;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| PipelineError::ReportWrite {
                path:   path.clone(),
                source: e.into(),
            })?;
        }

        let json = serde_json::to_string_pretty(report).map_err(|e| PipelineError::ReportWrite {
            path:   path.clone(),
            source: e.into(),
        })?;
        fs::write(path, json).map_err(|e| PipelineError::ReportWrite {
            path:   path.clone(),
            source: e.into(),
        })
    }
}

/// Load one ingestion output, rejecting missing or empty files.
/// A file truncated by a crash mid-write on a previous run lands
/// here as well.
fn load_partition(name: &'static str, path: &Path) -> Result<Partition, PipelineError> {
    // A missing or zero-length file is the "empty artifact"
    // case; any other stat failure (permissions, not a
    // directory, ...) is a real I/O error and keeps its cause.
    let missing = match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
        Err(e) => {
            return Err(PipelineError::SourceRead {
                path:   path.to_path_buf(),
                source: e.into(),
            })
        }
    };
    if missing {
        return Err(PipelineError::EmptyInput { path: path.to_path_buf() });
    }

    let (headers, rows) = read_rows(path)?;
    if rows.is_empty() {
        return Err(PipelineError::EmptyInput { path: path.to_path_buf() });
    }

    Ok(Partition { name, headers, rows })
}

/// All values of one column that parse as f64, in row order.
fn numeric_series(part: &Partition, column: &str) -> Vec<f64> {
    let Some(idx) = part.headers.iter().position(|h| h == column) else {
        return Vec::new();
    };
    part.rows
        .iter()
        .filter_map(|row| row.get(idx).and_then(|v| v.parse::<f64>().ok()))
        .collect()
}
