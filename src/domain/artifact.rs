// ============================================================
// Layer 3 — Pipeline Artifacts
// ============================================================
// An artifact is a small, path-bearing record describing where
// an intermediate pipeline output was persisted. Each stage
// produces exactly one artifact per run, and the next stage
// consumes it. Artifacts are read-only after creation.
//
// Using #[derive(Serialize, Deserialize)] means artifacts can
// be dumped as JSON for run summaries and inspected by hand.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Output of a data-ingestion run: where the train and test
/// partitions were written. Both files are guaranteed to exist
/// and be non-empty when this struct is returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionArtifact {
    pub trained_file_path: PathBuf,
    pub test_file_path:    PathBuf,
}

/// Output of a data-validation run.
///
/// `validation_status` is true iff both schema checks passed
/// and no column exceeded the drift threshold. Row routing and
/// the drift report are produced regardless of status, so a
/// failing run still yields a full diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationArtifact {
    pub validation_status:       bool,
    pub valid_train_file_path:   PathBuf,
    pub valid_test_file_path:    PathBuf,
    pub invalid_train_file_path: PathBuf,
    pub invalid_test_file_path:  PathBuf,
    pub drift_report_file_path:  PathBuf,
}

/// Drift verdict for a single column: the two-sample test's
/// p-value and whether it fell below the significance threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnDrift {
    pub drift_detected: bool,
    pub p_value:        f64,
}

/// Per-column drift mapping, persisted alongside the validation
/// artifact. BTreeMap so the serialized key order is stable
/// across runs — diffs of two reports line up column by column.
pub type DriftReport = BTreeMap<String, ColumnDrift>;
