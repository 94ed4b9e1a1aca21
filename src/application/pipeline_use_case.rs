// ============================================================
// Layer 2 — PipelineUseCase
// ============================================================
// Orchestrates the ingestion → validation pipeline in order:
//
//   Step 1: Load the schema definition     (Layer 6 - infra)
//   Step 2: Ingest + split the source      (Layer 4 - data)
//   Step 3: Validate against the schema    (Layer 4 - data)
//
// Severity: everything here is a typed PipelineError that
// propagates to the caller — an orchestrator running a
// multi-stage pipeline catches it, reports which stage and
// which file failed, and re-runs with corrected configuration.
// Schema mismatches and drift are NOT errors; they land in the
// returned artifact's validation_status.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::ingestion::{DataIngestion, IngestionConfig};
use crate::data::validation::{DataValidation, ValidationConfig};
use crate::domain::artifact::ValidationArtifact;
use crate::domain::error::PipelineError;
use crate::infra::schema_store::load_schema;

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// All knobs for one pipeline run. Serialisable so a run's
// configuration can be dumped next to its artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub source_path:  PathBuf,
    pub schema_path:  PathBuf,
    pub artifact_dir: PathBuf,

    pub split_ratio:     f64,
    pub seed:            u64,
    pub drift_threshold: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_path:     PathBuf::from("data/network_data.csv"),
            schema_path:     PathBuf::from("data/schema.json"),
            artifact_dir:    PathBuf::from("artifacts"),
            split_ratio:     0.8,
            seed:            42,
            drift_threshold: 0.05,
        }
    }
}

impl PipelineConfig {
    // Every output path hangs off artifact_dir:
    //   artifacts/
    //     ingested/train.csv     ingested/test.csv
    //     validated/train.csv    validated/test.csv
    //     invalid/train.csv      invalid/test.csv
    //     drift_report.json

    fn ingestion_config(&self) -> IngestionConfig {
        IngestionConfig {
            source_path: self.source_path.clone(),
            train_path:  self.artifact_dir.join("ingested/train.csv"),
            test_path:   self.artifact_dir.join("ingested/test.csv"),
            split_ratio: self.split_ratio,
            seed:        self.seed,
        }
    }

    fn validation_config(&self) -> ValidationConfig {
        ValidationConfig {
            valid_train_path:   self.artifact_dir.join("validated/train.csv"),
            valid_test_path:    self.artifact_dir.join("validated/test.csv"),
            invalid_train_path: self.artifact_dir.join("invalid/train.csv"),
            invalid_test_path:  self.artifact_dir.join("invalid/test.csv"),
            drift_report_path:  self.artifact_dir.join("drift_report.json"),
            drift_threshold:    self.drift_threshold,
        }
    }
}

// ─── PipelineUseCase ─────────────────────────────────────────────────────────
pub struct PipelineUseCase {
    config: PipelineConfig,
}

impl PipelineUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Execute ingestion then validation. Returns the final
    /// validation artifact; the caller reads validation_status
    /// from it.
    pub fn execute(&self) -> Result<ValidationArtifact, PipelineError> {
        // ── Step 1: Load the reference schema ────────────────────────────────
        let schema = load_schema(&self.config.schema_path)?;

        // ── Step 2: Ingest and split ─────────────────────────────────────────
        let ingestion          = DataIngestion::new(self.config.ingestion_config());
        let ingestion_artifact = ingestion.run()?;

        // ── Step 3: Validate against schema + drift ──────────────────────────
        let validation = DataValidation::new(self.config.validation_config(), schema);
        validation.run(&ingestion_artifact)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use std::path::Path;

    fn write_fixture(dir: &Path) -> PipelineConfig {
        let source = dir.join("source.csv");
        let mut f  = fs::File::create(&source).unwrap();
        writeln!(f, "having_ip_address,result").unwrap();
        // Low-variance columns so no honest 80/20 split of this
        // file can register as drift
        for i in 0..100 {
            writeln!(f, "-1,{}", i32::from(i % 10 == 0)).unwrap();
        }

        let schema = dir.join("schema.json");
        fs::write(
            &schema,
            r#"{
                "columns": [
                    { "name": "having_ip_address", "dtype": "int" },
                    { "name": "result",            "dtype": "int" }
                ],
                "critical_columns": ["result"]
            }"#,
        )
        .unwrap();

        PipelineConfig {
            source_path:  source,
            schema_path:  schema,
            artifact_dir: dir.join("artifacts"),
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_end_to_end_clean_run() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = write_fixture(dir.path());
        let artifact = PipelineUseCase::new(cfg).execute().unwrap();

        assert!(artifact.validation_status);
        assert!(artifact.drift_report_file_path.exists());
        assert!(fs::metadata(&artifact.valid_train_file_path).unwrap().len() > 0);
        assert!(fs::metadata(&artifact.valid_test_file_path).unwrap().len() > 0);
    }

    #[test]
    fn test_missing_schema_is_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = write_fixture(dir.path());
        cfg.schema_path = dir.path().join("nope.json");
        let err = PipelineUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(err, PipelineError::MalformedSchema { .. }));
    }

    #[test]
    fn test_missing_source_is_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = write_fixture(dir.path());
        cfg.source_path = dir.path().join("nope.csv");
        let err = PipelineUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(err, PipelineError::SourceRead { .. }));
    }
}
