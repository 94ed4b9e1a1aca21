// ============================================================
// Layer 3 — Pipeline Error Taxonomy
// ============================================================
// Typed, recoverable errors for everything reachable from the
// `run` pipeline. An orchestrator catches these, reports which
// stage and which file failed, and retries with corrected
// configuration — no process crash.
//
// Severity policy for the whole crate:
//   - mid-pipeline failure   → one of these variants, propagated
//   - `push` (ETL entry)     → anyhow, propagated out of main()
//                              for a diagnostic + non-zero exit
//   - schema mismatch, drift → not errors at all: encoded into
//                              ValidationArtifact.validation_status
//
// Causes are boxed trait objects so this layer stays free of
// csv/serde_json/io types while still preserving the original
// error chain for `source()` walkers.

use std::path::PathBuf;
use thiserror::Error;

/// Original cause of a pipeline error, type-erased.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Source tabular file could not be read or parsed.
    #[error("cannot read tabular data at '{path}'")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: BoxedCause,
    },

    /// A train/test/valid/invalid partition could not be written.
    #[error("cannot write partition to '{path}'")]
    PartitionWrite {
        path: PathBuf,
        #[source]
        source: BoxedCause,
    },

    /// An ingestion artifact file handed to validation is missing
    /// or empty — including the short/corrupt leftovers of a crash
    /// mid-write on a previous run.
    #[error("ingestion artifact file '{path}' is missing or empty")]
    EmptyInput { path: PathBuf },

    /// The schema definition file could not be read or parsed.
    #[error("malformed schema definition at '{path}'")]
    MalformedSchema {
        path: PathBuf,
        #[source]
        source: BoxedCause,
    },

    /// The drift report could not be persisted.
    #[error("cannot write drift report to '{path}'")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: BoxedCause,
    },

    /// The fitted preprocessor or model rejected its input. The
    /// stage tag distinguishes "bad input data" surfaced by
    /// transform from a model/feature mismatch in predict.
    #[error("inference failed during {stage}")]
    Inference {
        stage: &'static str,
        #[source]
        source: BoxedCause,
    },

    /// The model returned a prediction vector that does not line
    /// up one-to-one with the input rows.
    #[error("model returned {got} predictions for {expected} input rows")]
    PredictionMisaligned { expected: usize, got: usize },
}
