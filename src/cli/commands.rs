// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `push` and `run`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → f64, u64, etc.)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::pipeline_use_case::PipelineConfig;
use crate::application::push_use_case::PushConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// One-shot ETL: convert a CSV file to records and bulk-insert
    /// them into the document store
    Push(PushArgs),

    /// Ingest a CSV source, split it, and validate it against a
    /// reference schema with drift tracking
    Run(RunArgs),
}

/// All arguments for the `push` command.
#[derive(Args, Debug)]
pub struct PushArgs {
    /// Path to the source CSV file
    #[arg(long)]
    pub file: PathBuf,

    /// Target database name in the document store
    #[arg(long)]
    pub database: String,

    /// Target collection name in the document store
    #[arg(long)]
    pub collection: String,
}

/// Convert CLI PushArgs into the application-layer PushConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<PushArgs> for PushConfig {
    fn from(a: PushArgs) -> Self {
        PushConfig {
            file_path:  a.file,
            database:   a.database,
            collection: a.collection,
        }
    }
}

/// All arguments for the `run` command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the raw source CSV file
    #[arg(long)]
    pub source: PathBuf,

    /// Path to the JSON schema definition file
    #[arg(long)]
    pub schema: PathBuf,

    /// Directory where all run artifacts are written
    #[arg(long, default_value = "artifacts")]
    pub artifact_dir: PathBuf,

    /// Fraction of rows that go to the training partition
    #[arg(long, default_value_t = 0.8)]
    pub split_ratio: f64,

    /// Seed for the deterministic shuffle — same seed and same
    /// input give byte-identical partitions
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Significance level below which a column's KS p-value
    /// counts as drift
    #[arg(long, default_value_t = 0.05)]
    pub drift_threshold: f64,
}

impl From<RunArgs> for PipelineConfig {
    fn from(a: RunArgs) -> Self {
        PipelineConfig {
            source_path:     a.source,
            schema_path:     a.schema,
            artifact_dir:    a.artifact_dir,
            split_ratio:     a.split_ratio,
            seed:            a.seed,
            drift_threshold: a.drift_threshold,
        }
    }
}
