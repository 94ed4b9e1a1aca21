// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `push` — ETL a CSV file into the document store
//   2. `run`  — ingest + validate with drift tracking
//
// This is also the only place the environment is read: the
// MongoDB connection string comes from MONGO_DB_URL. Errors
// propagate out of main(), which prints the diagnostic chain
// and exits non-zero.

// Declare the commands submodule
pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, PushArgs, RunArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "phishnet",
    version = "0.1.0",
    about = "Ingest, validate, and track drift in phishing network data."
)]
pub struct Cli {
    /// The subcommand to run (push or run)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Push(args) => Self::run_push(args),
            Commands::Run(args)  => Self::run_pipeline(args),
        }
    }

    /// Handles the `push` subcommand. Any failure here is fatal
    /// to the invocation — there is no partial-success contract
    /// for the ETL.
    fn run_push(args: PushArgs) -> Result<()> {
        use crate::application::push_use_case::PushUseCase;
        use crate::infra::store::MongoStore;

        // Connection string from the environment, never hardcoded
        let uri = std::env::var("MONGO_DB_URL")
            .context("MONGO_DB_URL is not set. Put the connection string in the environment.")?;

        let store = MongoStore::connect(&uri)?;

        let use_case = PushUseCase::new(store, args.into());
        let inserted = use_case.execute()?;

        println!("Inserted {inserted} records.");
        Ok(())
    }

    /// Handles the `run` subcommand. Pipeline errors propagate;
    /// a failed validation is NOT an error — the status is in
    /// the artifact and the exit code stays 0.
    fn run_pipeline(args: RunArgs) -> Result<()> {
        use crate::application::pipeline_use_case::PipelineUseCase;

        tracing::info!("Starting pipeline run on '{}'", args.source.display());

        let use_case = PipelineUseCase::new(args.into());
        let artifact = use_case.execute()?;

        println!(
            "Validation status: {}",
            if artifact.validation_status { "PASSED" } else { "FAILED" }
        );
        println!("Drift report: {}", artifact.drift_report_file_path.display());
        Ok(())
    }
}
