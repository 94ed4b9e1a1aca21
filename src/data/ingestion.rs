// ============================================================
// Layer 4 — Data Ingestion
// ============================================================
// Reads the raw source CSV, performs a deterministic
// train/test split, and persists both partitions. Produces an
// IngestionArtifact pointing at the two files.
//
// Invariants:
//   - len(train) + len(test) == len(source), rows disjoint
//   - identical input + config → byte-identical partitions
//     (seeded shuffle, stable CSV writer)
//
// Failures here are typed PipelineErrors, not process exits:
// an orchestrator can correct the configuration and re-run.
// Each run fully overwrites its output paths (last-writer-wins).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::splitter::split_train_test;
use crate::domain::artifact::IngestionArtifact;
use crate::domain::error::PipelineError;

// ─── Ingestion Configuration ──────────────────────────────────────────────────
/// Everything an ingestion run needs, passed in explicitly at
/// construction so the component is testable in isolation —
/// no ambient globals, no environment reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    pub source_path: PathBuf,
    pub train_path:  PathBuf,
    pub test_path:   PathBuf,
    pub split_ratio: f64,
    pub seed:        u64,
}

// ─── DataIngestion ────────────────────────────────────────────────────────────
pub struct DataIngestion {
    config: IngestionConfig,
}

impl DataIngestion {
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    /// Run the full ingestion step: read, split, persist.
    pub fn run(&self) -> Result<IngestionArtifact, PipelineError> {
        let cfg = &self.config;

        tracing::info!("Ingesting '{}'", cfg.source_path.display());
        let (headers, rows) = read_rows(&cfg.source_path)?;
        let total = rows.len();

        let (train, test) = split_train_test(rows, cfg.split_ratio, cfg.seed);
        tracing::info!(
            "Split {} rows into {} train / {} test",
            total,
            train.len(),
            test.len(),
        );

        write_rows(&cfg.train_path, &headers, &train)?;
        write_rows(&cfg.test_path, &headers, &test)?;

        Ok(IngestionArtifact {
            trained_file_path: cfg.train_path.clone(),
            test_file_path:    cfg.test_path.clone(),
        })
    }
}

// ─── Shared table I/O ─────────────────────────────────────────────────────────
// Validation reads its partitions and writes its routed rows
// with the same helpers, so every tabular file in the artifact
// tree has the same shape: header row + String fields.

/// Read a CSV file into (headers, rows).
pub(crate) fn read_rows(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), PipelineError> {
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

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| PipelineError::SourceRead {
            path:   path.to_path_buf(),
            source: e.into(),
        })?;
        rows.push(row.iter().map(|f| f.to_string()).collect());
    }

    Ok((headers, rows))
}

/// Write (headers, rows) to a CSV file, creating parent
/// directories as needed. Overwrites any previous file.
pub(crate) fn write_rows(
    path:    &Path,
    headers: &[String],
    rows:    &[Vec<String>],
) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PipelineError::PartitionWrite {
            path:   path.to_path_buf(),
            source: e.into(),
        })?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| PipelineError::PartitionWrite {
        path:   path.to_path_buf(),
        source: e.into(),
    })?;

    let write = |w: &mut csv::Writer<fs::File>| -> csv::Result<()> {
        w.write_record(headers)?;
        for row in rows {
            w.write_record(row)?;
        }
        w.flush().map_err(csv::Error::from)
    };

    write(&mut writer).map_err(|e| PipelineError::PartitionWrite {
        path:   path.to_path_buf(),
        source: e.into(),
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_source(dir: &Path, n: usize) -> PathBuf {
        let path = dir.join("source.csv");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "id,value").unwrap();
        for i in 0..n {
            writeln!(f, "{},{}", i, i * 10).unwrap();
        }
        path
    }

    fn config(dir: &Path, n: usize) -> IngestionConfig {
        IngestionConfig {
            source_path: write_source(dir, n),
            train_path:  dir.join("ingested/train.csv"),
            test_path:   dir.join("ingested/test.csv"),
            split_ratio: 0.8,
            seed:        42,
        }
    }

    #[test]
    fn test_split_sizes_and_nonempty_outputs() {
        // 100 rows at ratio 0.8 → exactly 80 train, 20 test
        let dir = tempfile::tempdir().unwrap();
        let artifact = DataIngestion::new(config(dir.path(), 100)).run().unwrap();

        let (_, train) = read_rows(&artifact.trained_file_path).unwrap();
        let (_, test)  = read_rows(&artifact.test_file_path).unwrap();
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(),  20);
        assert!(fs::metadata(&artifact.trained_file_path).unwrap().len() > 0);
        assert!(fs::metadata(&artifact.test_file_path).unwrap().len() > 0);
    }

    #[test]
    fn test_partitions_are_disjoint_and_complete() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = DataIngestion::new(config(dir.path(), 100)).run().unwrap();

        let (_, train) = read_rows(&artifact.trained_file_path).unwrap();
        let (_, test)  = read_rows(&artifact.test_file_path).unwrap();

        // Row identity is the unique id column
        let mut ids: Vec<String> = train
            .iter()
            .chain(test.iter())
            .map(|r| r[0].clone())
            .collect();
        ids.sort_by_key(|s| s.parse::<usize>().unwrap());
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), 50);

        DataIngestion::new(cfg.clone()).run().unwrap();
        let first_train = fs::read(&cfg.train_path).unwrap();
        let first_test  = fs::read(&cfg.test_path).unwrap();

        DataIngestion::new(cfg.clone()).run().unwrap();
        assert_eq!(fs::read(&cfg.train_path).unwrap(), first_train);
        assert_eq!(fs::read(&cfg.test_path).unwrap(), first_test);
    }

    #[test]
    fn test_unreadable_source_is_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = IngestionConfig {
            source_path: dir.path().join("missing.csv"),
            train_path:  dir.path().join("train.csv"),
            test_path:   dir.path().join("test.csv"),
            split_ratio: 0.8,
            seed:        42,
        };
        let err = DataIngestion::new(cfg).run().unwrap_err();
        assert!(matches!(err, PipelineError::SourceRead { .. }));
    }
}
