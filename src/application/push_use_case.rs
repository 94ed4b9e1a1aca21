// ============================================================
// Layer 2 — PushUseCase (ETL)
// ============================================================
// One-way ETL in two steps:
//
//   Step 1: Convert the source CSV to Records  (Layer 4)
//   Step 2: Bulk-insert them into the store    (Layer 6)
//
// Severity: everything in this use case is fatal to the
// invocation. There is no partial-success contract — the
// error propagates out of main() and the process exits
// non-zero, to be re-invoked by an external scheduler.
//
// Known, accepted limitation: no deduplication or idempotency
// key is applied. Re-running with the same source file inserts
// duplicate records. The at-most-once-attempt semantics are
// intentional; do not add retries here.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::data::converter::csv_to_records;
use crate::domain::traits::DocumentStore;

// ─── Push Configuration ───────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct PushConfig {
    pub file_path:  PathBuf,
    pub database:   String,
    pub collection: String,
}

// ─── PushUseCase ──────────────────────────────────────────────────────────────
// Generic over the store capability so tests can substitute an
// in-memory fake for MongoDB.
pub struct PushUseCase<S: DocumentStore> {
    store:  S,
    config: PushConfig,
}

impl<S: DocumentStore> PushUseCase<S> {
    pub fn new(store: S, config: PushConfig) -> Self {
        Self { store, config }
    }

    /// Run the ETL end to end. Returns the store-confirmed
    /// count of inserted records.
    pub fn execute(&self) -> Result<usize> {
        let cfg = &self.config;

        // ── Step 1: CSV → Records ────────────────────────────────────────────
        tracing::info!("Reading '{}' and converting to records", cfg.file_path.display());
        let records = csv_to_records(&cfg.file_path)
            .with_context(|| format!("ETL conversion failed for '{}'", cfg.file_path.display()))?;

        // ── Step 2: One bulk insert ──────────────────────────────────────────
        let inserted = self
            .store
            .insert_many(&cfg.database, &cfg.collection, &records)
            .context("ETL bulk load failed")?;

        // The store must confirm every record. A short count is
        // a failed load, never a partial success.
        if inserted != records.len() {
            bail!(
                "Store confirmed {} of {} records for {}.{}",
                inserted,
                records.len(),
                cfg.database,
                cfg.collection,
            );
        }

        tracing::info!(
            "Successfully inserted {} records into {}.{}",
            inserted,
            cfg.database,
            cfg.collection,
        );
        Ok(inserted)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;
    use std::cell::RefCell;
    use std::io::Write;

    /// In-memory stand-in for MongoDB.
    struct MemoryStore {
        inserted: RefCell<Vec<Record>>,
        /// Confirm fewer records than given, to simulate a
        /// store that loses part of a bulk write.
        short_by: usize,
        /// Fail the whole operation, as an unreachable store
        /// would.
        unreachable: bool,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self { inserted: RefCell::new(Vec::new()), short_by: 0, unreachable: false }
        }
    }

    impl DocumentStore for MemoryStore {
        fn insert_many(
            &self,
            _database:   &str,
            _collection: &str,
            records:     &[Record],
        ) -> Result<usize> {
            if self.unreachable {
                bail!("connection refused");
            }
            self.inserted.borrow_mut().extend_from_slice(records);
            Ok(records.len() - self.short_by)
        }
    }

    fn write_csv(dir: &tempfile::TempDir, rows: usize) -> PathBuf {
        let path = dir.path().join("data.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "url_length,result").unwrap();
        for i in 0..rows {
            writeln!(f, "{},{}", i, i % 2).unwrap();
        }
        path
    }

    fn config(path: PathBuf) -> PushConfig {
        PushConfig {
            file_path:  path,
            database:   "phishnet".to_string(),
            collection: "network_data".to_string(),
        }
    }

    #[test]
    fn test_inserted_count_equals_row_count() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, 10);
        let uc   = PushUseCase::new(MemoryStore::new(), config(path));
        assert_eq!(uc.execute().unwrap(), 10);
    }

    #[test]
    fn test_unreachable_store_is_an_error() {
        let dir   = tempfile::tempdir().unwrap();
        let path  = write_csv(&dir, 3);
        let store = MemoryStore { unreachable: true, ..MemoryStore::new() };
        let uc    = PushUseCase::new(store, config(path));
        assert!(uc.execute().is_err());
    }

    #[test]
    fn test_short_count_is_an_error_not_partial_success() {
        let dir   = tempfile::tempdir().unwrap();
        let path  = write_csv(&dir, 5);
        let store = MemoryStore { short_by: 2, ..MemoryStore::new() };
        let uc    = PushUseCase::new(store, config(path));
        let err   = uc.execute().unwrap_err();
        assert!(err.to_string().contains("3 of 5"));
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let uc = PushUseCase::new(MemoryStore::new(), config(PathBuf::from("/no/file.csv")));
        assert!(uc.execute().is_err());
    }
}
