// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are the seams of this system. By programming against
// traits instead of concrete types, we can swap implementations
// without changing the code that uses them. For example:
//   - MongoStore implements DocumentStore
//   - An in-memory fake also implements DocumentStore,
//     so the push use case is testable without a database
//
// The fitted preprocessor and model expose nothing beyond their
// capability set: {transform} and {predict}. Any conforming
// estimator can be substituted — the inference wrapper never
// learns what is behind the trait object.

use anyhow::Result;

use crate::domain::features::FeatureBatch;
use crate::domain::record::Record;

// ─── DocumentStore ────────────────────────────────────────────────────────────
/// Any backend that can bulk-insert records into a named
/// collection of a named database.
///
/// Implementations:
///   - MongoStore (Layer 6) → MongoDB via the sync client
///   - MemoryStore (tests)  → in-process Vec
pub trait DocumentStore {
    /// Insert all records as one logical bulk operation.
    /// Returns the count of records the store confirms stored;
    /// on success this must equal `records.len()`.
    fn insert_many(&self, database: &str, collection: &str, records: &[Record])
        -> Result<usize>;
}

// ─── Transformer ──────────────────────────────────────────────────────────────
/// A fitted preprocessing transform. Already trained — this
/// trait exposes inference only, never fitting.
pub trait Transformer {
    /// Map raw feature rows into the representation the model
    /// was trained on. Must not mutate internal state.
    fn transform(&self, batch: &FeatureBatch) -> Result<FeatureBatch>;
}

// ─── Estimator ────────────────────────────────────────────────────────────────
/// A fitted predictive model. Already trained — this trait
/// exposes inference only, never fitting.
pub trait Estimator {
    /// Predict one value per input row, in row order.
    fn predict(&self, batch: &FeatureBatch) -> Result<Vec<f64>>;
}
