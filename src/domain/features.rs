// ============================================================
// Layer 3 — Feature Batch
// ============================================================
// The dense numeric representation the inference wrapper works
// with: a batch of raw feature rows plus their column names.
//
// The preprocessor's transform consumes one FeatureBatch and
// produces another (possibly with different columns — scaling,
// imputation, encoding all happen inside the opaque fitted
// object). The model's predict consumes the transformed batch.

use serde::{Deserialize, Serialize};

/// A batch of feature rows. Every row must have exactly
/// `columns.len()` values; constructors enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureBatch {
    pub columns: Vec<String>,
    pub rows:    Vec<Vec<f64>>,
}

impl FeatureBatch {
    /// Build a batch, checking that every row is as wide as the
    /// header. Returns None on a ragged batch — callers decide
    /// how to report it.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Option<Self> {
        let width = columns.len();
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self { columns, rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }
}
