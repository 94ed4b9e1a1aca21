// ============================================================
// Layer 5 — Composed Network Model
// ============================================================
// Wraps a fitted preprocessing transform and a fitted
// predictive model into one callable: raw feature rows in,
// predictions out. Two-stage inference in a fixed order:
//
//   raw batch ── preprocessor.transform ──► model features
//   model features ── model.predict ──────► predictions
//
// The wrapper owns both fitted objects exclusively and never
// mutates them. Failures from either stage are wrapped as
// PipelineError::Inference with the stage name and the
// original cause attached, so a caller can tell "bad input
// data" (transform rejected the batch) apart from a
// feature/model mismatch (predict rejected the transformed
// batch).

use crate::domain::error::PipelineError;
use crate::domain::features::FeatureBatch;
use crate::domain::traits::{Estimator, Transformer};

/// A fitted preprocessor + fitted model, composed.
pub struct NetworkModel {
    preprocessor: Box<dyn Transformer>,
    model:        Box<dyn Estimator>,
}

impl NetworkModel {
    /// Compose two already-trained components. Ownership of
    /// both moves into the wrapper.
    pub fn new(preprocessor: Box<dyn Transformer>, model: Box<dyn Estimator>) -> Self {
        Self { preprocessor, model }
    }

    /// Transform then predict. Returns one prediction per input
    /// row, in row order.
    pub fn predict(&self, batch: &FeatureBatch) -> Result<Vec<f64>, PipelineError> {
        let transformed =
            self.preprocessor
                .transform(batch)
                .map_err(|e| PipelineError::Inference {
                    stage:  "transform",
                    source: e.into(),
                })?;

        let predictions = self
            .model
            .predict(&transformed)
            .map_err(|e| PipelineError::Inference {
                stage:  "predict",
                source: e.into(),
            })?;

        // The one-to-one alignment contract with the raw input
        if predictions.len() != batch.n_rows() {
            return Err(PipelineError::PredictionMisaligned {
                expected: batch.n_rows(),
                got:      predictions.len(),
            });
        }

        Ok(predictions)
    }
}
