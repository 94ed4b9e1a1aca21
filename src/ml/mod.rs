// ============================================================
// Layer 5 — ML Layer
// ============================================================
// The inference surface of the pipeline. Training lives
// elsewhere entirely — this layer only composes already-fitted
// objects (a preprocessor and a model, both opaque trait
// objects from Layer 3) into a single safe predict call.

/// Composes a fitted preprocessor and a fitted model
pub mod estimator;
