// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// specific goal per use case.
//
// Rules for this layer:
//   - No statistics or model code here (Layer 4 and 5)
//   - No UI or printing here (that's Layer 1)
//   - No direct store/file adapters (Layer 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.

// One-shot ETL: CSV → records → document store
pub mod push_use_case;

// Ingestion → validation with artifact tracking
pub mod pipeline_use_case;
