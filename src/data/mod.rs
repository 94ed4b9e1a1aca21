// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a raw CSV file and a validated, drift-
// checked pair of train/test partitions.
//
// Two independent flows pass through this layer:
//
//   ETL flow (fatal on error):
//
//     source.csv
//         │
//         ▼
//     converter      → one schema-less Record per row
//         │
//         ▼
//     DocumentStore  → bulk insert (Layer 6)
//
//   Pipeline flow (typed errors):
//
//     source.csv
//         │
//         ▼
//     ingestion      → seeded split, persists train/test
//         │              (uses splitter)
//         ▼
//     validation     → schema check, drift check (uses drift),
//         │              row routing, drift report
//         ▼
//     ValidationArtifact → consumed by downstream training
//
// Each module is responsible for exactly one step, which keeps
// every step independently testable and replaceable.

/// CSV rows → schema-less Records for the bulk loader
pub mod converter;

/// Seeded shuffle-and-split shared by ingestion
pub mod splitter;

/// Reads raw data, splits it, persists both partitions
pub mod ingestion;

/// Two-sample Kolmogorov–Smirnov drift test
pub mod drift;

/// Schema check, drift report, and valid/invalid row routing
pub mod validation;
