// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// The heart of the pipeline — pure Rust structs, enums and
// traits that define what the system's concepts ARE.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO csv / mongodb / clap types allowed here
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no filesystem or store needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)

// A single tabular row as a schema-less document
pub mod record;

// Path-bearing artifacts produced by ingestion and validation
pub mod artifact;

// The reference schema ingested data is checked against
pub mod schema;

// The dense numeric batch consumed by the inference wrapper
pub mod features;

// The typed error taxonomy for recoverable pipeline failures
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
