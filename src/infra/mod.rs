// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Adapters to the outside world, kept out of the business
// layers so those stay testable without a network or fixture
// files:
//
//   store.rs        — MongoDB-backed DocumentStore. The only
//                     place in the crate that knows mongodb
//                     types exist.
//
//   schema_store.rs — Loads the reference SchemaDefinition
//                     from its JSON file before validation
//                     runs.
//
// Swapping MongoDB for another document store means writing
// one new DocumentStore impl here and touching nothing else.

/// MongoDB implementation of the DocumentStore capability
pub mod store;

/// Schema definition file loading
pub mod schema_store;
