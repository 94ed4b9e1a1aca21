// ============================================================
// Layer 6 — MongoDB Document Store
// ============================================================
// Implements the DocumentStore trait over the mongodb crate's
// sync client. The pipeline is fully synchronous, so the
// blocking API fits — one connection, one bulk round-trip,
// no pooling, no retry, no backoff.
//
// The connection string arrives from the caller (the CLI layer
// reads MONGO_DB_URL from the environment); nothing in here
// touches ambient configuration.

use anyhow::{Context, Result};
use mongodb::bson::Document;
use mongodb::sync::Client;

use crate::domain::record::Record;
use crate::domain::traits::DocumentStore;

pub struct MongoStore {
    client: Client,
}

impl MongoStore {
    /// Connect to the store. Fails fast on an invalid
    /// connection string; actual reachability surfaces on the
    /// first operation.
    pub fn connect(connection_string: &str) -> Result<Self> {
        let client = Client::with_uri_str(connection_string)
            .context("Cannot create MongoDB client from connection string")?;
        Ok(Self { client })
    }
}

impl DocumentStore for MongoStore {
    fn insert_many(
        &self,
        database:   &str,
        collection: &str,
        records:    &[Record],
    ) -> Result<usize> {
        // Records serialise to flat JSON objects, which map 1:1
        // onto BSON documents
        let documents: Vec<Document> = records
            .iter()
            .map(|r| mongodb::bson::to_document(r).context("Cannot convert record to BSON"))
            .collect::<Result<_>>()?;

        let result = self
            .client
            .database(database)
            .collection::<Document>(collection)
            .insert_many(documents, None)
            .with_context(|| {
                format!("Bulk insert into {database}.{collection} failed")
            })?;

        let inserted = result.inserted_ids.len();
        tracing::info!(
            "Inserted {} records into {}.{}",
            inserted,
            database,
            collection,
        );
        Ok(inserted)
    }
}
