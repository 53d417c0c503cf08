//! # Storage Traits
//!
//! Abstraction over a named document collection so the domain layer works the
//! same against MongoDB or the SQLite document tables.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use shared::{Beneficiary, Transaction};

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] sqlx::Error),
    #[error("Stored document could not be decoded: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("Unsupported database connection string scheme: '{0}'")]
    UnsupportedScheme(String),
}

/// A value stored as one document, keyed by its caller-supplied `id`
pub trait Document: Serialize + DeserializeOwned + Unpin + Send + Sync + 'static {
    fn id(&self) -> &str;
}

impl Document for Beneficiary {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Document for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Operations on one named collection of documents.
///
/// Implementations store documents as given: no validation, indexing or
/// transformation happens at this layer.
#[async_trait]
pub trait DocumentCollection<T: Document>: Send + Sync {
    /// Name of the underlying collection or table
    fn name(&self) -> &str;

    /// Return at most `limit` documents, in no guaranteed order
    async fn list(&self, limit: u32) -> Result<Vec<T>>;

    /// Replace the document with the same id, or insert it if absent
    async fn upsert(&self, document: &T) -> Result<()>;

    /// Delete the document with the given id.
    /// Returns true if a document was found and deleted, false otherwise
    async fn delete(&self, id: &str) -> Result<bool>;
}
