use std::sync::Arc;

use shared::{Beneficiary, Transaction};
use tracing::info;

use super::mongo::{self, MongoCollection};
use super::sqlite::{DbConnection, SqliteCollection};
use super::traits::{DocumentCollection, Result, StorageError};

pub const BENEFICIARIES_COLLECTION: &str = "beneficiaries";
pub const TRANSACTIONS_COLLECTION: &str = "transactions";

/// Storage backend chosen from the connection string scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDb,
    Sqlite,
}

impl StorageBackend {
    pub fn from_url(url: &str) -> Result<Self> {
        if url.starts_with("mongodb://") || url.starts_with("mongodb+srv://") {
            Ok(Self::MongoDb)
        } else if url.starts_with("sqlite:") || url.starts_with("file:") {
            Ok(Self::Sqlite)
        } else {
            // Only the scheme is reported; the rest may carry credentials
            let scheme = url.split(':').next().unwrap_or_default();
            Err(StorageError::UnsupportedScheme(scheme.to_string()))
        }
    }
}

/// Process-wide handle to the two document collections.
///
/// Built once at startup and cloned into request handlers; clones share the
/// same underlying client.
#[derive(Clone)]
pub struct StorageGateway {
    beneficiaries: Arc<dyn DocumentCollection<Beneficiary>>,
    transactions: Arc<dyn DocumentCollection<Transaction>>,
}

impl StorageGateway {
    pub fn new(
        beneficiaries: Arc<dyn DocumentCollection<Beneficiary>>,
        transactions: Arc<dyn DocumentCollection<Transaction>>,
    ) -> Self {
        Self {
            beneficiaries,
            transactions,
        }
    }

    /// Connect to the store named by `database_url`
    pub async fn connect(database_url: &str, database_name: &str) -> Result<Self> {
        match StorageBackend::from_url(database_url)? {
            StorageBackend::MongoDb => {
                info!("Using MongoDB database '{}'", database_name);
                let database = mongo::connect(database_url, database_name).await?;
                Ok(Self::new(
                    Arc::new(MongoCollection::<Beneficiary>::new(&database, BENEFICIARIES_COLLECTION)),
                    Arc::new(MongoCollection::<Transaction>::new(&database, TRANSACTIONS_COLLECTION)),
                ))
            }
            StorageBackend::Sqlite => {
                info!("Using SQLite document store");
                let db = DbConnection::new(database_url).await?;
                Self::from_sqlite(db).await
            }
        }
    }

    async fn from_sqlite(db: DbConnection) -> Result<Self> {
        Ok(Self::new(
            Arc::new(SqliteCollection::<Beneficiary>::new(db.clone(), BENEFICIARIES_COLLECTION).await?),
            Arc::new(SqliteCollection::<Transaction>::new(db, TRANSACTIONS_COLLECTION).await?),
        ))
    }

    /// Gateway over a fresh in-memory SQLite database
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let db = DbConnection::init_test().await?;
        Self::from_sqlite(db).await
    }

    pub fn beneficiaries(&self) -> &dyn DocumentCollection<Beneficiary> {
        self.beneficiaries.as_ref()
    }

    pub fn transactions(&self) -> &dyn DocumentCollection<Transaction> {
        self.transactions.as_ref()
    }
}
