use shared::Transaction;
use tracing::info;

use super::validation::require_id;
use super::DomainError;
use crate::storage::StorageGateway;

/// Most transactions returned by one listing
pub const TRANSACTION_LIST_LIMIT: u32 = 1000;

/// Service for the transactions collection.
///
/// Repayments, status and the beneficiary reference are stored as sent; their
/// consistency is the caller's concern.
#[derive(Clone)]
pub struct TransactionService {
    storage: StorageGateway,
}

impl TransactionService {
    pub fn new(storage: StorageGateway) -> Self {
        Self { storage }
    }

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, DomainError> {
        let transactions = self
            .storage
            .transactions()
            .list(TRANSACTION_LIST_LIMIT)
            .await?;

        info!("Found {} transactions", transactions.len());
        Ok(transactions)
    }

    pub async fn save_transaction(&self, transaction: &Transaction) -> Result<(), DomainError> {
        require_id("transaction", &transaction.id)?;

        self.storage.transactions().upsert(transaction).await?;

        info!(
            "Saved transaction: {} ({:?} {})",
            transaction.id, transaction.transaction_type, transaction.amount
        );
        Ok(())
    }

    pub async fn delete_transaction(&self, id: &str) -> Result<(), DomainError> {
        require_id("transaction", id)?;

        if self.storage.transactions().delete(id).await? {
            info!("Deleted transaction: {}", id);
        } else {
            info!("Transaction not found, nothing deleted: {}", id);
        }
        Ok(())
    }
}
