use shared::Beneficiary;
use tracing::info;

use super::validation::require_id;
use super::DomainError;
use crate::storage::StorageGateway;

/// Most beneficiaries returned by one listing
pub const BENEFICIARY_LIST_LIMIT: u32 = 100;

/// Service for the beneficiaries collection
#[derive(Clone)]
pub struct BeneficiaryService {
    storage: StorageGateway,
}

impl BeneficiaryService {
    pub fn new(storage: StorageGateway) -> Self {
        Self { storage }
    }

    /// List up to `BENEFICIARY_LIST_LIMIT` beneficiaries
    pub async fn list_beneficiaries(&self) -> Result<Vec<Beneficiary>, DomainError> {
        let beneficiaries = self
            .storage
            .beneficiaries()
            .list(BENEFICIARY_LIST_LIMIT)
            .await?;

        info!("Found {} beneficiaries", beneficiaries.len());
        Ok(beneficiaries)
    }

    /// Insert the beneficiary, or fully replace the one with the same id
    pub async fn save_beneficiary(&self, beneficiary: &Beneficiary) -> Result<(), DomainError> {
        require_id("beneficiary", &beneficiary.id)?;

        self.storage.beneficiaries().upsert(beneficiary).await?;

        info!("Saved beneficiary: {}", beneficiary.id);
        Ok(())
    }

    /// Delete a beneficiary by id. Deleting an unknown id is not an error.
    ///
    /// Transactions referencing the beneficiary are left untouched.
    pub async fn delete_beneficiary(&self, id: &str) -> Result<(), DomainError> {
        require_id("beneficiary", id)?;

        if self.storage.beneficiaries().delete(id).await? {
            info!("Deleted beneficiary: {}", id);
        } else {
            info!("Beneficiary not found, nothing deleted: {}", id);
        }
        Ok(())
    }
}
