//! # Domain Module
//!
//! Services for the two collections the wealth tracker keeps.
//!
//! ## Module Organization
//!
//! - **beneficiary_service**: list/save/delete for people money is owed to or lent to
//! - **transaction_service**: list/save/delete for income, expense, borrow and lend records
//! - **validation**: checks applied after a request body has parsed
//!
//! ## Business Rules
//!
//! - Saving is an upsert keyed by the caller-supplied `id`; the stored document is fully replaced
//! - Deleting an unknown `id` succeeds without changing anything
//! - Listings are capped (100 beneficiaries, 1000 transactions) with no pagination
//! - Balances, references between transactions and beneficiaries, and repayment
//!   totals are left to the frontend

pub mod beneficiary_service;
pub mod transaction_service;
pub mod validation;

pub use beneficiary_service::{BeneficiaryService, BENEFICIARY_LIST_LIMIT};
pub use transaction_service::{TransactionService, TRANSACTION_LIST_LIMIT};
pub use validation::ValidationError;

use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
