//! # Storage Module
//!
//! Owns the connection to the document store and exposes the `beneficiaries`
//! and `transactions` collections to the domain layer.
//!
//! ## Backends
//!
//! - **MongoDB** (`mongodb://`, `mongodb+srv://`): the production store
//! - **SQLite** (`sqlite:`, `file:`): JSON document tables for local runs and tests
//!
//! Documents are stored exactly as the domain layer hands them over.

pub mod gateway;
pub mod mongo;
pub mod sqlite;
pub mod traits;

pub use gateway::{StorageBackend, StorageGateway, BENEFICIARIES_COLLECTION, TRANSACTIONS_COLLECTION};
pub use sqlite::DbConnection;
pub use traits::{Document, DocumentCollection, StorageError};
