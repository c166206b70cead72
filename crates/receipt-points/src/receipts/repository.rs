use serde::{Deserialize, Serialize};

use super::domain::{Receipt, ReceiptId};

/// Accepted receipt keyed by its issued identifier. Never mutated after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReceipt {
    pub id: ReceiptId,
    pub receipt: Receipt,
}

/// Storage abstraction so the service can be exercised without a concrete store.
///
/// Implementations shared across request handlers must make a completed `insert` visible to
/// every later `fetch`.
pub trait ReceiptRepository: Send + Sync {
    fn insert(&self, record: StoredReceipt) -> Result<StoredReceipt, RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<StoredReceipt>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
