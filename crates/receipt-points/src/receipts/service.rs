use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{Receipt, ReceiptId};
use super::repository::{ReceiptRepository, RepositoryError, StoredReceipt};
use super::scoring::{PointsBreakdown, ScoringEngine};
use super::validation::{validate, ReceiptValidationError};

/// Service composing submission checks, the receipt repository, and the scoring engine.
pub struct ReceiptService<R> {
    repository: Arc<R>,
    engine: ScoringEngine,
}

impl<R> ReceiptService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            engine: ScoringEngine::new(),
        }
    }

    /// Validate and store a receipt, returning the identifier issued for it.
    pub fn submit(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptServiceError> {
        if let Err(err) = validate(&receipt) {
            warn!(
                violations = err.violations.len(),
                retailer = %receipt.retailer,
                "receipt rejected"
            );
            return Err(err.into());
        }

        let record = StoredReceipt {
            id: ReceiptId::generate(),
            receipt,
        };
        let stored = self.repository.insert(record)?;
        info!(receipt_id = %stored.id, items = stored.receipt.items.len(), "receipt stored");

        Ok(stored.id)
    }

    /// Fetch a stored receipt.
    pub fn get(&self, id: &ReceiptId) -> Result<StoredReceipt, ReceiptServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Points awarded to a stored receipt.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        let breakdown = self.breakdown(id)?;
        for component in &breakdown.components {
            debug!(
                receipt_id = %id,
                rule = component.rule.label(),
                points = component.points,
                notes = %component.notes,
                "rule applied"
            );
        }
        debug!(receipt_id = %id, points = breakdown.total, "receipt scored");
        Ok(breakdown.total)
    }

    /// Per-rule breakdown for a stored receipt.
    pub fn breakdown(&self, id: &ReceiptId) -> Result<PointsBreakdown, ReceiptServiceError> {
        let record = self.get(id)?;
        Ok(self.engine.breakdown(&record.receipt))
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ReceiptValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ReceiptServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound))
    }
}
