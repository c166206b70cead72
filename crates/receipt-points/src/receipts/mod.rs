//! Receipt intake, format checks, and loyalty point scoring.
//!
//! Submissions pass through [`validation`] before the service issues an identifier and hands the
//! record to a [`ReceiptRepository`]. Lookups fetch the stored receipt and run it through the
//! stateless [`ScoringEngine`].

pub mod domain;
pub mod formats;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{Item, Receipt, ReceiptId};
pub use formats::{FormatMismatch, TextFormat};
pub use repository::{ReceiptRepository, RepositoryError, StoredReceipt};
pub use router::receipt_router;
pub use scoring::{score, PointRule, PointsBreakdown, ScoreComponent, ScoringEngine};
pub use service::{ReceiptService, ReceiptServiceError};
pub use validation::{validate, FieldViolation, ReceiptValidationError};
