use std::fmt;

use serde::Serialize;

use super::domain::Receipt;
use super::formats::{parse_amount, parse_purchase_date, parse_purchase_time, FormatMismatch};

/// One field that failed its format check at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

impl FieldViolation {
    fn from_mismatch(field: impl Into<String>, mismatch: FormatMismatch) -> Self {
        Self {
            field: field.into(),
            reason: mismatch.to_string(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every format violation found on a rejected receipt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("receipt is invalid: {}", summarize(.violations))]
pub struct ReceiptValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ReceiptValidationError {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.violations
            .iter()
            .map(|violation| violation.field.as_str())
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check the date, time, total, and every item price of a submission.
///
/// All failing fields are reported together rather than stopping at the first.
pub fn validate(receipt: &Receipt) -> Result<(), ReceiptValidationError> {
    let mut violations = Vec::new();

    if let Err(err) = parse_purchase_date(&receipt.purchase_date) {
        violations.push(FieldViolation::from_mismatch("purchaseDate", err));
    }
    if let Err(err) = parse_purchase_time(&receipt.purchase_time) {
        violations.push(FieldViolation::from_mismatch("purchaseTime", err));
    }
    if let Err(err) = parse_amount(&receipt.total) {
        violations.push(FieldViolation::from_mismatch("total", err));
    }
    for (index, item) in receipt.items.iter().enumerate() {
        if let Err(err) = parse_amount(&item.price) {
            violations.push(FieldViolation::from_mismatch(
                format!("items[{index}].price"),
                err,
            ));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ReceiptValidationError { violations })
    }
}
