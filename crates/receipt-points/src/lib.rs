//! Loyalty points for submitted purchase receipts.
//!
//! The [`receipts`] module holds the scoring engine and the intake service built around it;
//! [`config`], [`telemetry`], and [`error`] carry the ambient service plumbing shared with the
//! API binary.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
