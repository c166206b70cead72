pub(crate) mod rules;

use serde::{Deserialize, Serialize};

use super::domain::Receipt;

/// Stateless engine summing the seven point rules for a receipt.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, receipt: &Receipt) -> u64 {
        self.breakdown(receipt).total
    }

    pub fn breakdown(&self, receipt: &Receipt) -> PointsBreakdown {
        let components = vec![
            rules::retailer_name(&receipt.retailer),
            rules::round_total(&receipt.total),
            rules::quarter_multiple(&receipt.total),
            rules::item_pairs(receipt.items.len()),
            rules::item_descriptions(&receipt.items),
            rules::purchase_date_parity(&receipt.purchase_date),
            rules::purchase_time_window(&receipt.purchase_time),
        ];
        let total = components
            .iter()
            .fold(0u64, |total, component| total.saturating_add(component.points));

        PointsBreakdown { total, components }
    }
}

/// Score a receipt with the default engine.
pub fn score(receipt: &Receipt) -> u64 {
    ScoringEngine::new().score(receipt)
}

/// The independent rules contributing to a receipt's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointRule {
    RetailerName,
    RoundTotal,
    QuarterMultiple,
    ItemPairs,
    ItemDescriptions,
    PurchaseDateParity,
    PurchaseTimeWindow,
}

impl PointRule {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::RetailerName,
            Self::RoundTotal,
            Self::QuarterMultiple,
            Self::ItemPairs,
            Self::ItemDescriptions,
            Self::PurchaseDateParity,
            Self::PurchaseTimeWindow,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RetailerName => "Retailer name",
            Self::RoundTotal => "Round dollar total",
            Self::QuarterMultiple => "Total is a multiple of 0.25",
            Self::ItemPairs => "Item pairs",
            Self::ItemDescriptions => "Item descriptions",
            Self::PurchaseDateParity => "Odd purchase day",
            Self::PurchaseTimeWindow => "Purchased 14:00-16:00",
        }
    }
}

/// Points awarded by one rule, with a note explaining the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: PointRule,
    pub points: u64,
    pub notes: String,
}

/// Per-rule audit trail whose `total` equals [`ScoringEngine::score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub total: u64,
    pub components: Vec<ScoreComponent>,
}

impl PointsBreakdown {
    pub fn points_for(&self, rule: PointRule) -> u64 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .fold(0u64, |total, component| total.saturating_add(component.points))
    }
}
