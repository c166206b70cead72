use crate::infra::InMemoryReceiptRepository;
use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{
    validate, PointsBreakdown, Receipt, ReceiptService, ReceiptServiceError, ScoringEngine,
};
use std::path::PathBuf;
use std::sync::Arc;

const SAMPLE_RECEIPTS: [(&str, &str); 2] = [
    ("Target", include_str!("../fixtures/target.json")),
    ("M&M Corner Market", include_str!("../fixtures/corner-market.json")),
];

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Print the breakdown as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the per-rule breakdown for each sample receipt
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { receipt, json } = args;

    let raw = std::fs::read_to_string(&receipt)?;
    let receipt = score_document(&raw)?;
    let breakdown = ScoringEngine::new().breakdown(&receipt);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        render_breakdown(&receipt, &breakdown);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryReceiptRepository::default());
    let service = ReceiptService::new(repository.clone());

    println!("Receipt points demo");

    for (label, raw) in SAMPLE_RECEIPTS {
        let receipt: Receipt = serde_json::from_str(raw)?;
        let id = service.submit(receipt)?;
        let points = service.points(&id)?;

        println!("\n{label}: receipt {id} earned {points} points");
        if args.breakdown {
            let breakdown = service.breakdown(&id)?;
            render_components(&breakdown);
        }
    }

    println!("\nReceipts stored: {}", repository.len());
    Ok(())
}

/// Parse and check a receipt document for offline scoring.
fn score_document(raw: &str) -> Result<Receipt, AppError> {
    let receipt: Receipt = serde_json::from_str(raw)?;
    validate(&receipt).map_err(ReceiptServiceError::from)?;
    Ok(receipt)
}

fn render_breakdown(receipt: &Receipt, breakdown: &PointsBreakdown) {
    println!("Receipt from {}", receipt.retailer);
    println!(
        "Purchased {} at {}, {} item(s), total {}",
        receipt.purchase_date,
        receipt.purchase_time,
        receipt.items.len(),
        receipt.total
    );
    render_components(breakdown);
    println!("\nTotal points: {}", breakdown.total);
}

fn render_components(breakdown: &PointsBreakdown) {
    for component in &breakdown.components {
        println!(
            "- {}: {} ({})",
            component.rule.label(),
            component.points,
            component.notes
        );
    }
}
