use super::common::*;
use crate::receipts::scoring::rules::{
    description_points, item_descriptions, item_pairs, purchase_date_parity,
    purchase_time_window, quarter_multiple, retailer_name, round_total,
};
use crate::receipts::scoring::{score, PointRule, ScoringEngine};

#[test]
fn retailer_points_count_alphanumerics() {
    assert_eq!(retailer_name("M&Ms").points, 3);
    assert_eq!(retailer_name(" $TARGET% ^ R").points, 7);
    assert_eq!(retailer_name(" % hello *&$ ()").points, 5);
    assert_eq!(retailer_name("").points, 0);
}

#[test]
fn retailer_points_ignore_non_ascii_letters() {
    assert_eq!(retailer_name("Café 7").points, 4);
}

#[test]
fn inserting_punctuation_into_retailer_never_changes_score() {
    let base = canonical_receipt();
    let expected = score(&base);

    for decorated in ["T-a-r-g-e-t", " Target! ", "Tar & get", "(Target)", "T.a.r.g.e.t."] {
        let mut receipt = base.clone();
        receipt.retailer = decorated.to_string();
        assert_eq!(score(&receipt), expected, "retailer {decorated:?}");
    }
}

#[test]
fn round_and_quarter_rules_are_independent() {
    let cases = [
        ("100", 50, 25),
        ("60.00", 50, 25),
        ("80.99", 0, 0),
        ("60.25", 0, 25),
        ("80.75", 0, 25),
        ("9.50", 0, 25),
        ("0", 50, 25),
    ];

    for (total, round, quarter) in cases {
        assert_eq!(round_total(total).points, round, "round total for {total}");
        assert_eq!(
            quarter_multiple(total).points,
            quarter,
            "quarter multiple for {total}"
        );
    }
}

#[test]
fn malformed_totals_score_nothing() {
    for total in [".", "12.", ".00", "-5.00", "abc", ""] {
        assert_eq!(round_total(total).points, 0, "round total for {total:?}");
        assert_eq!(quarter_multiple(total).points, 0, "quarter for {total:?}");
    }
}

#[test]
fn item_pairs_round_down() {
    let expected = [(0, 0), (1, 0), (2, 5), (3, 5), (4, 10), (5, 10)];
    for (count, points) in expected {
        assert_eq!(item_pairs(count).points, points, "{count} items");
    }
}

#[test]
fn description_points_round_price_share_up() {
    assert_eq!(description_points(" Klarbrunn 12-PK 12 FL OZ", "12.00"), Some(3));
    assert_eq!(description_points("  Emils Cheese Pizza    ", "12.25"), Some(3));
    assert_eq!(description_points(" Klarbrunn 12-PK 12 FL OZ", "10.10"), Some(3));
    assert_eq!(description_points("ABC", "99"), Some(20));
}

#[test]
fn description_points_keep_exact_products() {
    assert_eq!(description_points("ABC", "10.00"), Some(2));
    assert_eq!(description_points("ABC", "0.00"), Some(0));
}

#[test]
fn description_points_skip_other_lengths_and_bad_prices() {
    assert_eq!(description_points("Gatorade", "2.25"), None);
    assert_eq!(description_points("Mountain Dew 12PK", "6.49"), None);
    assert_eq!(description_points("ABC", "2.25.1"), None);
}

#[test]
fn blank_description_is_scored_as_length_zero() {
    assert_eq!(description_points("", "5.00"), Some(1));
    assert_eq!(description_points("    ", "7.50"), Some(2));
}

#[test]
fn description_length_counts_characters_not_bytes() {
    assert_eq!(description_points("Café", "5.00"), None);
    assert_eq!(description_points("Crème brûlée", "10.00"), Some(2));
}

#[test]
fn item_descriptions_sum_across_items() {
    let receipt = target_receipt();
    let component = item_descriptions(&receipt.items);
    assert_eq!(component.points, 6);
    assert_eq!(component.rule, PointRule::ItemDescriptions);
    assert!(component.notes.starts_with("2 of 5"));
}

#[test]
fn date_parity_uses_day_of_month() {
    assert_eq!(purchase_date_parity("2022-01-01").points, 6);
    assert_eq!(purchase_date_parity("1990-01-19").points, 6);
    assert_eq!(purchase_date_parity("2021-01-10").points, 0);
    assert_eq!(purchase_date_parity("80.99").points, 0);
    assert_eq!(purchase_date_parity("2021-02-31").points, 0);
}

#[test]
fn time_window_is_half_open() {
    assert_eq!(purchase_time_window("13:01").points, 0);
    assert_eq!(purchase_time_window("13:59").points, 0);
    assert_eq!(purchase_time_window("14:00").points, 10);
    assert_eq!(purchase_time_window("14:33").points, 10);
    assert_eq!(purchase_time_window("15:59").points, 10);
    assert_eq!(purchase_time_window("16:00").points, 0);
    assert_eq!(purchase_time_window("2:30").points, 0);
}

#[test]
fn canonical_receipt_scores_seventeen() {
    assert_eq!(score(&canonical_receipt()), 17);
}

#[test]
fn reference_receipts_match_known_totals() {
    assert_eq!(score(&target_receipt()), 28);
    assert_eq!(score(&corner_market_receipt()), 109);
}

#[test]
fn breakdown_lists_every_rule_in_order() {
    let breakdown = ScoringEngine::new().breakdown(&corner_market_receipt());
    let rules: Vec<PointRule> = breakdown
        .components
        .iter()
        .map(|component| component.rule)
        .collect();

    assert_eq!(rules, PointRule::ordered().to_vec());
    assert_eq!(breakdown.total, 109);
    assert_eq!(breakdown.points_for(PointRule::RetailerName), 14);
    assert_eq!(breakdown.points_for(PointRule::RoundTotal), 50);
    assert_eq!(breakdown.points_for(PointRule::QuarterMultiple), 25);
    assert_eq!(breakdown.points_for(PointRule::ItemPairs), 10);
    assert_eq!(breakdown.points_for(PointRule::ItemDescriptions), 0);
    assert_eq!(breakdown.points_for(PointRule::PurchaseDateParity), 0);
    assert_eq!(breakdown.points_for(PointRule::PurchaseTimeWindow), 10);
}

#[test]
fn malformed_fields_zero_their_rules_without_failing() {
    let mut receipt = canonical_receipt();
    receipt.purchase_date = "yesterday".to_string();
    receipt.items[0].price = "free".to_string();
    receipt.total = "lots".to_string();

    let breakdown = ScoringEngine::new().breakdown(&receipt);
    assert_eq!(breakdown.total, 6 + 5);
    assert!(breakdown.components[5].notes.contains("'yesterday' is not a valid"));
}

#[test]
fn huge_item_price_saturates_the_total() {
    let mut receipt = canonical_receipt();
    receipt.items.push(item("ABC", "100000000000000000000"));
    assert!(crate::receipts::validate(&receipt).is_ok());

    let breakdown = ScoringEngine::new().breakdown(&receipt);
    assert_eq!(breakdown.points_for(PointRule::ItemDescriptions), u64::MAX);
    assert_eq!(breakdown.total, u64::MAX);
    assert_eq!(score(&receipt), u64::MAX);
}

#[test]
fn over_precise_totals_are_not_round() {
    let total = "1.00000000000000000000000000001";
    assert_eq!(round_total(total).points, 0);
    assert_eq!(quarter_multiple(total).points, 0);
}
