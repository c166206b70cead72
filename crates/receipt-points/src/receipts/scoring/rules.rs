use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::super::domain::Item;
use super::super::formats::{parse_amount, parse_purchase_date, parse_purchase_time};
use super::{PointRule, ScoreComponent};

const ROUND_TOTAL_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const TIME_WINDOW_POINTS: u64 = 10;
const TIME_WINDOW_START_HOUR: u32 = 14;
const TIME_WINDOW_END_HOUR: u32 = 16;

fn component(rule: PointRule, points: u64, notes: String) -> ScoreComponent {
    ScoreComponent {
        rule,
        points,
        notes,
    }
}

pub(crate) fn retailer_name(retailer: &str) -> ScoreComponent {
    let alphanumeric = retailer
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .count() as u64;

    component(
        PointRule::RetailerName,
        alphanumeric,
        format!("{alphanumeric} alphanumeric character(s) in '{retailer}'"),
    )
}

pub(crate) fn round_total(total: &str) -> ScoreComponent {
    match parse_amount(total) {
        Ok(amount) if amount.fract().is_zero() => component(
            PointRule::RoundTotal,
            ROUND_TOTAL_POINTS,
            format!("total {total} has no cents"),
        ),
        Ok(_) => component(PointRule::RoundTotal, 0, format!("total {total} has cents")),
        Err(err) => component(PointRule::RoundTotal, 0, err.to_string()),
    }
}

pub(crate) fn quarter_multiple(total: &str) -> ScoreComponent {
    let quarter = Decimal::new(25, 2);
    match parse_amount(total) {
        Ok(amount) if (amount % quarter).is_zero() => component(
            PointRule::QuarterMultiple,
            QUARTER_MULTIPLE_POINTS,
            format!("total {total} is a multiple of 0.25"),
        ),
        Ok(_) => component(
            PointRule::QuarterMultiple,
            0,
            format!("total {total} is not a multiple of 0.25"),
        ),
        Err(err) => component(PointRule::QuarterMultiple, 0, err.to_string()),
    }
}

pub(crate) fn item_pairs(item_count: usize) -> ScoreComponent {
    let pairs = (item_count / 2) as u64;
    component(
        PointRule::ItemPairs,
        pairs * POINTS_PER_ITEM_PAIR,
        format!("{pairs} pair(s) across {item_count} item(s)"),
    )
}

/// Points for a single item: `ceil(price * 0.2)` when the trimmed description length is a
/// multiple of three. `None` when the length does not qualify or the price is malformed.
/// An empty trimmed description has length zero and qualifies.
pub(crate) fn description_points(description: &str, price: &str) -> Option<u64> {
    let trimmed_len = description.trim().chars().count();
    if trimmed_len % 3 != 0 {
        return None;
    }

    let price = parse_amount(price).ok()?;
    let points = (price * Decimal::new(2, 1)).ceil();
    Some(points.to_u64().unwrap_or(u64::MAX))
}

pub(crate) fn item_descriptions(items: &[Item]) -> ScoreComponent {
    let mut qualifying = 0usize;
    let mut points = 0u64;

    for item in items {
        if let Some(item_points) = description_points(&item.short_description, &item.price) {
            qualifying += 1;
            points = points.saturating_add(item_points);
        }
    }

    component(
        PointRule::ItemDescriptions,
        points,
        format!(
            "{qualifying} of {} item(s) had a description length divisible by 3",
            items.len()
        ),
    )
}

pub(crate) fn purchase_date_parity(purchase_date: &str) -> ScoreComponent {
    match parse_purchase_date(purchase_date) {
        Ok(date) if date.day() % 2 == 1 => component(
            PointRule::PurchaseDateParity,
            ODD_DAY_POINTS,
            format!("day {} is odd", date.day()),
        ),
        Ok(date) => component(
            PointRule::PurchaseDateParity,
            0,
            format!("day {} is even", date.day()),
        ),
        Err(err) => component(PointRule::PurchaseDateParity, 0, err.to_string()),
    }
}

pub(crate) fn purchase_time_window(purchase_time: &str) -> ScoreComponent {
    match parse_purchase_time(purchase_time) {
        Ok(time) if (TIME_WINDOW_START_HOUR..TIME_WINDOW_END_HOUR).contains(&time.hour()) => {
            component(
                PointRule::PurchaseTimeWindow,
                TIME_WINDOW_POINTS,
                format!("purchased at {purchase_time}, inside 14:00-16:00"),
            )
        }
        Ok(_) => component(
            PointRule::PurchaseTimeWindow,
            0,
            format!("purchased at {purchase_time}, outside 14:00-16:00"),
        ),
        Err(err) => component(PointRule::PurchaseTimeWindow, 0, err.to_string()),
    }
}
