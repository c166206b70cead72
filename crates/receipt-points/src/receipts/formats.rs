//! Text grammars for the money, date, and time fields of a receipt.
//!
//! Each parser checks the raw text against an anchored pattern first and only then converts it,
//! so a value such as `"1e3"` or `" 12.00"` is a mismatch even where the typed parser would
//! accept it.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use rust_decimal::Decimal;

/// Text formats a receipt field can be required to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Amount,
    Date,
    Time,
}

impl TextFormat {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Amount => "decimal amount (digits with optional fraction, e.g. 12.25)",
            Self::Date => "calendar date (YYYY-MM-DD)",
            Self::Time => "24-hour time (HH:MM)",
        }
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a field's text does not match its required format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {format}")]
pub struct FormatMismatch {
    pub format: TextFormat,
    pub value: String,
}

impl FormatMismatch {
    fn new(format: TextFormat, value: &str) -> Self {
        Self {
            format,
            value: value.to_string(),
        }
    }
}

fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+(?:\.([0-9]+))?$").expect("amount pattern compiles"))
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("date pattern compiles")
    })
}

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").expect("time pattern compiles"))
}

/// Parse a non-negative currency amount such as `"35.35"` or `"100"`.
pub fn parse_amount(raw: &str) -> Result<Decimal, FormatMismatch> {
    let mismatch = || FormatMismatch::new(TextFormat::Amount, raw);
    let captures = amount_pattern().captures(raw).ok_or_else(mismatch)?;
    let fraction_digits = captures.get(1).map_or(0, |fraction| fraction.as_str().len());

    // Digit runs beyond Decimal's 96-bit mantissa fail outright; excess fraction digits are
    // rounded away by the parser, which shows up as a shorter scale.
    let amount = Decimal::from_str(raw).map_err(|_| mismatch())?;
    if amount.scale() as usize != fraction_digits {
        return Err(mismatch());
    }
    Ok(amount)
}

/// Parse a purchase date; the day must exist on the calendar.
pub fn parse_purchase_date(raw: &str) -> Result<NaiveDate, FormatMismatch> {
    let mismatch = || FormatMismatch::new(TextFormat::Date, raw);
    let captures = date_pattern().captures(raw).ok_or_else(mismatch)?;

    let year: i32 = captures[1].parse().map_err(|_| mismatch())?;
    let month: u32 = captures[2].parse().map_err(|_| mismatch())?;
    let day: u32 = captures[3].parse().map_err(|_| mismatch())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(mismatch)
}

/// Parse a 24-hour `HH:MM` purchase time.
pub fn parse_purchase_time(raw: &str) -> Result<NaiveTime, FormatMismatch> {
    let mismatch = || FormatMismatch::new(TextFormat::Time, raw);
    let captures = time_pattern().captures(raw).ok_or_else(mismatch)?;

    let hour: u32 = captures[1].parse().map_err(|_| mismatch())?;
    let minute: u32 = captures[2].parse().map_err(|_| mismatch())?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(mismatch)
}
