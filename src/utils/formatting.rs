//! Display helpers for currency, percentages and durations.
//! All of them take the currency explicitly; there is no global default.

use crate::core::calculator::grouping::BucketStats;
use crate::models::CurrencyType;

/// Placeholder shown for buckets without sessions.
pub const NO_DATA: &str = "-";

/// `1234567` → `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole currency units, e.g. `"$1,234"` or `"-€80"`.
pub fn format_currency(amount: i64, currency: CurrencyType) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!(
        "{}{}{}",
        sign,
        currency.symbol(),
        group_thousands(amount.unsigned_abs())
    )
}

/// Like `format_currency` with a `+` in front of gains.
pub fn format_signed_currency(amount: i64, currency: CurrencyType) -> String {
    if amount > 0 {
        format!("+{}", format_currency(amount, currency))
    } else {
        format_currency(amount, currency)
    }
}

/// Compact notation for cards and axis labels: `$950`, `$1.2K`, `$3.4M`, `$1B`.
pub fn short_hand(amount: i64, currency: CurrencyType) -> String {
    const UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

    let abs = amount.unsigned_abs() as f64;
    if abs < 1_000.0 {
        return format_currency(amount, currency);
    }

    let sign = if amount < 0 { "-" } else { "" };

    // Pick the unit after rounding so 999_960 reads "$1M", not "$1000K".
    let round1 = |div: f64| (abs / div * 10.0).round() / 10.0;
    let (div, suffix) = UNITS
        .iter()
        .rev()
        .copied()
        .find(|(div, _)| round1(*div) < 1_000.0)
        .unwrap_or(UNITS[0]);

    let text = format!("{:.1}", round1(div));
    let text = text.strip_suffix(".0").unwrap_or(&text);

    format!("{}{}{}{}", sign, currency.symbol(), text, suffix)
}

/// Ratio in `0.0..=1.0` as a whole percentage: `0.666` → `"67%"`.
pub fn format_percent(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as i64)
}

/// Percentage with one decimal and explicit sign, used for comparisons.
pub fn format_improvement(pct: f64) -> String {
    format!("{:+.1}%", pct)
}

/// Big blinds per hour with two decimals: `20.0` → `"20.00"`.
pub fn format_bb(value: f64) -> String {
    format!("{:.2}", value)
}

/// `0` → `"0h"`, `300` → `"5h"`, `330` → `"5h 30m"`.
pub fn format_hours(minutes: i64) -> String {
    let m = minutes.max(0);
    let (h, rest) = (m / 60, m % 60);
    if rest == 0 {
        format!("{h}h")
    } else {
        format!("{h}h {rest}m")
    }
}

pub fn bucket_total(b: &BucketStats, currency: CurrencyType) -> String {
    if b.is_empty() {
        NO_DATA.to_string()
    } else {
        format_currency(b.profit, currency)
    }
}

pub fn bucket_hourly(b: &BucketStats, currency: CurrencyType) -> String {
    if b.is_empty() {
        NO_DATA.to_string()
    } else {
        format!("{}/hr", format_currency(b.hourly_rate, currency))
    }
}

pub fn bucket_hours(b: &BucketStats) -> String {
    format_hours(b.minutes_played)
}

pub fn bucket_win_ratio(b: &BucketStats) -> String {
    if b.is_empty() {
        NO_DATA.to_string()
    } else {
        format_percent(b.win_ratio)
    }
}

pub fn bucket_bb(b: &BucketStats) -> String {
    match b.bb_per_hour {
        Some(v) if !b.is_empty() => format_bb(v),
        _ => NO_DATA.to_string(),
    }
}
