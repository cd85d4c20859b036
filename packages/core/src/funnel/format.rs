//! Display formatting for currency and percentages

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::funnel::market::REGIONAL_MARKET_DEFAULTS;

/// Format an amount in the regional currency, abbreviating thousands
/// and millions: `₡1.5M`, `₡45K`, `₡500`.
pub fn format_currency(amount: f64) -> String {
    format_currency_with(&REGIONAL_MARKET_DEFAULTS.currency, amount)
}

pub fn format_currency_with(symbol: &str, amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("{}{}M", symbol, to_fixed(amount / 1_000_000.0, 1))
    } else if amount >= 1_000.0 {
        format!("{}{}K", symbol, to_fixed(amount / 1_000.0, 0))
    } else {
        format!("{}{}", symbol, format_locale(amount))
    }
}

/// Format a percentage with one decimal. Missing or non-finite values
/// render as `0.0%`.
pub fn format_percentage(value: impl Into<Option<f64>>) -> String {
    match value.into() {
        Some(v) if v.is_finite() => format!("{}%", to_fixed(v, 1)),
        _ => "0.0%".to_string(),
    }
}

/// Fixed-point rendering of the exact binary value, ties away from zero.
///
/// `1.45` is stored as `1.4499...`, so it renders as `"1.4"` at one digit.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let Some(exact) = Decimal::from_f64_retain(value.abs()) else {
        return value.to_string();
    };

    let mut rounded = exact.round_dp_with_strategy(digits as u32, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(digits as u32);

    if value < 0.0 {
        format!("-{}", rounded)
    } else {
        rounded.to_string()
    }
}

/// en-US number rendering: comma thousands separators, at most three
/// fraction digits, no trailing zeros.
///
/// Rounds the shortest decimal form of the value, so `1.0005` renders as
/// `"1.001"` even though its binary value sits just below the tie.
pub fn format_locale(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let shortest = value.abs().to_string();
    let Some(decimal) = Decimal::from_str(&shortest)
        .ok()
        .or_else(|| Decimal::from_f64_retain(value.abs()))
    else {
        return shortest;
    };

    let rounded = decimal
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let fixed = rounded.to_string();
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
