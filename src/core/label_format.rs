//! Text formatting for axis-value and trackball labels.
//!
//! Numeric patterns use the `0`/`#` digit placeholders (`"0.00"`, `"#,##0.#"`,
//! `"$0.0 k"`): `0` after the decimal separator is a mandatory digit, `#` an
//! optional one, a `,` in the integer part enables thousands grouping, and any
//! text around the placeholder run is kept as prefix/suffix. Date-time axes take
//! `chrono` strftime patterns.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::core::axis::{Axis, AxisKind};

pub const DEFAULT_NUMERIC_FORMAT: &str = "0.##";
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
struct NumericPattern<'a> {
    prefix: &'a str,
    suffix: &'a str,
    min_decimals: u32,
    max_decimals: u32,
    grouping: bool,
}

fn parse_numeric_pattern(pattern: &str) -> NumericPattern<'_> {
    let is_placeholder = |ch: char| matches!(ch, '0' | '#' | '.' | ',');
    let Some(start) = pattern.find(is_placeholder) else {
        return NumericPattern {
            prefix: pattern,
            suffix: "",
            min_decimals: 0,
            max_decimals: 2,
            grouping: false,
        };
    };
    let run_len = pattern[start..]
        .find(|ch: char| !is_placeholder(ch))
        .unwrap_or(pattern.len() - start);
    let run = &pattern[start..start + run_len];

    let (integer, fraction) = run.split_once('.').unwrap_or((run, ""));
    let min_decimals = fraction.chars().filter(|ch| *ch == '0').count() as u32;
    let max_decimals = fraction.chars().filter(|ch| matches!(ch, '0' | '#')).count() as u32;

    NumericPattern {
        prefix: &pattern[..start],
        suffix: &pattern[start + run_len..],
        min_decimals,
        max_decimals: max_decimals.max(min_decimals),
        grouping: integer.contains(','),
    }
}

/// Formats `value` with a `0`/`#` placeholder pattern.
#[must_use]
pub fn format_numeric(value: f64, pattern: &str) -> String {
    let Some(decimal) = Decimal::from_f64(value) else {
        if value.is_finite() {
            return format!("{value}");
        }
        return "nan".to_owned();
    };
    let parsed = parse_numeric_pattern(pattern);

    let mut rounded = decimal
        .round_dp_with_strategy(
            parsed.max_decimals,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        )
        .normalize();
    if rounded.scale() < parsed.min_decimals {
        rounded.rescale(parsed.min_decimals);
    }
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    let mut text = rounded.to_string();
    if parsed.grouping {
        text = group_thousands(&text);
    }
    format!("{}{}{}", parsed.prefix, text, parsed.suffix)
}

fn group_thousands(text: &str) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats unix seconds with a strftime pattern.
#[must_use]
pub fn format_date_time(seconds: f64, pattern: &str) -> String {
    if !seconds.is_finite() {
        return "nan".to_owned();
    }
    let millis = (seconds * 1_000.0).round() as i64;
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => dt.format(pattern).to_string(),
        None => format_numeric(seconds, DEFAULT_NUMERIC_FORMAT),
    }
}

/// Formats a raw data value the way `axis` displays it.
#[must_use]
pub fn format_axis_value(axis: &Axis, value: f64) -> String {
    match axis.kind() {
        AxisKind::Category => {
            let index = value.round();
            if index >= 0.0 {
                if let Some(name) = axis.categories().get(index as usize) {
                    return name.clone();
                }
            }
            format_numeric(index, axis.label_format().unwrap_or("0"))
        }
        AxisKind::Numeric | AxisKind::Logarithmic { .. } => {
            format_numeric(value, axis.label_format().unwrap_or(DEFAULT_NUMERIC_FORMAT))
        }
        AxisKind::DateTime => {
            format_date_time(value, axis.label_format().unwrap_or(DEFAULT_DATE_TIME_FORMAT))
        }
    }
}
