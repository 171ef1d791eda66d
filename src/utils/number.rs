//! Tolerant number formatting for display values
//!
//! These helpers sit at the display edge: they accept either numbers or text
//! that already looks like a number (`"$1,234.5"`), and never fail. When text
//! cannot be coerced it is handed back untouched.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    /// Leading decimal number, the way a lenient float parser reads a prefix
    static ref LEADING_FLOAT: Regex =
        Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid regex");
}

/// Values that should never appear as a displayed figure
const MEANINGLESS_VALUES: [&str; 8] = ["null", "undefined", "none", "n/a", "na", "nil", "false", "0"];

/// A display value that is either numeric or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Number(f64),
    Text(String),
}

impl LooseValue {
    /// Coerce to a finite number, stripping `$` and `,` from text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            LooseValue::Number(n) if n.is_finite() => Some(*n),
            LooseValue::Number(_) => None,
            LooseValue::Text(text) => {
                let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
                let cleaned = cleaned.trim();
                if cleaned.is_empty() {
                    return None;
                }
                cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }
}

impl fmt::Display for LooseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LooseValue::Number(n) => write!(f, "{}", n),
            LooseValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for LooseValue {
    fn from(value: f64) -> Self {
        LooseValue::Number(value)
    }
}

impl From<u64> for LooseValue {
    fn from(value: u64) -> Self {
        LooseValue::Number(value as f64)
    }
}

impl From<i64> for LooseValue {
    fn from(value: i64) -> Self {
        LooseValue::Number(value as f64)
    }
}

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        LooseValue::Text(value.to_string())
    }
}

impl From<String> for LooseValue {
    fn from(value: String) -> Self {
        LooseValue::Text(value)
    }
}

/// Insert `,` thousands separators into the integer part of a formatted number
///
/// # Examples
/// ```
/// use lava_burn_stats::utils::number::group_thousands;
///
/// assert_eq!(group_thousands("1234567.890"), "1,234,567.890");
/// assert_eq!(group_thousands("-1234"), "-1,234");
/// assert_eq!(group_thousands("999"), "999");
/// ```
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    // NaN / inf and anything else non-decimal passes through untouched
    if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
        return formatted.to_string();
    }

    let chars: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(formatted.len() + chars.len() / 3);
    grouped.push_str(sign);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    grouped.push_str(frac_part);
    grouped
}

/// Format with a fixed number of decimals and thousands separators
pub fn format_fixed_grouped(value: f64, decimals: usize) -> String {
    // Avoid rendering "-0.000"
    let value = if value == 0.0 { 0.0 } else { value };
    group_thousands(&format!("{:.*}", decimals, value))
}

/// Format with up to three decimals (trailing zeros dropped) and separators
///
/// # Examples
/// ```
/// use lava_burn_stats::utils::number::format_plain_number;
///
/// assert_eq!(format_plain_number(277075327.0), "277,075,327");
/// assert_eq!(format_plain_number(1234.5), "1,234.5");
/// assert_eq!(format_plain_number(1.23456), "1.235");
/// ```
pub fn format_plain_number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let mut fixed = format!("{:.3}", value);
    if fixed.contains('.') {
        while fixed.ends_with('0') {
            fixed.pop();
        }
        if fixed.ends_with('.') {
            fixed.pop();
        }
    }
    if fixed == "-0" {
        fixed = "0".to_string();
    }
    group_thousands(&fixed)
}

/// Best-effort number formatting; returns the input unchanged when it is not numeric
///
/// # Examples
/// ```
/// use lava_burn_stats::utils::number::format_number;
///
/// assert_eq!(format_number(985088593.4), "985,088,593.4");
/// assert_eq!(format_number("1,234,567"), "1,234,567");
/// assert_eq!(format_number("pending"), "pending");
/// ```
pub fn format_number<V: Into<LooseValue>>(value: V) -> String {
    let value = value.into();
    match value.as_f64() {
        Some(n) => format_plain_number(n),
        None => value.to_string(),
    }
}

/// Best-effort USD formatting; returns the input unchanged when it is not numeric
///
/// # Examples
/// ```
/// use lava_burn_stats::utils::number::format_dollar_value;
///
/// assert_eq!(format_dollar_value(413416.0), "$413,416.00");
/// assert_eq!(format_dollar_value("$1060000.5"), "$1,060,000.50");
/// assert_eq!(format_dollar_value("not-a-number"), "not-a-number");
/// ```
pub fn format_dollar_value<V: Into<LooseValue>>(value: V) -> String {
    let value = value.into();
    match value.as_f64() {
        Some(n) if n < 0.0 => format!("-${}", format_fixed_grouped(-n, 2)),
        Some(n) => format!("${}", format_fixed_grouped(n, 2)),
        None => value.to_string(),
    }
}

/// Parse the numeric prefix of a display string (`"1,234.5 LAVA"` → 1234.5)
///
/// `$` and `,` are removed before parsing. Returns `None` when the text does
/// not start with a number.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    LEADING_FLOAT
        .find(&cleaned)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Whether a fetched text value carries information worth displaying
pub fn is_meaningful_text(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    let lower = trimmed.to_lowercase();
    !MEANINGLESS_VALUES.contains(&lower.as_str())
}
