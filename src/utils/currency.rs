//! Currency formatting utilities for LAVA amounts and percentages
//!
//! This module provides standardised formatting for displaying LAVA amounts
//! in full precision and in millions, plus burn-rate percentages.

use super::number::format_fixed_grouped;

/// Display symbol for the native token
pub const LAVA_SYMBOL: &str = "LAVA";

/// Base-denomination units per LAVA (ulava)
pub const ULAVA_PER_LAVA: f64 = 1_000_000.0;

/// Format a LAVA amount with three decimals and thousands separators
///
/// # Examples
/// ```
/// use lava_burn_stats::utils::currency::format_lava;
///
/// assert_eq!(format_lava(1234.5), "1,234.500");
/// assert_eq!(format_lava(40859.2), "40,859.200");
/// ```
pub fn format_lava(amount: f64) -> String {
    format_fixed_grouped(amount, 3)
}

/// Format a LAVA amount in millions with one decimal and an `M` suffix
///
/// # Examples
/// ```
/// use lava_burn_stats::utils::currency::format_lava_millions;
///
/// assert_eq!(format_lava_millions(985088593.0), "985.1M");
/// assert_eq!(format_lava_millions(983_000_000.0), "983.0M");
/// ```
pub fn format_lava_millions(amount: f64) -> String {
    format!("{}M", format_fixed_grouped(amount / 1_000_000.0, 1))
}

/// Format a LAVA amount followed by the token symbol
pub fn format_lava_with_symbol(amount: f64) -> String {
    format!("{} {}", format_lava(amount), LAVA_SYMBOL)
}

/// Format a percentage with four decimals and a trailing `%`
///
/// # Examples
/// ```
/// use lava_burn_stats::utils::currency::format_percentage;
///
/// assert_eq!(format_percentage(1.486), "1.4860%");
/// assert_eq!(format_percentage(0.0), "0.0000%");
/// ```
pub fn format_percentage(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.4}%", value)
}

/// Format a value in millions of LAVA for chart labels (`"277.08M LAVA"`)
pub fn format_millions_label(amount: f64) -> String {
    format!("{:.2}M {}", amount / 1e6, LAVA_SYMBOL)
}
