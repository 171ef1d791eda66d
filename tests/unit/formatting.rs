//! Display formatter contracts
//!
//! These helpers back every card, table cell and chart label, and must never
//! fail: unreadable input comes back unchanged.

use lava_burn_stats::utils::currency::{format_lava, format_lava_millions, format_percentage};
use lava_burn_stats::utils::number::{format_dollar_value, format_number, LooseValue};
use lava_burn_stats::utils::time::{format_date, format_full_date};

#[test]
fn test_lava_amounts() {
    assert_eq!(format_lava(985_088_593.0), "985,088,593.000");
    assert_eq!(format_lava(0.5), "0.500");
    assert_eq!(format_lava_millions(985_088_593.0), "985.1M");
}

#[test]
fn test_percentages() {
    assert_eq!(format_percentage(1.486), "1.4860%");
    assert_eq!(format_percentage(-0.25), "-0.2500%");
}

#[test]
fn test_dates() {
    assert_eq!(format_date("2024-12-30"), "2024 Dec");
    assert_eq!(format_full_date("2024-12-30"), "December 30, 2024");
    assert_eq!(format_date("not a date"), "not a date");
    assert_eq!(format_full_date(""), "");
}

#[test]
fn test_dollar_values() {
    assert_eq!(format_dollar_value(1234.5), "$1,234.50");
    assert_eq!(format_dollar_value("$1,200.5"), "$1,200.50");
    assert_eq!(format_dollar_value("not-a-number"), "not-a-number");
}

#[test]
fn test_numbers_accept_text_or_numbers() {
    assert_eq!(format_number("1500"), "1,500");
    assert_eq!(format_number(LooseValue::from(2.0)), "2");
    assert_eq!(format_number("pending"), "pending");
}
