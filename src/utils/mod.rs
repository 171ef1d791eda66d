//! Shared helpers: number/currency/date formatting, percentages and denominations

pub mod currency;
pub mod denom;
pub mod math;
pub mod number;
pub mod time;
