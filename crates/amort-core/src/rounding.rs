//! Whole-currency-unit rounding and display formatting.
//!
//! Internal accumulation keeps full `Decimal` precision; rounding happens
//! only here, at the display/summary boundary. A formatted string is never
//! fed back into arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

const HUNDRED: Decimal = dec!(100);

/// Round to whole currency units, ties away from zero (commercial rounding,
/// not banker's).
pub fn round_currency(x: Money) -> Money {
    x.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a monetary value in whole currency units with "." as the
/// thousands separator, e.g. 1234567.89 -> "1.234.568".
pub fn format_currency(x: Money) -> String {
    let rounded = round_currency(x);
    if rounded.is_zero() {
        return "0".to_string();
    }
    let digits = rounded.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() {
        out.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format a rate as a percentage with two decimals, e.g. 0.12 -> "12.00%".
pub fn format_percent(rate: Rate) -> String {
    format!("{:.2}%", rate * HUNDRED)
}
